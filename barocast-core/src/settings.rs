//! Forecast configuration
//!
//! All thresholds come from the user's preferences. They are read once per
//! update cycle and never mutated by the core. Pressure thresholds are in hPa
//! over the window of the forecaster that uses them:
//!
//! ```text
//! Setting                          Window          Default
//! ---------------------------------------------------------
//! storm_threshold                  3 hours         6.0 hPa
//! hourly_forecast_change_threshold 3 hours         1.5 hPa
//! daily_forecast_change_threshold  2-day history   3.0 hPa
//! max_altitude_change_for_dwell    dwell segment   60 m
//! max_pressure_change_for_dwell    3 hours         1.5 hPa
//! ```
//!
//! Hosts that keep preferences as JSON can load them with
//! [`WeatherSettings::from_json`]; missing keys fall back to the defaults.

use crate::constants::weather::{
    DEFAULT_DAILY_CHANGE_THRESHOLD_HPA, DEFAULT_HOURLY_CHANGE_THRESHOLD_HPA,
    DEFAULT_MAX_DWELL_ALTITUDE_CHANGE_M, DEFAULT_MAX_DWELL_PRESSURE_CHANGE_HPA,
    DEFAULT_STORM_THRESHOLD_HPA,
};
use crate::errors::{ForecastError, ForecastResult};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// User-tunable forecast thresholds and flags
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct WeatherSettings {
    /// Fall (hPa / 3h) beyond which the hourly forecast reports a storm
    pub storm_threshold: f32,

    /// Change (hPa over the retained history) the daily forecast reacts to
    pub daily_forecast_change_threshold: f32,

    /// Change (hPa / 3h) the hourly forecast reacts to
    pub hourly_forecast_change_threshold: f32,

    /// Require barometric corroboration before accepting an altitude jump
    pub use_barometer_trend: bool,

    /// Use the thermometer in the sea-level reduction
    pub use_temperature: bool,

    /// Smooth altitude over dwell periods instead of trusting the altimeter
    pub require_dwell: bool,

    /// Altitude band (m) a reading must stay within to extend a dwell
    pub max_altitude_change_for_dwell: f32,

    /// Pressure change (hPa / 3h) that corroborates an altitude jump
    pub max_pressure_change_for_dwell: f32,

    /// Send a notification when a storm is forecast
    pub send_storm_alerts: bool,

    /// Push the hourly forecast to the persistent weather notification
    pub show_weather_notification: bool,
}

impl Default for WeatherSettings {
    fn default() -> Self {
        Self {
            storm_threshold: DEFAULT_STORM_THRESHOLD_HPA,
            daily_forecast_change_threshold: DEFAULT_DAILY_CHANGE_THRESHOLD_HPA,
            hourly_forecast_change_threshold: DEFAULT_HOURLY_CHANGE_THRESHOLD_HPA,
            use_barometer_trend: true,
            use_temperature: false,
            require_dwell: false,
            max_altitude_change_for_dwell: DEFAULT_MAX_DWELL_ALTITUDE_CHANGE_M,
            max_pressure_change_for_dwell: DEFAULT_MAX_DWELL_PRESSURE_CHANGE_HPA,
            send_storm_alerts: true,
            show_weather_notification: true,
        }
    }
}

impl WeatherSettings {
    pub fn with_storm_threshold(mut self, hpa: f32) -> Self {
        self.storm_threshold = hpa;
        self
    }

    pub fn with_hourly_threshold(mut self, hpa: f32) -> Self {
        self.hourly_forecast_change_threshold = hpa;
        self
    }

    pub fn with_daily_threshold(mut self, hpa: f32) -> Self {
        self.daily_forecast_change_threshold = hpa;
        self
    }

    pub fn with_temperature(mut self, enabled: bool) -> Self {
        self.use_temperature = enabled;
        self
    }

    pub fn with_barometer_trend(mut self, enabled: bool) -> Self {
        self.use_barometer_trend = enabled;
        self
    }

    /// Enable dwell smoothing with the given altitude (m) and pressure (hPa) bands
    pub fn with_dwell(mut self, max_altitude_change: f32, max_pressure_change: f32) -> Self {
        self.require_dwell = true;
        self.max_altitude_change_for_dwell = max_altitude_change;
        self.max_pressure_change_for_dwell = max_pressure_change;
        self
    }

    pub fn with_storm_alerts(mut self, enabled: bool) -> Self {
        self.send_storm_alerts = enabled;
        self
    }

    pub fn with_weather_notification(mut self, enabled: bool) -> Self {
        self.show_weather_notification = enabled;
        self
    }

    /// Dwell parameters for the altitude converter
    pub fn dwell(&self) -> DwellSettings {
        DwellSettings {
            require_dwell: self.require_dwell,
            max_altitude_change: self.max_altitude_change_for_dwell,
            max_pressure_change: self.max_pressure_change_for_dwell,
            use_barometer_trend: self.use_barometer_trend,
        }
    }

    /// Reject negative or non-numeric thresholds
    pub fn validate(&self) -> ForecastResult<()> {
        let thresholds = [
            (self.storm_threshold, "storm threshold"),
            (self.daily_forecast_change_threshold, "daily forecast change threshold"),
            (self.hourly_forecast_change_threshold, "hourly forecast change threshold"),
            (self.max_altitude_change_for_dwell, "max altitude change for dwell"),
            (self.max_pressure_change_for_dwell, "max pressure change for dwell"),
        ];

        for (value, reason) in thresholds {
            if !value.is_finite() || value < 0.0 {
                return Err(ForecastError::InvalidSettings { reason });
            }
        }

        Ok(())
    }

    /// Parse settings from a JSON document
    #[cfg(feature = "std")]
    pub fn from_json(json: &str) -> ForecastResult<Self> {
        let settings: Self = serde_json::from_str(json).map_err(|e| {
            log_warn!("Weather settings rejected: {}", e);
            let reason = match e.classify() {
                serde_json::error::Category::Io => "I/O failure",
                serde_json::error::Category::Syntax => "malformed JSON",
                serde_json::error::Category::Data => "unexpected value type",
                serde_json::error::Category::Eof => "truncated document",
            };
            ForecastError::InvalidConfig { reason }
        })?;

        settings.validate()?;
        Ok(settings)
    }
}

/// Parameters for dwell-based altitude smoothing
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DwellSettings {
    pub require_dwell: bool,
    /// Altitude band in meters; also the accuracy limit for trusted readings
    pub max_altitude_change: f32,
    /// Pressure change in hPa over 3 hours
    pub max_pressure_change: f32,
    pub use_barometer_trend: bool,
}

impl Default for DwellSettings {
    fn default() -> Self {
        WeatherSettings::default().dwell()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        assert!(WeatherSettings::default().validate().is_ok());
    }

    #[test]
    fn rejects_bad_thresholds() {
        let negative = WeatherSettings::default().with_storm_threshold(-1.0);
        assert_eq!(
            negative.validate(),
            Err(ForecastError::InvalidSettings { reason: "storm threshold" })
        );

        let nan = WeatherSettings::default().with_hourly_threshold(f32::NAN);
        assert!(nan.validate().is_err());

        let infinite = WeatherSettings::default().with_daily_threshold(f32::INFINITY);
        assert!(infinite.validate().is_err());
    }

    #[test]
    fn dwell_builder_enables_smoothing() {
        let settings = WeatherSettings::default().with_dwell(30.0, 2.0);
        let dwell = settings.dwell();

        assert!(dwell.require_dwell);
        assert_eq!(dwell.max_altitude_change, 30.0);
        assert_eq!(dwell.max_pressure_change, 2.0);
    }

    #[cfg(feature = "std")]
    #[test]
    fn json_fills_missing_keys_with_defaults() {
        let settings = WeatherSettings::from_json(r#"{ "storm_threshold": 4.5, "require_dwell": true }"#)
            .unwrap();

        assert_eq!(settings.storm_threshold, 4.5);
        assert!(settings.require_dwell);
        assert_eq!(
            settings.hourly_forecast_change_threshold,
            DEFAULT_HOURLY_CHANGE_THRESHOLD_HPA
        );
    }

    #[cfg(feature = "std")]
    #[test]
    fn json_errors_are_classified() {
        assert_eq!(
            WeatherSettings::from_json("{ storm"),
            Err(ForecastError::InvalidConfig { reason: "malformed JSON" })
        );
        assert_eq!(
            WeatherSettings::from_json(r#"{ "storm_threshold": "high" }"#),
            Err(ForecastError::InvalidConfig { reason: "unexpected value type" })
        );
        assert_eq!(
            WeatherSettings::from_json(r#"{ "storm_threshold": -2.0 }"#),
            Err(ForecastError::InvalidSettings { reason: "storm threshold" })
        );
    }
}
