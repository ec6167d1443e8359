//! Weather Service Facade
//!
//! Binds the user's [`WeatherSettings`] and a clock to the individual
//! pipeline stages:
//!
//! ```text
//! &[PressureReading] ─► convert_to_sea_level ─┬─► tendency ─► hourly_weather
//!                                             └─────────────► daily_weather
//! ```
//!
//! [`WeatherService::forecast`] runs the whole pipeline once and returns a
//! [`WeatherReport`] for the notification collaborator. It is the only entry
//! point that checks the time ordering of its input; the individual stages
//! assume sorted readings.
//!
//! ```rust
//! use barocast_core::{Weather, WeatherService, WeatherSettings};
//! use barocast_core::constants::MS_PER_HOUR;
//! use barocast_core::reading::PressureReading;
//! use barocast_core::time::FixedTime;
//!
//! let t0 = 1_700_000_000_000;
//! let settings = WeatherSettings::default()
//!     .with_hourly_threshold(1.0)
//!     .with_storm_threshold(10.0);
//! let service = WeatherService::new(settings, FixedTime::new(t0 + 3 * MS_PER_HOUR));
//!
//! let readings = [
//!     PressureReading::new(t0, 1013.0, 0.0),
//!     PressureReading::new(t0 + 3 * MS_PER_HOUR, 1000.0, 0.0),
//! ];
//!
//! let report = service.forecast(&readings)?;
//! assert_eq!(report.hourly, Weather::Storm);
//! # Ok::<(), barocast_core::ForecastError>(())
//! ```

use crate::comfort::{self, HeatAlert};
use crate::errors::ForecastResult;
use crate::forecast::{
    DailyForecaster, HourlyForecaster, PressureSystem, PressureTendency, TendencyCalculator, Weather,
};
use crate::reading::{check_time_order, PressureReading, SeaLevelPressure};
use crate::sealevel::{AltimeterSeaLevelPressureConverter, AltitudeConverter, SeaLevelPressureConverter};
use crate::settings::WeatherSettings;
use crate::time::TimeSource;

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

/// Result of one pass over the reading history
#[derive(Debug, Clone, PartialEq)]
pub struct WeatherReport {
    pub hourly: Weather,
    pub daily: Weather,
    pub tendency: PressureTendency,
    /// Pressure system of the latest reading, if any
    pub pressure_system: Option<PressureSystem>,
    /// Sea-level readings the forecast was made from
    pub readings: Vec<SeaLevelPressure>,
}

/// Forecasting pipeline configured from user settings
#[derive(Debug, Clone)]
pub struct WeatherService<T: TimeSource> {
    settings: WeatherSettings,
    clock: T,
    tendency: TendencyCalculator,
    hourly: HourlyForecaster,
    daily: DailyForecaster,
}

impl<T: TimeSource> WeatherService<T> {
    pub fn new(settings: WeatherSettings, clock: T) -> Self {
        Self {
            tendency: TendencyCalculator::new(settings.hourly_forecast_change_threshold),
            hourly: HourlyForecaster::new(settings.storm_threshold),
            daily: DailyForecaster::new(settings.daily_forecast_change_threshold),
            settings,
            clock,
        }
    }

    pub fn settings(&self) -> &WeatherSettings {
        &self.settings
    }

    pub fn clock(&self) -> &T {
        &self.clock
    }

    pub fn clock_mut(&mut self) -> &mut T {
        &mut self.clock
    }

    /// Sea-level converter configured from the dwell and temperature settings
    pub fn sea_level_converter(&self) -> AltimeterSeaLevelPressureConverter {
        AltimeterSeaLevelPressureConverter::new(
            AltitudeConverter::new(self.settings.dwell()),
            self.settings.use_temperature,
        )
    }

    pub fn convert_to_sea_level(&self, readings: &[PressureReading]) -> Vec<SeaLevelPressure> {
        self.sea_level_converter().convert(readings)
    }

    /// 3-hour tendency relative to the service clock
    pub fn tendency(
        &self,
        readings: &[SeaLevelPressure],
        last_reading: Option<&SeaLevelPressure>,
    ) -> PressureTendency {
        self.tendency.calculate(readings, last_reading, self.clock.now())
    }

    pub fn hourly_weather(
        &self,
        readings: &[SeaLevelPressure],
        last_reading: Option<&SeaLevelPressure>,
    ) -> Weather {
        let tendency = self.tendency(readings, last_reading);
        self.hourly.forecast(&tendency, readings.last())
    }

    pub fn daily_weather(&self, readings: &[SeaLevelPressure]) -> Weather {
        self.daily.forecast(readings)
    }

    /// Run the full pipeline over raw readings sorted by time
    pub fn forecast(&self, readings: &[PressureReading]) -> ForecastResult<WeatherReport> {
        check_time_order(readings, |r| r.time)?;

        let sea_level = self.convert_to_sea_level(readings);
        let tendency = self.tendency(&sea_level, None);
        let hourly = self.hourly.forecast(&tendency, sea_level.last());
        let daily = self.daily.forecast(&sea_level);
        let pressure_system = sea_level.last().map(|r| PressureSystem::classify(r.pressure));

        log_debug!(
            "Forecast from {} readings: hourly {}, daily {}, tendency {:.2} hPa",
            sea_level.len(),
            hourly,
            daily,
            tendency.amount
        );

        Ok(WeatherReport {
            hourly,
            daily,
            tendency,
            pressure_system,
            readings: sea_level,
        })
    }

    pub fn heat_index(&self, temperature_c: f32, relative_humidity: f32) -> f32 {
        comfort::heat_index(temperature_c, relative_humidity)
    }

    pub fn heat_alert(&self, heat_index: f32) -> HeatAlert {
        comfort::heat_alert(heat_index)
    }

    pub fn dew_point(&self, temperature_c: f32, relative_humidity: f32) -> Option<f32> {
        comfort::dew_point(temperature_c, relative_humidity)
    }
}
