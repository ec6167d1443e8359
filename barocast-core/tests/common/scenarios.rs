//! Reading histories with known forecasts

use barocast_core::constants::{MS_PER_DAY, MS_PER_HOUR};
use barocast_core::reading::PressureReading;
use barocast_core::{PressureCharacteristic, Weather, WeatherSettings};

use super::T0;

/// Complete forecast scenario with expectations
pub struct ForecastScenario {
    pub name: &'static str,
    pub settings: WeatherSettings,
    pub readings: Vec<PressureReading>,
    pub now: u64,
    pub tendency: PressureCharacteristic,
    pub tendency_amount: f32,
    pub hourly: Weather,
}

impl ForecastScenario {
    pub fn all() -> Vec<Self> {
        vec![Self::steady(), Self::storm(), Self::worsening()]
    }

    /// Flat pressure over three hours
    pub fn steady() -> Self {
        Self {
            name: "steady",
            settings: WeatherSettings::default().with_hourly_threshold(1.0),
            readings: vec![
                PressureReading::new(T0, 1013.0, 0.0),
                PressureReading::new(T0 + 3 * MS_PER_HOUR, 1013.0, 0.0),
            ],
            now: T0 + 3 * MS_PER_HOUR,
            tendency: PressureCharacteristic::Steady,
            tendency_amount: 0.0,
            hourly: Weather::NoChange,
        }
    }

    /// 13 hPa drop against a 10 hPa storm threshold
    pub fn storm() -> Self {
        Self {
            name: "storm",
            settings: WeatherSettings::default()
                .with_hourly_threshold(1.0)
                .with_storm_threshold(10.0),
            readings: vec![
                PressureReading::new(T0, 1013.0, 0.0),
                PressureReading::new(T0 + 3 * MS_PER_HOUR, 1000.0, 0.0),
            ],
            now: T0 + 3 * MS_PER_HOUR,
            tendency: PressureCharacteristic::Falling,
            tendency_amount: -13.0,
            hourly: Weather::Storm,
        }
    }

    /// Same drop, storm threshold out of reach
    pub fn worsening() -> Self {
        let storm = Self::storm();
        Self {
            name: "worsening",
            settings: storm.settings.with_storm_threshold(20.0),
            hourly: Weather::Worsening,
            ..storm
        }
    }
}

/// Two readings a day apart, rising by `rise` hPa
pub fn daily_rise(rise: f32) -> Vec<PressureReading> {
    vec![
        PressureReading::new(T0, 1005.0, 0.0),
        PressureReading::new(T0 + MS_PER_DAY, 1005.0 + rise, 0.0),
    ]
}
