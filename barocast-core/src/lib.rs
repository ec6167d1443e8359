//! Barometric weather forecasting core
//!
//! Turns a history of phone barometer readings into short-range forecasts:
//! corrects each reading to sea level, measures the 3-hour pressure tendency,
//! and classifies the outlook as improving, worsening, unchanged or a storm.
//! A small policy decides when a storm notification is raised and cleared.
//!
//! Key constraints:
//! - `no_std` + `alloc` capable; `std` only adds the system clock, logging
//!   and JSON settings
//! - Pure, synchronous computations; persistent state lives behind
//!   caller-supplied traits
//! - Missing data yields neutral forecasts, never errors
//!
//! ```rust
//! use barocast_core::{Weather, WeatherService, WeatherSettings};
//! use barocast_core::reading::PressureReading;
//! use barocast_core::time::FixedTime;
//!
//! let service = WeatherService::new(WeatherSettings::default(), FixedTime::new(0));
//! let report = service.forecast(&[PressureReading::new(0, 1013.0, 0.0)])?;
//!
//! assert_eq!(report.hourly, Weather::NoChange);
//! # Ok::<(), barocast_core::ForecastError>(())
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(unsafe_code)]

#[cfg(not(feature = "std"))]
extern crate alloc;

// Logging macros: forward to `log` when enabled, otherwise compile away
#[cfg(feature = "log")]
macro_rules! log_debug {
    ($($arg:tt)*) => { log::debug!($($arg)*) };
}

#[cfg(not(feature = "log"))]
macro_rules! log_debug {
    ($($arg:tt)*) => {{ let _ = format_args!($($arg)*); }};
}

#[cfg(feature = "log")]
macro_rules! log_info {
    ($($arg:tt)*) => { log::info!($($arg)*) };
}

#[cfg(not(feature = "log"))]
macro_rules! log_info {
    ($($arg:tt)*) => {{ let _ = format_args!($($arg)*); }};
}

#[cfg(feature = "log")]
macro_rules! log_warn {
    ($($arg:tt)*) => { log::warn!($($arg)*) };
}

#[cfg(not(feature = "log"))]
macro_rules! log_warn {
    ($($arg:tt)*) => {{ let _ = format_args!($($arg)*); }};
}

pub mod alert;
pub mod comfort;
pub mod constants;
pub mod errors;
pub mod forecast;
pub mod monitor;
pub mod reading;
pub mod sealevel;
pub mod service;
pub mod settings;
pub mod time;
pub mod validation;

// Public API
pub use alert::{AlertAction, AlertState, AlertStateStore, StormAlertPolicy, StormNotifier};
pub use errors::{ForecastError, ForecastResult};
pub use forecast::{
    DailyForecaster, HourlyForecaster, PressureCharacteristic, PressureSystem, PressureTendency,
    TendencyCalculator, Weather,
};
pub use monitor::{CycleOutcome, ForecastNotifier, PressureRepository, WeatherMonitor};
pub use reading::{PressureReading, SeaLevelPressure};
pub use sealevel::{AltimeterSeaLevelPressureConverter, AltitudeConverter, SeaLevelPressureConverter};
pub use service::{WeatherReport, WeatherService};
pub use settings::{DwellSettings, WeatherSettings};
pub use time::{TimeSource, Timestamp};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn version_exists() {
        assert!(!VERSION.is_empty());
    }
}
