//! Error Types for the Forecasting Core
//!
//! ## Design Philosophy
//!
//! Almost nothing in the forecasting pipeline can fail. Missing data is not an
//! error: an empty or too-short history produces a neutral result (`Steady`
//! tendency, `NoChange` forecast) and the caller carries on. Invalid numeric
//! inputs such as a NaN temperature or an absent altitude accuracy are handled
//! by defaulting.
//!
//! What remains falls into two groups:
//!
//! ### Caller Contract Violations
//! - `UnsortedReadings`: the reading history was not strictly time-ascending
//! - `InvalidSettings`: a threshold is negative or not a number
//!
//! ### Collaborator Failures
//! - `InvalidReading` / `OutOfRange`: a freshly sampled reading is not plausible
//! - `StoreUnavailable`: the reading repository or alert-state store failed
//! - `NotifierUnavailable`: a storm or forecast notification could not be delivered
//! - `InvalidConfig`: settings could not be parsed
//!
//! Like the rest of the crate, errors are small `Copy` values with
//! `&'static str` reasons so they can be returned from `no_std` code without
//! allocation.
//!
//! ## Example
//!
//! ```rust
//! use barocast_core::{ForecastError, WeatherService, WeatherSettings};
//! use barocast_core::reading::PressureReading;
//! use barocast_core::time::FixedTime;
//!
//! let service = WeatherService::new(WeatherSettings::default(), FixedTime::new(0));
//! let readings = [
//!     PressureReading::new(2_000, 1013.0, 0.0),
//!     PressureReading::new(1_000, 1012.0, 0.0),
//! ];
//!
//! match service.forecast(&readings) {
//!     Err(ForecastError::UnsortedReadings { index }) => assert_eq!(index, 1),
//!     other => panic!("expected ordering violation, got {:?}", other),
//! }
//! ```

use thiserror_no_std::Error;

/// Result type for forecasting operations
pub type ForecastResult<T> = Result<T, ForecastError>;

/// Forecasting errors - kept small and `Copy`
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum ForecastError {
    /// Reading times do not strictly increase
    #[error("Readings out of order at index {index}")]
    UnsortedReadings {
        /// Index of the first reading whose time is not after its predecessor
        index: usize,
    },

    /// A configuration threshold makes no sense
    #[error("Invalid settings: {reason}")]
    InvalidSettings {
        /// Which threshold was rejected
        reason: &'static str,
    },

    /// Settings document could not be parsed
    #[error("Invalid configuration: {reason}")]
    InvalidConfig {
        /// Parser failure category
        reason: &'static str,
    },

    /// Sampled value is not a usable number (NaN, infinity, zero pressure)
    #[error("Invalid reading: {reason}")]
    InvalidReading {
        /// Why the sample was rejected
        reason: &'static str,
    },

    /// Sampled value outside the barometer's operating range
    #[error("Value {value} outside range [{min}, {max}]")]
    OutOfRange {
        /// The rejected reading
        value: f32,
        /// Lower operating limit
        min: f32,
        /// Upper operating limit
        max: f32,
    },

    /// Reading repository or alert-state store failed
    #[error("Store unavailable: {reason}")]
    StoreUnavailable {
        /// Failure reported by the store
        reason: &'static str,
    },

    /// Storm or forecast notification could not be delivered
    #[error("Notifier unavailable: {reason}")]
    NotifierUnavailable {
        /// Failure reported by the notifier
        reason: &'static str,
    },
}

#[cfg(feature = "defmt")]
impl defmt::Format for ForecastError {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            Self::UnsortedReadings { index } =>
                defmt::write!(fmt, "Readings out of order at {}", index),
            Self::InvalidSettings { reason } =>
                defmt::write!(fmt, "Invalid settings: {}", reason),
            Self::InvalidConfig { reason } =>
                defmt::write!(fmt, "Invalid config: {}", reason),
            Self::InvalidReading { reason } =>
                defmt::write!(fmt, "Invalid reading: {}", reason),
            Self::OutOfRange { value, min, max } =>
                defmt::write!(fmt, "Value {} outside [{}, {}]", value, min, max),
            Self::StoreUnavailable { reason } =>
                defmt::write!(fmt, "Store unavailable: {}", reason),
            Self::NotifierUnavailable { reason } =>
                defmt::write!(fmt, "Notifier unavailable: {}", reason),
        }
    }
}
