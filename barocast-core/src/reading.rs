//! Pressure reading types
//!
//! Two shapes flow through the pipeline:
//!
//! ```text
//! PressureReading ──altitude + sea-level conversion──► SeaLevelPressure
//!  (raw barometer,                                      (what the barometer
//!   altimeter, thermometer)                              would read at 0 m)
//! ```
//!
//! Raw readings are created once per sampling cycle and never mutated.
//! Every sequence handed to a converter or forecaster must be strictly
//! time-ascending; [`check_time_order`] is the guard the service facade runs.

use crate::errors::{ForecastError, ForecastResult};
use crate::time::Timestamp;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Raw sample from the barometer, altimeter and thermometer
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PressureReading {
    /// When the sample was taken
    pub time: Timestamp,
    /// Station pressure in hPa
    pub pressure: f32,
    /// Altimeter reading in meters
    pub altitude: f32,
    /// Altimeter uncertainty in meters, if the sensor reports one
    pub altitude_accuracy: Option<f32>,
    /// Air temperature in °C, if a thermometer is available
    pub temperature: Option<f32>,
}

impl PressureReading {
    /// Reading with no accuracy or temperature information
    pub const fn new(time: Timestamp, pressure: f32, altitude: f32) -> Self {
        Self {
            time,
            pressure,
            altitude,
            altitude_accuracy: None,
            temperature: None,
        }
    }

    pub fn with_accuracy(mut self, accuracy_m: f32) -> Self {
        self.altitude_accuracy = Some(accuracy_m);
        self
    }

    pub fn with_temperature(mut self, temperature_c: f32) -> Self {
        self.temperature = Some(temperature_c);
        self
    }
}

/// Pressure reduced to sea level
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SeaLevelPressure {
    pub time: Timestamp,
    /// Sea-level-equivalent pressure in hPa
    pub pressure: f32,
}

impl SeaLevelPressure {
    pub const fn new(time: Timestamp, pressure: f32) -> Self {
        Self { time, pressure }
    }
}

/// Verify that timestamps strictly increase.
///
/// Returns the index of the first offending element.
pub fn check_time_order<T>(items: &[T], time_of: impl Fn(&T) -> Timestamp) -> ForecastResult<()> {
    for (index, pair) in items.windows(2).enumerate() {
        if time_of(&pair[1]) <= time_of(&pair[0]) {
            return Err(ForecastError::UnsortedReadings { index: index + 1 });
        }
    }
    Ok(())
}
