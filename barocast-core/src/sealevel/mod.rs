//! Sea-Level Pressure Reduction
//!
//! ## Physics Background
//!
//! Station pressure falls roughly 12 hPa per 100m of climb. Weather changes
//! are an order of magnitude smaller (a storm is ~6 hPa in three hours), so
//! readings must be reduced to a common reference, sea level, before they can
//! be compared across a hike.
//!
//! ### Standard Atmosphere Reduction
//!
//! ```text
//! P₀ = P / (1 - h / 44330)^5.255
//!
//! Where:
//! - P  = station pressure (hPa)
//! - h  = altitude (m)
//! - 44330 = T₀ / L (288.15 K / 0.0065 K/m)
//! - 5.255 = g×M / (R×L)
//! ```
//!
//! ### Temperature-Adjusted Reduction
//!
//! The standard atmosphere assumes 15°C at sea level. When a thermometer is
//! available the actual air column temperature gives a better estimate:
//!
//! ```text
//! P₀ = P × (1 - 0.0065h / (T + 0.0065h + 273.15))^-5.257
//! ```
//!
//! A missing or NaN temperature falls back to the standard 15°C.
//!
//! ## Conversion Strategies
//!
//! [`SeaLevelPressureConverter`] is the seam for alternative strategies. The
//! default, [`AltimeterSeaLevelPressureConverter`], compensates the altitude
//! with an [`AltitudeConverter`] before reducing each reading.

mod altimeter;
mod altitude;

pub use altimeter::AltimeterSeaLevelPressureConverter;
pub use altitude::AltitudeConverter;

use libm::powf;

use crate::constants::physics::{
    BAROMETRIC_EXPONENT, BAROMETRIC_SCALE_HEIGHT_M, CELSIUS_TO_KELVIN, HYPSOMETRIC_EXPONENT,
    STANDARD_TEMPERATURE_C, TEMPERATURE_LAPSE_RATE_K_PER_M,
};
use crate::reading::{PressureReading, SeaLevelPressure};

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

/// Strategy for reducing raw readings to sea-level pressure
pub trait SeaLevelPressureConverter {
    /// One sea-level reading per input, order preserved
    fn convert(&self, readings: &[PressureReading]) -> Vec<SeaLevelPressure>;
}

/// Standard-atmosphere reduction of a station pressure to sea level
pub fn sea_level_pressure(pressure_hpa: f32, altitude_m: f32) -> f32 {
    pressure_hpa / powf(1.0 - altitude_m / BAROMETRIC_SCALE_HEIGHT_M, BAROMETRIC_EXPONENT)
}

/// Temperature-adjusted reduction; `None` or NaN uses 15°C
pub fn sea_level_pressure_with_temperature(
    pressure_hpa: f32,
    altitude_m: f32,
    temperature_c: Option<f32>,
) -> f32 {
    let temperature = match temperature_c {
        Some(t) if !t.is_nan() => t,
        _ => STANDARD_TEMPERATURE_C,
    };
    let lapse = TEMPERATURE_LAPSE_RATE_K_PER_M * altitude_m;
    pressure_hpa * powf(
        1.0 - lapse / (temperature + lapse + CELSIUS_TO_KELVIN),
        -HYPSOMETRIC_EXPONENT,
    )
}
