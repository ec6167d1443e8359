//! Physical Constants for Barometric Forecasting
//!
//! This module defines the standard-atmosphere constants used to move a
//! pressure reading from the altitude it was taken at to sea level, plus the
//! operating limits of phone-grade barometers.

// ===== FUNDAMENTAL PHYSICS CONSTANTS =====

/// Offset between Celsius and Kelvin.
///
/// Source: NIST Special Publication 330 (2019)
pub const CELSIUS_TO_KELVIN: f32 = 273.15;

/// Standard atmospheric pressure at sea level (hPa/mbar).
///
/// Reference pressure for the International Standard Atmosphere.
/// Actual pressure varies with weather patterns and altitude.
///
/// Source: International Standard Atmosphere (ISA)
pub const SEA_LEVEL_PRESSURE_HPA: f32 = 1013.25;

/// Standard temperature at sea level (°C).
///
/// Used in place of a missing or NaN thermometer reading when the
/// temperature-adjusted sea-level formula is enabled.
///
/// Source: International Standard Atmosphere (ISA)
pub const STANDARD_TEMPERATURE_C: f32 = 15.0;

/// Temperature lapse rate in the troposphere (K/m).
///
/// 6.5°C per 1000m.
///
/// Source: International Standard Atmosphere (ISA)
pub const TEMPERATURE_LAPSE_RATE_K_PER_M: f32 = 0.0065;

// ===== BAROMETRIC FORMULA =====

/// Scale height of the simplified barometric formula (m).
///
/// `T₀ / L = 288.15 K / 0.0065 K/m ≈ 44330 m`
pub const BAROMETRIC_SCALE_HEIGHT_M: f32 = 44330.0;

/// Exponent of the simplified barometric formula.
///
/// `g × M / (R × L) ≈ 5.255` for dry air.
pub const BAROMETRIC_EXPONENT: f32 = 5.255;

/// Exponent of the temperature-adjusted (hypsometric) reduction.
///
/// Slightly different rounding of `g × M / (R × L)` as used by the
/// WMO station-pressure reduction.
pub const HYPSOMETRIC_EXPONENT: f32 = 5.257;

// ===== BAROMETER LIMITS =====

/// Lowest raw pressure a phone barometer reports (hPa).
///
/// Roughly 9000m altitude; nothing a hiker carries reads below this.
///
/// Source: Bosch BMP388 / STMicro LPS22HB datasheets
pub const BAROMETER_MIN_HPA: f32 = 300.0;

/// Highest raw pressure a phone barometer reports (hPa).
///
/// Source: Bosch BMP388 / STMicro LPS22HB datasheets
pub const BAROMETER_MAX_HPA: f32 = 1100.0;
