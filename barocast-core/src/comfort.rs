//! Thermal Comfort Indices
//!
//! ## Heat Index
//!
//! How hot it feels when humidity stops sweat from evaporating. Below 27°C
//! humidity has little effect and the heat index is the air temperature.
//! Above it, the NWS Rothfusz regression (Celsius coefficients) applies:
//!
//! ```text
//! HI = c1 + c2·T + c3·R + c4·T·R + c5·T² + c6·R² + c7·T²·R + c8·T·R² + c9·T²·R²
//! ```
//!
//! ## Heat Alert Levels
//!
//! ```text
//! Apparent temp (°C)   Level
//! ------------------------------------
//! ≤ -25                FrostbiteDanger
//! ≤ -17                FrostbiteWarning
//! ≤ 5                  FrostbiteCaution
//! < 27                 Normal
//! ≤ 32                 HeatCaution
//! ≤ 39                 HeatWarning
//! ≤ 51                 HeatAlert
//! > 51                 HeatDanger
//! ```
//!
//! ## Dew Point
//!
//! Magnus-Tetens approximation:
//!
//! ```text
//! γ(T,RH) = ln(RH/100) + (a × T)/(b + T)
//! Td = (b × γ)/(a - γ)
//! ```

use libm::logf;

use crate::constants::weather::{
    FROSTBITE_CAUTION_C, FROSTBITE_DANGER_C, FROSTBITE_WARNING_C, HEAT_ALERT_C, HEAT_CAUTION_C,
    HEAT_INDEX_MIN_TEMPERATURE_C, HEAT_WARNING_C, MAGNUS_A, MAGNUS_B,
};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Apparent-temperature warning level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum HeatAlert {
    FrostbiteDanger,
    FrostbiteWarning,
    FrostbiteCaution,
    Normal,
    HeatCaution,
    HeatWarning,
    HeatAlert,
    HeatDanger,
}

/// Heat index in °C from air temperature (°C) and relative humidity (%)
pub fn heat_index(temperature_c: f32, relative_humidity: f32) -> f32 {
    if temperature_c < HEAT_INDEX_MIN_TEMPERATURE_C {
        return temperature_c;
    }

    const C1: f32 = -8.784_695;
    const C2: f32 = 1.611_394_1;
    const C3: f32 = 2.338_549;
    const C4: f32 = -0.146_116_05;
    const C5: f32 = -0.012_308_094;
    const C6: f32 = -0.016_424_828;
    const C7: f32 = 0.002_211_732;
    const C8: f32 = 0.000_725_46;
    const C9: f32 = -0.000_003_582;

    let t = temperature_c;
    let r = relative_humidity;

    C1 + C2 * t + C3 * r + C4 * t * r + C5 * t * t + C6 * r * r
        + C7 * t * t * r + C8 * t * r * r + C9 * t * t * r * r
}

/// Warning level for an apparent temperature in °C
pub fn heat_alert(apparent_c: f32) -> HeatAlert {
    if apparent_c <= FROSTBITE_DANGER_C {
        HeatAlert::FrostbiteDanger
    } else if apparent_c <= FROSTBITE_WARNING_C {
        HeatAlert::FrostbiteWarning
    } else if apparent_c <= FROSTBITE_CAUTION_C {
        HeatAlert::FrostbiteCaution
    } else if apparent_c < HEAT_INDEX_MIN_TEMPERATURE_C {
        HeatAlert::Normal
    } else if apparent_c <= HEAT_CAUTION_C {
        HeatAlert::HeatCaution
    } else if apparent_c <= HEAT_WARNING_C {
        HeatAlert::HeatWarning
    } else if apparent_c <= HEAT_ALERT_C {
        HeatAlert::HeatAlert
    } else {
        HeatAlert::HeatDanger
    }
}

/// Dew point in °C; `None` for non-positive humidity
pub fn dew_point(temperature_c: f32, relative_humidity: f32) -> Option<f32> {
    if relative_humidity.is_nan() || relative_humidity <= 0.0 {
        return None;
    }

    let gamma = logf(relative_humidity / 100.0) + (MAGNUS_A * temperature_c) / (MAGNUS_B + temperature_c);
    let dew_point = (MAGNUS_B * gamma) / (MAGNUS_A - gamma);

    if dew_point.is_finite() {
        Some(dew_point)
    } else {
        None
    }
}
