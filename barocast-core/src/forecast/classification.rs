use core::fmt;

use crate::constants::weather::{HIGH_PRESSURE_HPA, LOW_PRESSURE_HPA};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Pressure system the current sea-level pressure belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum PressureSystem {
    /// Below 1009.144 hPa - unsettled weather
    Low,
    Normal,
    /// At or above 1022.689 hPa - settled weather
    High,
}

impl PressureSystem {
    pub fn classify(sea_level_hpa: f32) -> Self {
        if sea_level_hpa < LOW_PRESSURE_HPA {
            PressureSystem::Low
        } else if sea_level_hpa >= HIGH_PRESSURE_HPA {
            PressureSystem::High
        } else {
            PressureSystem::Normal
        }
    }
}

impl fmt::Display for PressureSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PressureSystem::Low => write!(f, "low"),
            PressureSystem::Normal => write!(f, "normal"),
            PressureSystem::High => write!(f, "high"),
        }
    }
}
