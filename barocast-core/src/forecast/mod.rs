//! Pressure-Based Forecasting
//!
//! ## Overview
//!
//! Falling pressure means an approaching low (cloud, rain, wind); rising
//! pressure means clearing. The forecasters turn a sea-level pressure history
//! into one of four outcomes:
//!
//! ```text
//!                       ┌──────────────────┐
//! history ─► 3h tendency│ HourlyForecaster │─► Storm | Worsening | Improving | NoChange
//!                       └──────────────────┘
//!                       ┌──────────────────┐
//! history ─────────────►│ DailyForecaster  │─► Worsening | Improving | NoChange
//!                       └──────────────────┘
//! ```
//!
//! Both compare two readings and classify the difference with a strict
//! threshold: a change exactly equal to the threshold is no change. Storm is
//! an hourly-only outcome: it needs a fall steeper than the storm threshold
//! within the 3-hour tendency window.
//!
//! ## Typical Tendencies
//!
//! ```text
//! Change over 3h   Meaning
//! -------------------------------------------
//! < 0.1 hPa        Steady
//! 0.1 - 1.5 hPa    Changing slowly
//! 1.5 - 3.5 hPa    Changing
//! 3.5 - 6.0 hPa    Changing quickly
//! > 6.0 hPa        Changing very rapidly (gale likely)
//! ```
//!
//! Every forecaster here is a pure function of its inputs and can be shared
//! freely between threads.

mod classification;
mod daily;
mod hourly;
mod tendency;

pub use classification::PressureSystem;
pub use daily::DailyForecaster;
pub use hourly::HourlyForecaster;
pub use tendency::{tendency_between, TendencyCalculator};

use core::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Forecast outcome
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Weather {
    NoChange,
    Worsening,
    Improving,
    /// Severe weather imminent (hourly forecast only)
    Storm,
}

impl fmt::Display for Weather {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Weather::NoChange => write!(f, "no change"),
            Weather::Worsening => write!(f, "worsening"),
            Weather::Improving => write!(f, "improving"),
            Weather::Storm => write!(f, "storm"),
        }
    }
}

/// Direction of the pressure change
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum PressureCharacteristic {
    Rising,
    Falling,
    Steady,
}

/// Direction and size of the pressure change over the tendency window
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PressureTendency {
    pub characteristic: PressureCharacteristic,
    /// Signed change in hPa (current minus reference)
    pub amount: f32,
}

impl PressureTendency {
    pub const STEADY: Self = Self {
        characteristic: PressureCharacteristic::Steady,
        amount: 0.0,
    };

    /// Classify a signed change against an exclusive threshold
    pub fn from_change(amount: f32, threshold: f32) -> Self {
        let characteristic = if amount > threshold {
            PressureCharacteristic::Rising
        } else if amount < -threshold {
            PressureCharacteristic::Falling
        } else {
            PressureCharacteristic::Steady
        };

        Self { characteristic, amount }
    }
}
