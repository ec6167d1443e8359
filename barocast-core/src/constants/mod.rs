//! Constants for Barocast Core
//!
//! Centralized, documented constants used throughout the forecasting core.
//!
//! ## Organization
//!
//! Constants are grouped by domain:
//! - **Physics**: Standard-atmosphere constants and barometer limits
//! - **Time**: Forecast windows and retention periods
//! - **Weather**: Forecast thresholds, pressure systems and comfort indices
//!
//! ## Usage Guidelines
//!
//! 1. Always use these constants instead of magic numbers
//! 2. Reference the standard or datasheet a value comes from
//! 3. Use descriptive names that include units

/// Standard-atmosphere constants and barometer limits.
pub mod physics;

/// Time-related constants for forecast windows and retention.
pub mod time;

/// Forecast thresholds, pressure-system bounds and comfort cut-offs.
pub mod weather;

// Re-export commonly used constants for convenience
pub use physics::{SEA_LEVEL_PRESSURE_HPA, STANDARD_TEMPERATURE_C};

pub use time::{
    MS_PER_HOUR, MS_PER_DAY, TENDENCY_WINDOW_MS, DWELL_DURATION_MS, HISTORY_RETENTION_MS,
};

pub use weather::{
    DEFAULT_STORM_THRESHOLD_HPA, DEFAULT_HOURLY_CHANGE_THRESHOLD_HPA,
    DEFAULT_DAILY_CHANGE_THRESHOLD_HPA, LOW_PRESSURE_HPA, HIGH_PRESSURE_HPA,
};
