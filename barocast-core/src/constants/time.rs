//! Time-Related Constants
//!
//! Windows and retention periods used by the forecasters and the update cycle.
//! All durations are in milliseconds to match [`crate::time::Timestamp`].

// ===== TIME UNIT CONVERSIONS =====

/// Milliseconds per second.
pub const MS_PER_SECOND: u64 = 1000;

/// Seconds per minute.
pub const SECONDS_PER_MINUTE: u64 = 60;

/// Minutes per hour.
pub const MINUTES_PER_HOUR: u64 = 60;

/// Hours per day.
pub const HOURS_PER_DAY: u64 = 24;

/// Milliseconds per minute.
pub const MS_PER_MINUTE: u64 = MS_PER_SECOND * SECONDS_PER_MINUTE;

/// Milliseconds per hour.
pub const MS_PER_HOUR: u64 = MS_PER_MINUTE * MINUTES_PER_HOUR;

/// Milliseconds per day.
pub const MS_PER_DAY: u64 = MS_PER_HOUR * HOURS_PER_DAY;

// ===== FORECAST WINDOWS =====

/// Look-back of the pressure tendency (milliseconds).
///
/// The WMO pressure tendency is defined over the last three hours.
///
/// Source: WMO Manual on Codes, code table 0200
pub const TENDENCY_WINDOW_MS: u64 = 3 * MS_PER_HOUR;

/// Minimum time the altitude must hold still to count as a dwell (milliseconds).
pub const DWELL_DURATION_MS: u64 = MS_PER_HOUR;

/// How long readings are kept (milliseconds).
///
/// The daily forecaster looks back over the whole retained history.
pub const HISTORY_RETENTION_MS: u64 = 2 * MS_PER_DAY;
