//! Weather Thresholds and Defaults
//!
//! Default forecast thresholds, pressure-system boundaries and comfort-index
//! cut-offs. Pressure thresholds are in hPa over the window of the forecaster
//! that uses them.

// ===== FORECAST THRESHOLDS =====

/// Default storm threshold (hPa per 3 hours).
///
/// A drop of 6 hPa in three hours is the classic marine "rapid fall" that
/// precedes gale-force winds.
///
/// Source: UK Met Office, Shipping Forecast tendency terms
pub const DEFAULT_STORM_THRESHOLD_HPA: f32 = 6.0;

/// Default hourly (3-hour tendency) change threshold (hPa).
///
/// Below 1.5 hPa per three hours the WMO describes the pressure as
/// "steady" / "changing slowly".
pub const DEFAULT_HOURLY_CHANGE_THRESHOLD_HPA: f32 = 1.5;

/// Default daily change threshold (hPa over the retained history).
pub const DEFAULT_DAILY_CHANGE_THRESHOLD_HPA: f32 = 3.0;

/// Default altitude band for a dwell (m).
///
/// Roughly twice the vertical error of a GPS-assisted phone altimeter.
pub const DEFAULT_MAX_DWELL_ALTITUDE_CHANGE_M: f32 = 60.0;

/// Default pressure band for a dwell (hPa per 3 hours).
pub const DEFAULT_MAX_DWELL_PRESSURE_CHANGE_HPA: f32 = 1.5;

// ===== PRESSURE SYSTEMS =====

/// Hectopascals per inch of mercury at 0 °C.
pub const HPA_PER_INHG: f32 = 33.8639;

/// Sea-level pressure below which the air mass is a low (hPa).
///
/// 29.8 inHg at 33.8639 hPa/inHg.
pub const LOW_PRESSURE_HPA: f32 = 1009.144;

/// Sea-level pressure at or above which the air mass is a high (hPa).
///
/// 30.2 inHg at 33.8639 hPa/inHg.
pub const HIGH_PRESSURE_HPA: f32 = 1022.689;

// ===== RECORDING =====

/// Temperature recorded when the thermometer has no reading (°C).
pub const FALLBACK_RECORDED_TEMPERATURE_C: f32 = 16.0;

// ===== COMFORT INDICES =====

/// Below this air temperature the heat index equals the air temperature (°C).
///
/// Source: NWS Technical Attachment SR 90-23 (Rothfusz regression)
pub const HEAT_INDEX_MIN_TEMPERATURE_C: f32 = 27.0;

/// Magnus formula coefficient `a` (dimensionless).
///
/// Source: Alduchov & Eskridge (1996)
pub const MAGNUS_A: f32 = 17.27;

/// Magnus formula coefficient `b` (°C).
pub const MAGNUS_B: f32 = 237.7;

// Cold bands are a coarse alerting scale, not a published standard. Environment
// Canada's wind chill chart puts frostbite risk from about -28 °C.

/// Frostbite danger at or below this apparent temperature (°C).
pub const FROSTBITE_DANGER_C: f32 = -25.0;

/// Frostbite warning at or below this apparent temperature (°C).
pub const FROSTBITE_WARNING_C: f32 = -17.0;

/// Frostbite caution at or below this apparent temperature (°C).
pub const FROSTBITE_CAUTION_C: f32 = 5.0;

/// Heat caution at or below this heat index (°C), above the comfort band.
///
/// Source: NWS heat index chart, "Caution" (80-90 °F) and "Extreme Caution"
/// (90-103 °F), "Danger" (103-124 °F), "Extreme Danger" (125 °F and up)
pub const HEAT_CAUTION_C: f32 = 32.0;

/// Heat warning at or below this heat index (°C).
pub const HEAT_WARNING_C: f32 = 39.0;

/// Heat alert at or below this heat index (°C); above is danger.
pub const HEAT_ALERT_C: f32 = 51.0;
