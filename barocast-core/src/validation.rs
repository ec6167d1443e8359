//! Sample Plausibility Checks
//!
//! The update cycle records one reading per run. Before it goes into the
//! history it must be a usable number within what a phone barometer can
//! report. A pressure of exactly zero is how sensor stacks report "no reading
//! yet", so it is rejected as invalid rather than as out of range.
//!
//! Altitude and temperature are not checked: a NaN altitude propagates
//! through the altitude converter and a NaN temperature is replaced at
//! recording time.

use crate::constants::physics::{BAROMETER_MAX_HPA, BAROMETER_MIN_HPA};
use crate::errors::{ForecastError, ForecastResult};
use crate::reading::PressureReading;

/// Check if a value is within the specified range
pub fn check_range(value: f32, min: f32, max: f32) -> ForecastResult<()> {
    if value < min || value > max {
        Err(ForecastError::OutOfRange { value, min, max })
    } else {
        Ok(())
    }
}

/// Validate a freshly sampled reading before it is recorded
pub fn validate_sample(reading: &PressureReading) -> ForecastResult<()> {
    if !reading.pressure.is_finite() {
        return Err(ForecastError::InvalidReading {
            reason: "pressure is not a number",
        });
    }

    if reading.pressure == 0.0 {
        return Err(ForecastError::InvalidReading {
            reason: "barometer has no reading",
        });
    }

    check_range(reading.pressure, BAROMETER_MIN_HPA, BAROMETER_MAX_HPA)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn range_check() {
        assert!(check_range(5.0, 0.0, 10.0).is_ok());
        assert!(check_range(0.0, 0.0, 10.0).is_ok());
        assert!(check_range(-1.0, 0.0, 10.0).is_err());
        assert!(check_range(11.0, 0.0, 10.0).is_err());
    }

    #[test]
    fn valid_samples() {
        // Sea level and a 3000m summit
        assert!(validate_sample(&PressureReading::new(0, 1013.25, 0.0)).is_ok());
        assert!(validate_sample(&PressureReading::new(0, 701.0, 3000.0)).is_ok());
    }

    #[test]
    fn zero_pressure_is_no_reading() {
        assert_eq!(
            validate_sample(&PressureReading::new(0, 0.0, 0.0)),
            Err(ForecastError::InvalidReading { reason: "barometer has no reading" })
        );
    }

    #[test]
    fn rejects_implausible_samples() {
        assert!(matches!(
            validate_sample(&PressureReading::new(0, f32::NAN, 0.0)),
            Err(ForecastError::InvalidReading { .. })
        ));
        assert!(matches!(
            validate_sample(&PressureReading::new(0, 1200.0, 0.0)),
            Err(ForecastError::OutOfRange { .. })
        ));
        assert!(matches!(
            validate_sample(&PressureReading::new(0, 12.0, 0.0)),
            Err(ForecastError::OutOfRange { .. })
        ));
    }
}
