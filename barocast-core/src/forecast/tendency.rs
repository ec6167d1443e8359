use super::PressureTendency;
use crate::constants::time::TENDENCY_WINDOW_MS;
use crate::reading::SeaLevelPressure;
use crate::time::{distance_ms, Timestamp};

/// Three-hour pressure tendency
#[derive(Debug, Clone, Copy)]
pub struct TendencyCalculator {
    /// Exclusive change threshold in hPa
    threshold: f32,
    window_ms: u64,
}

impl TendencyCalculator {
    pub fn new(threshold: f32) -> Self {
        Self {
            threshold,
            window_ms: TENDENCY_WINDOW_MS,
        }
    }

    /// Tendency from the reading closest to `now - 3h` to the latest reading.
    ///
    /// `last_reading` stands in for the reference when `readings` is empty;
    /// without a current reading the result is always steady.
    pub fn calculate(
        &self,
        readings: &[SeaLevelPressure],
        last_reading: Option<&SeaLevelPressure>,
        now: Timestamp,
    ) -> PressureTendency {
        let target = now.saturating_sub(self.window_ms);
        let reference = readings
            .iter()
            .min_by_key(|r| distance_ms(r.time, target))
            .or(last_reading);

        match (reference, readings.last()) {
            (Some(reference), Some(current)) => tendency_between(reference, current, self.threshold),
            _ => PressureTendency::STEADY,
        }
    }
}

/// Tendency between two readings with an exclusive threshold
pub fn tendency_between(
    reference: &SeaLevelPressure,
    current: &SeaLevelPressure,
    threshold: f32,
) -> PressureTendency {
    PressureTendency::from_change(current.pressure - reference.pressure, threshold)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::time::MS_PER_HOUR;
    use crate::forecast::PressureCharacteristic;

    const T0: Timestamp = 1_700_000_000_000;

    #[test]
    fn empty_history_is_steady() {
        let calculator = TendencyCalculator::new(1.0);
        let last = SeaLevelPressure::new(T0, 1000.0);

        assert_eq!(calculator.calculate(&[], None, T0), PressureTendency::STEADY);
        // Fallback alone has no current reading to compare with
        assert_eq!(calculator.calculate(&[], Some(&last), T0), PressureTendency::STEADY);
    }

    #[test]
    fn single_reading_is_steady() {
        let calculator = TendencyCalculator::new(1.0);
        let readings = [SeaLevelPressure::new(T0, 1000.0)];

        let tendency = calculator.calculate(&readings, None, T0 + 3 * MS_PER_HOUR);
        assert_eq!(tendency.characteristic, PressureCharacteristic::Steady);
        assert_eq!(tendency.amount, 0.0);
    }

    #[test]
    fn picks_reading_closest_to_three_hours_ago() {
        let calculator = TendencyCalculator::new(1.0);
        let readings = [
            SeaLevelPressure::new(T0, 1020.0),
            SeaLevelPressure::new(T0 + 2 * MS_PER_HOUR, 1010.0),
            SeaLevelPressure::new(T0 + 4 * MS_PER_HOUR, 1012.0),
            SeaLevelPressure::new(T0 + 5 * MS_PER_HOUR, 1008.0),
        ];

        // now - 3h = T0 + 2h
        let tendency = calculator.calculate(&readings, None, T0 + 5 * MS_PER_HOUR);
        assert_eq!(tendency.amount, -2.0);
        assert_eq!(tendency.characteristic, PressureCharacteristic::Falling);
    }

    #[test]
    fn ties_prefer_earlier_reading() {
        let calculator = TendencyCalculator::new(0.5);
        let readings = [
            SeaLevelPressure::new(T0, 1000.0),
            SeaLevelPressure::new(T0 + 2 * MS_PER_HOUR, 1004.0),
            SeaLevelPressure::new(T0 + 4 * MS_PER_HOUR, 1001.0),
        ];

        // now - 3h = T0 + 1h, equidistant from the first two readings
        let tendency = calculator.calculate(&readings, None, T0 + 4 * MS_PER_HOUR);
        assert_eq!(tendency.amount, 1.0);
        assert_eq!(tendency.characteristic, PressureCharacteristic::Rising);
    }

    #[test]
    fn early_clock_does_not_underflow() {
        let calculator = TendencyCalculator::new(1.0);
        let readings = [SeaLevelPressure::new(0, 1000.0), SeaLevelPressure::new(10, 995.0)];

        let tendency = calculator.calculate(&readings, None, 10);
        assert_eq!(tendency.characteristic, PressureCharacteristic::Falling);
    }
}
