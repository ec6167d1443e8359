use super::{PressureCharacteristic, PressureTendency, Weather};
use crate::constants::time::HISTORY_RETENTION_MS;
use crate::reading::SeaLevelPressure;

/// Long-term trend over the retained history
#[derive(Debug, Clone, Copy)]
pub struct DailyForecaster {
    /// Exclusive change threshold in hPa
    threshold: f32,
    window_ms: u64,
}

impl DailyForecaster {
    pub fn new(threshold: f32) -> Self {
        Self {
            threshold,
            window_ms: HISTORY_RETENTION_MS,
        }
    }

    /// Compare the earliest reading in the look-back window with the latest.
    ///
    /// Never reports [`Weather::Storm`].
    pub fn forecast(&self, readings: &[SeaLevelPressure]) -> Weather {
        let (Some(first), Some(latest)) = (readings.first(), readings.last()) else {
            return Weather::NoChange;
        };
        if readings.len() < 2 {
            return Weather::NoChange;
        }

        let window_start = latest.time.saturating_sub(self.window_ms);
        let earliest = readings
            .iter()
            .find(|r| r.time >= window_start)
            .unwrap_or(first);

        let change = PressureTendency::from_change(latest.pressure - earliest.pressure, self.threshold);
        match change.characteristic {
            PressureCharacteristic::Rising => Weather::Improving,
            PressureCharacteristic::Falling => Weather::Worsening,
            PressureCharacteristic::Steady => Weather::NoChange,
        }
    }
}
