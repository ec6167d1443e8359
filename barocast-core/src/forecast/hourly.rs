use super::{PressureCharacteristic, PressureTendency, Weather};
use crate::reading::SeaLevelPressure;

/// Short-term forecast from the 3-hour tendency
#[derive(Debug, Clone, Copy)]
pub struct HourlyForecaster {
    /// Fall in hPa beyond which a falling tendency is a storm
    storm_threshold: f32,
}

impl HourlyForecaster {
    pub fn new(storm_threshold: f32) -> Self {
        Self { storm_threshold }
    }

    /// Classify the tendency.
    ///
    /// The tendency is expected to come from a [`super::TendencyCalculator`]
    /// using the hourly change threshold, so any `Falling`/`Rising` already
    /// exceeds it.
    pub fn forecast(&self, tendency: &PressureTendency, current: Option<&SeaLevelPressure>) -> Weather {
        if current.is_none() {
            return Weather::NoChange;
        }

        match tendency.characteristic {
            PressureCharacteristic::Falling if -tendency.amount > self.storm_threshold => Weather::Storm,
            PressureCharacteristic::Falling => Weather::Worsening,
            PressureCharacteristic::Rising => Weather::Improving,
            PressureCharacteristic::Steady => Weather::NoChange,
        }
    }
}
