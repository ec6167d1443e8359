use super::{sea_level_pressure, sea_level_pressure_with_temperature, AltitudeConverter, SeaLevelPressureConverter};
use crate::reading::{PressureReading, SeaLevelPressure};

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

/// Reduces readings using the (compensated) altimeter altitude
#[derive(Debug, Clone, Copy)]
pub struct AltimeterSeaLevelPressureConverter {
    altitude: AltitudeConverter,
    use_temperature: bool,
}

impl AltimeterSeaLevelPressureConverter {
    pub fn new(altitude: AltitudeConverter, use_temperature: bool) -> Self {
        Self { altitude, use_temperature }
    }
}

impl SeaLevelPressureConverter for AltimeterSeaLevelPressureConverter {
    fn convert(&self, readings: &[PressureReading]) -> Vec<SeaLevelPressure> {
        let altitudes = self.altitude.convert(readings);

        readings
            .iter()
            .zip(altitudes)
            .map(|(reading, altitude)| {
                let pressure = if self.use_temperature {
                    sea_level_pressure_with_temperature(reading.pressure, altitude, reading.temperature)
                } else {
                    sea_level_pressure(reading.pressure, altitude)
                };
                SeaLevelPressure::new(reading.time, pressure)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::time::MS_PER_HOUR;
    use crate::settings::DwellSettings;

    #[test]
    fn preserves_order_and_length() {
        let readings = [
            PressureReading::new(0, 1000.0, 0.0),
            PressureReading::new(MS_PER_HOUR, 990.0, 100.0),
            PressureReading::new(2 * MS_PER_HOUR, 980.0, 200.0).with_accuracy(500.0),
        ];
        let converter = AltimeterSeaLevelPressureConverter::new(AltitudeConverter::passthrough(), false);

        let converted = converter.convert(&readings);
        assert_eq!(converted.len(), 3);
        assert_eq!(converted[0], SeaLevelPressure::new(0, 1000.0));
        assert_eq!(converted[1].time, MS_PER_HOUR);
        assert_eq!(converted[2].time, 2 * MS_PER_HOUR);
        assert!(converted[2].pressure > 980.0);
    }

    #[test]
    fn climb_with_stable_weather_reads_flat() {
        // Same weather, reading taken at the trailhead and at a 500m summit
        let trailhead = 1013.25;
        let summit = trailhead * libm::powf(1.0 - 500.0 / 44330.0, 5.255);
        let readings = [
            PressureReading::new(0, trailhead, 0.0),
            PressureReading::new(MS_PER_HOUR, summit, 500.0),
        ];
        let converter = AltimeterSeaLevelPressureConverter::new(AltitudeConverter::passthrough(), false);

        let converted = converter.convert(&readings);
        assert!((converted[0].pressure - converted[1].pressure).abs() < 0.01);
    }

    #[test]
    fn temperature_flag_switches_formula() {
        let readings = [PressureReading::new(0, 900.0, 1000.0).with_temperature(-5.0)];
        let altitude = AltitudeConverter::new(DwellSettings::default());

        let standard = AltimeterSeaLevelPressureConverter::new(altitude, false).convert(&readings);
        let adjusted = AltimeterSeaLevelPressureConverter::new(altitude, true).convert(&readings);

        assert_eq!(standard[0].pressure, sea_level_pressure(900.0, 1000.0));
        assert_eq!(
            adjusted[0].pressure,
            sea_level_pressure_with_temperature(900.0, 1000.0, Some(-5.0))
        );
    }
}
