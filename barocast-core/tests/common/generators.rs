//! Reading series generators
//!
//! Pressures follow the standard atmosphere so that a series generated at a
//! given sea-level pressure converts back to it.

use barocast_core::reading::PressureReading;
use barocast_core::time::Timestamp;

const SCALE_HEIGHT_M: f32 = 44330.0;
const EXPONENT: f32 = 5.255;

/// Station pressure measured at `altitude_m` under `sea_level_hpa`
pub fn station_pressure(sea_level_hpa: f32, altitude_m: f32) -> f32 {
    sea_level_hpa * (1.0 - altitude_m / SCALE_HEIGHT_M).powf(EXPONENT)
}

/// Deterministic generator for reading series
pub struct ReadingGenerator {
    start: Timestamp,
    seed: u32,
}

impl ReadingGenerator {
    pub fn new(start: Timestamp) -> Self {
        Self { start, seed: 42 }
    }

    /// Stationary readings with sea-level pressure changing linearly
    pub fn linear_trend(
        &mut self,
        sea_level_hpa: f32,
        hpa_per_hour: f32,
        altitude_m: f32,
        duration_hours: u32,
        samples_per_hour: u32,
    ) -> Vec<PressureReading> {
        let interval_ms = 3_600_000 / samples_per_hour as u64;
        let samples = duration_hours * samples_per_hour;

        (0..=samples)
            .map(|i| {
                let hours = i as f32 / samples_per_hour as f32;
                let sea_level = sea_level_hpa + hpa_per_hour * hours;
                PressureReading::new(
                    self.start + i as u64 * interval_ms,
                    station_pressure(sea_level, altitude_m),
                    altitude_m,
                )
            })
            .collect()
    }

    /// Walk through `legs` of (altitude, hours), with GPS noise of up to
    /// `noise_m` and constant sea-level pressure
    pub fn hike(
        &mut self,
        sea_level_hpa: f32,
        legs: &[(f32, u32)],
        samples_per_hour: u32,
        noise_m: f32,
        accuracy_m: f32,
    ) -> Vec<PressureReading> {
        let interval_ms = 3_600_000 / samples_per_hour as u64;
        let mut readings = Vec::new();
        let mut time = self.start;

        for &(altitude, hours) in legs {
            for _ in 0..hours * samples_per_hour {
                let reported = altitude + self.noise(noise_m);
                readings.push(
                    PressureReading::new(time, station_pressure(sea_level_hpa, altitude), reported)
                        .with_accuracy(accuracy_m),
                );
                time += interval_ms;
            }
        }

        readings
    }

    fn noise(&mut self, amplitude: f32) -> f32 {
        self.seed = self.seed.wrapping_mul(1664525).wrapping_add(1013904223);
        let uniform = (self.seed as f32) / (u32::MAX as f32);
        (uniform - 0.5) * 2.0 * amplitude
    }
}
