//! Dwell-Based Altitude Compensation
//!
//! ## The Problem
//!
//! A barometer cannot tell weather from altitude. Walking up 100m drops the
//! station pressure by ~12 hPa, which is twice a storm threshold. The
//! sea-level reduction removes altitude from the reading, but only as well as
//! the altitude is known, and phone altimeters are noisy:
//!
//! ```text
//! GPS altitude error       ±10-30 m  (±1.2-3.6 hPa after reduction)
//! Barometric altimeter     drifts with the weather it should be measuring
//! ```
//!
//! ## Dwell Detection
//!
//! Hikers spend most of their time either resting somewhere (camp, hut,
//! summit) or moving between places. While resting the true altitude is
//! constant, so averaging the altimeter over the rest period removes most of
//! its noise:
//!
//! ```text
//! altitude
//!    ▲            ┌─ dwell (≥1h within band) ─┐
//!    │            ●  ●   ●  ●    ●  ●   ●   ●    → all get the dwell mean
//!    │          ●
//!    │        ●      ← moving: keep the raw altitude
//!    │  ● ● ●  ← short stop (<1h): not a dwell, raw altitude
//!    └──────────────────────────────────────────► time
//! ```
//!
//! Readings are grouped into segments while they stay within
//! `max_altitude_change` of the segment's running mean and the segment's
//! altitude range stays within the same band. A segment is a dwell when it
//! spans at least [`DWELL_DURATION_MS`] and its least-squares altitude drift
//! over that span is at most half the band:
//!
//! ```text
//! drift = |slope| × span        slope fitted over accepted readings
//! ```
//!
//! A slow steady climb can stay inside the band for over an hour, but it
//! drifts by the whole band, so it keeps its measured altitudes. Altimeter
//! noise around a fixed spot fits a near-flat line.
//!
//! ## Untrusted Readings
//!
//! A reading whose altimeter accuracy is worse than `max_altitude_change`
//! cannot place itself in a segment. It takes the mean of the nearest dwell
//! within one dwell duration, or keeps its raw altitude.
//!
//! ## Barometric Corroboration
//!
//! With `use_barometer_trend`, an altitude jump only starts a new segment if
//! the pressure moved too (more than `max_pressure_change / 3` since the
//! segment's last accepted reading, the hourly share of the 3-hour band).
//! A jump with flat pressure is altimeter noise: the reading stays in the
//! segment but does not move its mean.
//!
//! NaN altitudes are left untouched and do not take part in segmentation.

use libm::{fabs, fabsf};

use crate::constants::time::{DWELL_DURATION_MS, MS_PER_HOUR};
use crate::reading::PressureReading;
use crate::settings::DwellSettings;
use crate::time::{distance_ms, Timestamp};

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

/// Computes a compensated altitude for every reading
#[derive(Debug, Clone, Copy)]
pub struct AltitudeConverter {
    settings: DwellSettings,
    dwell_duration_ms: u64,
}

impl AltitudeConverter {
    pub fn new(settings: DwellSettings) -> Self {
        Self {
            settings,
            dwell_duration_ms: DWELL_DURATION_MS,
        }
    }

    /// Converter that trusts the altimeter fully
    pub fn passthrough() -> Self {
        Self::new(DwellSettings {
            require_dwell: false,
            ..DwellSettings::default()
        })
    }

    pub fn settings(&self) -> &DwellSettings {
        &self.settings
    }

    /// Compensated altitude per reading, same length and order as the input
    pub fn convert(&self, readings: &[PressureReading]) -> Vec<f32> {
        let mut altitudes: Vec<f32> = readings.iter().map(|r| r.altitude).collect();

        if !self.settings.require_dwell || readings.len() < 2 {
            return altitudes;
        }

        let segments = self.segment(readings);
        let dwells: Vec<&Segment> = segments
            .iter()
            .filter(|s| self.is_dwell(s))
            .collect();

        log_debug!(
            "Altitude compensation: {} readings, {} segments, {} dwells",
            readings.len(),
            segments.len(),
            dwells.len()
        );

        for dwell in &dwells {
            let mean = dwell.mean();
            for &index in &dwell.members {
                altitudes[index] = mean;
            }
        }

        for (index, reading) in readings.iter().enumerate() {
            if reading.altitude.is_nan() || self.is_trusted(reading) {
                continue;
            }
            if let Some(mean) = self.nearest_dwell_mean(&dwells, reading.time) {
                altitudes[index] = mean;
            }
        }

        altitudes
    }

    /// Long enough and flat enough to be a stop
    fn is_dwell(&self, segment: &Segment) -> bool {
        segment.span_ms() >= self.dwell_duration_ms
            && segment.drift() <= self.settings.max_altitude_change / 2.0
    }

    /// Accuracy within the dwell band (or unknown)
    fn is_trusted(&self, reading: &PressureReading) -> bool {
        match reading.altitude_accuracy {
            Some(accuracy) if !accuracy.is_nan() => accuracy <= self.settings.max_altitude_change,
            _ => true,
        }
    }

    fn segment(&self, readings: &[PressureReading]) -> Vec<Segment> {
        let mut segments = Vec::new();
        let mut current: Option<Segment> = None;

        for (index, reading) in readings.iter().enumerate() {
            if reading.altitude.is_nan() || !self.is_trusted(reading) {
                continue;
            }

            let joined = match current.as_mut() {
                Some(segment) => self.try_join(segment, index, reading),
                None => false,
            };

            if !joined {
                if let Some(finished) = current.replace(Segment::start(index, reading)) {
                    segments.push(finished);
                }
            }
        }

        segments.extend(current);
        segments
    }

    fn try_join(&self, segment: &mut Segment, index: usize, reading: &PressureReading) -> bool {
        let band = self.settings.max_altitude_change;
        if fabsf(reading.altitude - segment.mean()) <= band && segment.range_with(reading.altitude) <= band {
            segment.accept(index, reading);
            return true;
        }

        if self.settings.use_barometer_trend {
            let pressure_band = self.settings.max_pressure_change / 3.0;
            if fabsf(reading.pressure - segment.last_pressure) <= pressure_band {
                // Altitude jumped but pressure did not follow
                segment.members.push(index);
                return true;
            }
        }

        false
    }

    fn nearest_dwell_mean(&self, dwells: &[&Segment], time: Timestamp) -> Option<f32> {
        let mut best: Option<(u64, f32)> = None;

        for dwell in dwells {
            let distance = dwell.distance_ms(time);
            if distance > self.dwell_duration_ms {
                continue;
            }
            match best {
                Some((closest, _)) if closest <= distance => {}
                _ => best = Some((distance, dwell.mean())),
            }
        }

        best.map(|(_, mean)| mean)
    }
}

/// Consecutive trusted readings around one altitude
#[derive(Debug, Clone)]
struct Segment {
    /// Reading indices assigned to this segment
    members: Vec<usize>,
    start: Timestamp,
    end: Timestamp,
    altitude_sum: f64,
    accepted: u32,
    last_pressure: f32,
    min_altitude: f32,
    max_altitude: f32,
    // Regression sums, time in hours since `start`
    hours_sum: f64,
    hours_sq_sum: f64,
    hours_altitude_sum: f64,
}

impl Segment {
    fn start(index: usize, reading: &PressureReading) -> Self {
        let mut members = Vec::new();
        members.push(index);
        Self {
            members,
            start: reading.time,
            end: reading.time,
            altitude_sum: reading.altitude as f64,
            accepted: 1,
            last_pressure: reading.pressure,
            min_altitude: reading.altitude,
            max_altitude: reading.altitude,
            hours_sum: 0.0,
            hours_sq_sum: 0.0,
            hours_altitude_sum: 0.0,
        }
    }

    fn accept(&mut self, index: usize, reading: &PressureReading) {
        self.members.push(index);
        self.end = reading.time;
        self.altitude_sum += reading.altitude as f64;
        self.accepted += 1;
        self.last_pressure = reading.pressure;
        self.min_altitude = self.min_altitude.min(reading.altitude);
        self.max_altitude = self.max_altitude.max(reading.altitude);

        let hours = reading.time.saturating_sub(self.start) as f64 / MS_PER_HOUR as f64;
        let altitude = reading.altitude as f64;
        self.hours_sum += hours;
        self.hours_sq_sum += hours * hours;
        self.hours_altitude_sum += hours * altitude;
    }

    /// Altitude range if `altitude` were accepted
    fn range_with(&self, altitude: f32) -> f32 {
        self.max_altitude.max(altitude) - self.min_altitude.min(altitude)
    }

    /// Altitude change across the span along the fitted line, in meters
    fn drift(&self) -> f32 {
        let n = self.accepted as f64;
        let denominator = n * self.hours_sq_sum - self.hours_sum * self.hours_sum;
        if denominator <= 0.0 {
            return 0.0;
        }

        let slope = (n * self.hours_altitude_sum - self.hours_sum * self.altitude_sum) / denominator;
        let span_hours = self.span_ms() as f64 / MS_PER_HOUR as f64;
        fabs(slope * span_hours) as f32
    }

    fn mean(&self) -> f32 {
        (self.altitude_sum / self.accepted as f64) as f32
    }

    fn span_ms(&self) -> u64 {
        self.end.saturating_sub(self.start)
    }

    fn distance_ms(&self, time: Timestamp) -> u64 {
        if time >= self.start && time <= self.end {
            0
        } else {
            distance_ms(time, self.start).min(distance_ms(time, self.end))
        }
    }
}
