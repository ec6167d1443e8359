//! Common test utilities for integration tests
//!
//! This module provides:
//! - Reading series generators (sea-level trends, hikes with stops)
//! - Fixed scenarios with known forecasts
//! - A notifier that can be told to fail

#![allow(dead_code)]

pub mod generators;
pub mod scenarios;

use barocast_core::alert::StormNotifier;
use barocast_core::monitor::ForecastNotifier;
use barocast_core::{ForecastError, ForecastResult, SeaLevelPressure, Weather};

/// Start of every generated series (2023-11-14T22:13:20Z)
pub const T0: u64 = 1_700_000_000_000;

/// Notifier recording every call, optionally failing sends
#[derive(Debug, Default)]
pub struct RecordingNotifier {
    pub calls: Vec<&'static str>,
    pub forecasts: Vec<(Weather, usize)>,
    pub fail_send: bool,
}

impl RecordingNotifier {
    pub fn count(&self, call: &str) -> usize {
        self.calls.iter().filter(|c| **c == call).count()
    }
}

impl StormNotifier for RecordingNotifier {
    fn send_storm_alert(&mut self) -> ForecastResult<()> {
        if self.fail_send {
            return Err(ForecastError::NotifierUnavailable { reason: "notifications blocked" });
        }
        self.calls.push("send");
        Ok(())
    }

    fn cancel_storm_alert(&mut self) -> ForecastResult<()> {
        self.calls.push("cancel");
        Ok(())
    }
}

impl ForecastNotifier for RecordingNotifier {
    fn show_forecast(&mut self, forecast: Weather, readings: &[SeaLevelPressure]) -> ForecastResult<()> {
        self.forecasts.push((forecast, readings.len()));
        Ok(())
    }
}

/// Assert two pressures agree within `tolerance` hPa
#[macro_export]
macro_rules! assert_hpa_eq {
    ($actual:expr, $expected:expr, $tolerance:expr) => {
        let (actual, expected): (f32, f32) = ($actual, $expected);
        assert!(
            (actual - expected).abs() <= $tolerance,
            "Expected {} hPa, got {} hPa", expected, actual
        );
    };
}
