//! Periodic Weather Update Cycle
//!
//! Each cycle records one barometer sample, forecasts from the retained
//! history and drives the notification collaborators:
//!
//! ```text
//! sample ─► validate ─► record ─► prune (> 2 days) ─► load sorted history
//!                                                          │
//!            ForecastNotifier ◄─ (if enabled) ◄─ forecast ◄┘
//!                                                   │
//!            StormNotifier ◄──── StormAlertPolicy ◄─┘
//! ```
//!
//! Samples are recorded at the cycle's clock time, whatever `time` they carry,
//! so a sample can never land outside the retention window it is pruned by.
//! An invalid sample is logged and skipped; the forecast still runs on the
//! existing history so notifications stay current. A missing or NaN
//! temperature is recorded as 16°C, the fallback used by the sea-level
//! correction.
//!
//! All collaborators are traits taking `&mut self`, with in-memory versions
//! here for tests and hosts that do not persist anything.

use crate::alert::{AlertAction, AlertStateStore, StormAlertPolicy, StormNotifier};
use crate::constants::time::HISTORY_RETENTION_MS;
use crate::constants::weather::FALLBACK_RECORDED_TEMPERATURE_C;
use crate::errors::ForecastResult;
use crate::forecast::Weather;
use crate::reading::{PressureReading, SeaLevelPressure};
use crate::service::{WeatherReport, WeatherService};
use crate::settings::WeatherSettings;
use crate::time::{TimeSource, Timestamp};
use crate::validation::validate_sample;

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

/// Storage for recorded raw readings
pub trait PressureRepository {
    fn add(&mut self, reading: PressureReading) -> ForecastResult<()>;

    /// All stored readings, in any order
    fn readings(&self) -> ForecastResult<Vec<PressureReading>>;

    /// Remove readings strictly older than `cutoff`, returning how many went
    fn delete_older_than(&mut self, cutoff: Timestamp) -> ForecastResult<usize>;
}

/// Displays the ongoing forecast notification
pub trait ForecastNotifier {
    fn show_forecast(&mut self, forecast: Weather, readings: &[SeaLevelPressure]) -> ForecastResult<()>;
}

/// Readings held in a `Vec`
#[derive(Debug, Clone, Default)]
pub struct InMemoryPressureRepository {
    readings: Vec<PressureReading>,
}

impl InMemoryPressureRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.readings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.readings.is_empty()
    }
}

impl PressureRepository for InMemoryPressureRepository {
    fn add(&mut self, reading: PressureReading) -> ForecastResult<()> {
        self.readings.push(reading);
        Ok(())
    }

    fn readings(&self) -> ForecastResult<Vec<PressureReading>> {
        Ok(self.readings.clone())
    }

    fn delete_older_than(&mut self, cutoff: Timestamp) -> ForecastResult<usize> {
        let before = self.readings.len();
        self.readings.retain(|r| r.time >= cutoff);
        Ok(before - self.readings.len())
    }
}

/// Notification sink that only remembers what it was asked to show
#[derive(Debug, Clone, Default)]
pub struct NotificationLog {
    pub storm_alerts_sent: u32,
    pub storm_alerts_cancelled: u32,
    pub storm_alert_visible: bool,
    pub forecasts_shown: u32,
    pub last_forecast: Option<Weather>,
}

impl StormNotifier for NotificationLog {
    fn send_storm_alert(&mut self) -> ForecastResult<()> {
        self.storm_alerts_sent += 1;
        self.storm_alert_visible = true;
        Ok(())
    }

    fn cancel_storm_alert(&mut self) -> ForecastResult<()> {
        self.storm_alerts_cancelled += 1;
        self.storm_alert_visible = false;
        Ok(())
    }
}

impl ForecastNotifier for NotificationLog {
    fn show_forecast(&mut self, forecast: Weather, _readings: &[SeaLevelPressure]) -> ForecastResult<()> {
        self.forecasts_shown += 1;
        self.last_forecast = Some(forecast);
        Ok(())
    }
}

/// What one update cycle did
#[derive(Debug, Clone, PartialEq)]
pub struct CycleOutcome {
    /// Whether the sample made it into the history
    pub recorded: bool,
    /// Readings removed by the retention window
    pub pruned: usize,
    pub report: WeatherReport,
    pub alert: AlertAction,
}

/// Runs update cycles against a set of collaborators
#[derive(Debug)]
pub struct WeatherMonitor<T, R, S, N, F>
where
    T: TimeSource,
    R: PressureRepository,
    S: AlertStateStore,
    N: StormNotifier,
    F: ForecastNotifier,
{
    service: WeatherService<T>,
    policy: StormAlertPolicy,
    repository: R,
    alert_store: S,
    storm_notifier: N,
    forecast_notifier: F,
}

impl<T, R, S, N, F> WeatherMonitor<T, R, S, N, F>
where
    T: TimeSource,
    R: PressureRepository,
    S: AlertStateStore,
    N: StormNotifier,
    F: ForecastNotifier,
{
    pub fn new(
        settings: WeatherSettings,
        clock: T,
        repository: R,
        alert_store: S,
        storm_notifier: N,
        forecast_notifier: F,
    ) -> Self {
        Self {
            policy: StormAlertPolicy::new(settings.send_storm_alerts),
            service: WeatherService::new(settings, clock),
            repository,
            alert_store,
            storm_notifier,
            forecast_notifier,
        }
    }

    pub fn service(&self) -> &WeatherService<T> {
        &self.service
    }

    pub fn clock_mut(&mut self) -> &mut T {
        self.service.clock_mut()
    }

    pub fn repository(&self) -> &R {
        &self.repository
    }

    pub fn alert_store(&self) -> &S {
        &self.alert_store
    }

    pub fn storm_notifier(&self) -> &N {
        &self.storm_notifier
    }

    pub fn forecast_notifier(&self) -> &F {
        &self.forecast_notifier
    }

    /// Record `sample` and refresh the forecast and notifications
    pub fn run_cycle(&mut self, sample: PressureReading) -> ForecastResult<CycleOutcome> {
        let now = self.service.clock().now();

        let recorded = match validate_sample(&sample) {
            Ok(()) => {
                self.repository.add(recorded_reading(sample, now))?;
                true
            }
            Err(e) => {
                log_warn!("Skipping barometer sample at {}: {}", now, e);
                false
            }
        };

        let pruned = self
            .repository
            .delete_older_than(now.saturating_sub(HISTORY_RETENTION_MS))?;
        if pruned > 0 {
            log_debug!("Pruned {} readings older than retention window", pruned);
        }

        let mut history = self.repository.readings()?;
        history.sort_by_key(|r| r.time);
        history.dedup_by_key(|r| r.time);

        let report = self.service.forecast(&history)?;

        let alert = self
            .policy
            .evaluate(report.hourly, &mut self.alert_store, &mut self.storm_notifier)?;

        if self.service.settings().show_weather_notification {
            self.forecast_notifier
                .show_forecast(report.hourly, &report.readings)?;
        }

        log_info!(
            "Weather cycle: {} readings, hourly {}, daily {}",
            report.readings.len(),
            report.hourly,
            report.daily
        );

        Ok(CycleOutcome {
            recorded,
            pruned,
            report,
            alert,
        })
    }
}

/// Stamp a sample with the cycle time and fill in its temperature
fn recorded_reading(sample: PressureReading, now: Timestamp) -> PressureReading {
    let sample = PressureReading { time: now, ..sample };
    match sample.temperature {
        Some(t) if !t.is_nan() => sample,
        _ => sample.with_temperature(FALLBACK_RECORDED_TEMPERATURE_C),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alert::InMemoryAlertStore;
    use crate::constants::time::{MS_PER_DAY, MS_PER_HOUR};
    use crate::time::FixedTime;

    const T0: u64 = 1_700_000_000_000;

    type TestMonitor = WeatherMonitor<
        FixedTime,
        InMemoryPressureRepository,
        InMemoryAlertStore,
        NotificationLog,
        NotificationLog,
    >;

    fn monitor(settings: WeatherSettings) -> TestMonitor {
        WeatherMonitor::new(
            settings,
            FixedTime::new(T0),
            InMemoryPressureRepository::new(),
            InMemoryAlertStore::default(),
            NotificationLog::default(),
            NotificationLog::default(),
        )
    }

    #[test]
    fn missing_temperature_recorded_as_fallback() {
        let sample = PressureReading::new(T0, 1000.0, 0.0);
        assert_eq!(recorded_reading(sample, T0).temperature, Some(FALLBACK_RECORDED_TEMPERATURE_C));

        let nan = sample.with_temperature(f32::NAN);
        assert_eq!(recorded_reading(nan, T0).temperature, Some(FALLBACK_RECORDED_TEMPERATURE_C));

        let warm = sample.with_temperature(25.0);
        assert_eq!(recorded_reading(warm, T0).temperature, Some(25.0));
    }

    #[test]
    fn stale_sample_recorded_at_cycle_time() {
        let mut monitor = monitor(WeatherSettings::default());
        monitor.clock_mut().advance(3 * MS_PER_DAY);

        // Sample stamped well before the retention window
        let outcome = monitor.run_cycle(PressureReading::new(T0, 1000.0, 0.0)).unwrap();

        assert!(outcome.recorded);
        assert_eq!(outcome.pruned, 0);
        assert_eq!(monitor.repository().len(), 1);
        assert_eq!(outcome.report.readings[0].time, T0 + 3 * MS_PER_DAY);
    }

    #[test]
    fn zero_pressure_is_not_recorded() {
        let mut monitor = monitor(WeatherSettings::default());

        let outcome = monitor.run_cycle(PressureReading::new(T0, 0.0, 0.0)).unwrap();

        assert!(!outcome.recorded);
        assert!(monitor.repository().is_empty());
        assert_eq!(outcome.report.hourly, Weather::NoChange);
        // Forecast notification still refreshed
        assert_eq!(monitor.forecast_notifier().forecasts_shown, 1);
    }

    #[test]
    fn old_readings_are_pruned() {
        let mut monitor = monitor(WeatherSettings::default());

        monitor.run_cycle(PressureReading::new(T0, 1000.0, 0.0)).unwrap();
        monitor.clock_mut().advance(2 * MS_PER_DAY + MS_PER_HOUR);
        let outcome = monitor
            .run_cycle(PressureReading::new(T0 + 2 * MS_PER_DAY + MS_PER_HOUR, 1001.0, 0.0))
            .unwrap();

        assert_eq!(outcome.pruned, 1);
        assert_eq!(monitor.repository().len(), 1);
    }

    #[test]
    fn storm_alert_sent_once() {
        let settings = WeatherSettings::default()
            .with_hourly_threshold(1.0)
            .with_storm_threshold(6.0);
        let mut monitor = monitor(settings);

        monitor.run_cycle(PressureReading::new(T0, 1013.0, 0.0)).unwrap();
        monitor.clock_mut().advance(3 * MS_PER_HOUR);
        let first = monitor
            .run_cycle(PressureReading::new(T0 + 3 * MS_PER_HOUR, 1000.0, 0.0))
            .unwrap();
        monitor.clock_mut().advance(15 * 60 * 1000);
        let second = monitor
            .run_cycle(PressureReading::new(T0 + 3 * MS_PER_HOUR + 15 * 60 * 1000, 999.5, 0.0))
            .unwrap();

        assert_eq!(first.report.hourly, Weather::Storm);
        assert_eq!(first.alert, AlertAction::Send);
        assert_eq!(second.alert, AlertAction::Hold);
        assert_eq!(monitor.storm_notifier().storm_alerts_sent, 1);
        assert!(monitor.storm_notifier().storm_alert_visible);
        assert_eq!(monitor.alert_store().alert_sent(), Ok(true));
    }

    #[test]
    fn forecast_notification_can_be_disabled() {
        let mut monitor = monitor(WeatherSettings::default().with_weather_notification(false));

        monitor.run_cycle(PressureReading::new(T0, 1000.0, 0.0)).unwrap();

        assert_eq!(monitor.forecast_notifier().forecasts_shown, 0);
    }

    #[test]
    fn duplicate_timestamps_do_not_fail_the_cycle() {
        let mut monitor = monitor(WeatherSettings::default());

        monitor.run_cycle(PressureReading::new(T0, 1000.0, 0.0)).unwrap();
        let outcome = monitor.run_cycle(PressureReading::new(T0, 1000.5, 0.0)).unwrap();

        assert!(outcome.recorded);
        assert_eq!(outcome.report.readings.len(), 1);
    }
}
