//! Update Cycle Example
//!
//! Runs the periodic update cycle the way a background service would: one
//! barometer sample every 15 minutes, with the storm notification raised once
//! and cleared when the pressure recovers.
//!
//! Settings are loaded from JSON, as a host keeping preferences on disk would.
//!
//! ## Running the Example
//!
//! ```bash
//! cargo run --example 02_update_cycle
//! ```

use barocast_core::{
    alert::{AlertAction, InMemoryAlertStore},
    constants::MS_PER_HOUR,
    monitor::{InMemoryPressureRepository, NotificationLog, WeatherMonitor},
    reading::PressureReading,
    time::{FixedTime, TimeSource},
    ForecastResult, WeatherSettings,
};

const START: u64 = 1_700_000_000_000;

const SETTINGS: &str = r#"{
    "storm_threshold": 6.0,
    "hourly_forecast_change_threshold": 1.5,
    "send_storm_alerts": true
}"#;

fn main() -> ForecastResult<()> {
    println!("Barocast Update Cycle Example");
    println!("=============================\n");

    let settings = WeatherSettings::from_json(SETTINGS)?;
    println!("Storm threshold: {} hPa / 3h\n", settings.storm_threshold);

    let mut monitor = WeatherMonitor::new(
        settings,
        FixedTime::new(START),
        InMemoryPressureRepository::new(),
        InMemoryAlertStore::default(),
        NotificationLog::default(),
        NotificationLog::default(),
    );

    // Calm, a sharp low passing through, then recovery
    let profile = |hour: f32| -> f32 {
        match hour {
            h if h < 3.0 => 1014.0,
            h if h < 6.0 => 1014.0 - 3.5 * (h - 3.0),
            h => 1003.5 + 1.5 * (h - 6.0),
        }
    };

    for step in 0..=48u64 {
        let time = START + step * MS_PER_HOUR / 4;
        monitor.clock_mut().set(time);

        let hour = step as f32 / 4.0;
        let sample = PressureReading::new(time, profile(hour), 220.0);
        let outcome = monitor.run_cycle(sample)?;

        if step % 4 == 0 || outcome.alert == AlertAction::Send {
            println!(
                "+{:5.2}h  {:7.2} hPa  tendency {:+6.2}  {:<10}  {:?}",
                hour,
                outcome.report.readings.last().map(|r| r.pressure).unwrap_or(f32::NAN),
                outcome.report.tendency.amount,
                outcome.report.hourly.to_string(),
                outcome.alert
            );
        }
    }

    let notifier = monitor.storm_notifier();
    println!(
        "\nStorm alerts sent: {}, visible now: {}",
        notifier.storm_alerts_sent, notifier.storm_alert_visible
    );
    println!(
        "Readings kept: {} (clock at +{}h)",
        monitor.repository().len(),
        (monitor.service().clock().now() - START) / MS_PER_HOUR
    );

    Ok(())
}
