//! Trail Forecast Example
//!
//! A day on the trail: a night at a valley camp, a climb, and an afternoon at
//! a mountain hut while a front moves in. Shows how dwell compensation keeps
//! the climb from looking like a storm.
//!
//! ## What You'll Learn
//!
//! - Converting raw barometer readings to sea-level pressure
//! - Reading the 3-hour tendency and hourly forecast
//! - The effect of dwell-based altitude smoothing
//!
//! ## Running the Example
//!
//! ```bash
//! cargo run --example 01_trail_forecast
//! ```

use barocast_core::{
    constants::MS_PER_HOUR,
    reading::PressureReading,
    time::FixedTime,
    ForecastResult, WeatherService, WeatherSettings,
};

const START: u64 = 1_700_000_000_000;
const SAMPLE_MS: u64 = MS_PER_HOUR / 4;

/// Station pressure under the standard atmosphere
fn station_pressure(sea_level: f32, altitude: f32) -> f32 {
    sea_level * (1.0 - altitude / 44330.0).powf(5.255)
}

fn trail() -> Vec<PressureReading> {
    let mut readings = Vec::new();
    let mut time = START;

    // (hours, start altitude, end altitude, sea-level hPa/h)
    let legs = [(3, 450.0, 450.0, 0.0), (2, 450.0, 1250.0, 0.0), (4, 1250.0, 1250.0, -2.5)];
    let mut sea_level = 1016.0;

    for (hours, from, to, trend) in legs {
        let samples = hours * 4;
        for i in 0..samples {
            let altitude = from + (to - from) * i as f32 / samples as f32;
            // Altimeter wobble
            let reported = altitude + if i % 2 == 0 { 12.0 } else { -12.0 };
            readings.push(
                PressureReading::new(time, station_pressure(sea_level, altitude), reported)
                    .with_accuracy(8.0)
                    .with_temperature(14.0 - (altitude - 450.0) * 0.0065),
            );
            sea_level += trend / 4.0;
            time += SAMPLE_MS;
        }
    }

    readings
}

fn main() -> ForecastResult<()> {
    println!("Barocast Trail Forecast Example");
    println!("===============================\n");

    let readings = trail();
    let now = readings.last().map(|r| r.time).unwrap_or(START);

    let plain = WeatherSettings::default();
    let smoothed = plain.with_dwell(60.0, 1.5).with_temperature(true);

    for (label, settings) in [("raw altitude", plain), ("dwell smoothing", smoothed)] {
        settings.validate()?;
        let service = WeatherService::new(settings, FixedTime::new(now));
        let report = service.forecast(&readings)?;

        println!("With {}:", label);
        println!(
            "  Tendency: {:?} ({:+.2} hPa / 3h)",
            report.tendency.characteristic, report.tendency.amount
        );
        println!("  Hourly forecast: {}", report.hourly);
        println!("  Daily forecast:  {}", report.daily);
        if let Some(system) = report.pressure_system {
            println!("  Pressure system: {}", system);
        }

        println!("  Sea-level pressure by hour:");
        for reading in report.readings.iter().step_by(4) {
            let hour = (reading.time - START) / MS_PER_HOUR;
            println!("    +{}h  {:7.2} hPa", hour, reading.pressure);
        }
        println!();
    }

    let service = WeatherService::new(WeatherSettings::default(), FixedTime::new(now));
    let feels_like = service.heat_index(31.0, 65.0);
    println!("Comfort at the hut porch (31°C, 65% RH):");
    println!("  Feels like {:.1}°C ({:?})", feels_like, service.heat_alert(feels_like));
    if let Some(dew_point) = service.dew_point(31.0, 65.0) {
        println!("  Dew point {:.1}°C", dew_point);
    }

    Ok(())
}
