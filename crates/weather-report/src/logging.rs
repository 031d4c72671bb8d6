// File: crates/weather-report/src/logging.rs
// Summary: Tracing subscriber setup (stderr, env-overridable filter).

use anyhow::Result;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

/// Initialises tracing. `WEATHER_REPORT_LOG` overrides the verbosity-derived filter.
pub fn init(verbosity: u8) -> Result<()> {
    let filter = EnvFilter::try_from_env("WEATHER_REPORT_LOG")
        .or_else(|_| EnvFilter::try_new(default_directives(verbosity)))?;
    let format_layer = tracing_subscriber::fmt::layer()
        .without_time()
        .with_writer(std::io::stderr)
        .with_filter(filter);

    tracing_subscriber::Registry::default().with(format_layer).try_init()?;
    Ok(())
}

pub fn default_directives(verbosity: u8) -> String {
    let level = match verbosity {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    format!("weather_report={level},trend_core={level}")
}
