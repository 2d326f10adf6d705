//! Log output configuration.

use std::io;

use clap::{Args, ValueEnum};
use serde::{Deserialize, Serialize};
use strum::Display;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Format of log lines written to stderr.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[derive(ValueEnum, Display, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable text.
    #[default]
    Text,
    /// One JSON object per line.
    Json,
}

/// Logging configuration.
///
/// Filtering follows `RUST_LOG` and defaults to `info`. Logs always go to
/// stderr so stdout only carries routing results.
#[derive(Debug, Clone, Args, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log output format.
    #[arg(long, env = "NVISY_LOG_FORMAT", value_enum, default_value_t = LogFormat::Text)]
    #[serde(default)]
    pub log_format: LogFormat,
}

impl LoggingConfig {
    /// Initializes tracing with environment-based filtering.
    pub fn init_tracing(&self) {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
        let json = self.log_format == LogFormat::Json;

        tracing_subscriber::registry()
            .with(filter)
            .with(json.then(|| tracing_subscriber::fmt::layer().json().with_writer(io::stderr)))
            .with((!json).then(|| tracing_subscriber::fmt::layer().with_writer(io::stderr)))
            .init();
    }
}
