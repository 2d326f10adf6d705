//! CLI configuration management.
//!
//! This module defines the complete CLI configuration hierarchy:
//!
//! ```text
//! Cli
//! ├── input: InputConfig      # Routing configuration and input documents
//! ├── logging: LoggingConfig  # Log output format
//! ├── validate                # Validate the routing configuration
//! └── ports                   # Print the output ports
//! ```
//!
//! All configuration can be provided via CLI arguments or environment variables.
//! Use `--help` to see all available options.
//!
//! # Example
//!
//! ```bash
//! nvisy-switch --config switch.json --input order.json
//!
//! # Or via environment variables
//! NVISY_SWITCH_CONFIG=switch.json NVISY_SWITCH_INPUT=order.json nvisy-switch
//! ```

mod input;
mod logging;

use std::process;

use clap::Parser;
pub use input::InputConfig;
pub use logging::LoggingConfig;
use serde::{Deserialize, Serialize};

use crate::{TRACING_TARGET_CONFIG, TRACING_TARGET_STARTUP};

/// Complete CLI configuration.
#[derive(Debug, Clone, Parser, Serialize, Deserialize)]
#[command(name = "nvisy-switch")]
#[command(about = "Evaluate Nvisy switch node configurations against JSON documents")]
#[command(version)]
pub struct Cli {
    /// Routing configuration and input documents.
    #[clap(flatten)]
    pub input: InputConfig,

    /// Log output configuration.
    #[clap(flatten)]
    pub logging: LoggingConfig,

    /// Validate the routing configuration before doing anything else.
    ///
    /// Exits with an error listing every violation if the configuration
    /// is structurally invalid.
    #[arg(long)]
    #[serde(default)]
    pub validate: bool,

    /// Print the output ports of the switch node instead of routing.
    #[arg(long)]
    #[serde(default)]
    pub ports: bool,
}

impl Cli {
    /// Loads environment variables from .env file (if enabled) and parses CLI arguments.
    ///
    /// This ensures .env files are loaded before clap parses arguments, allowing
    /// environment variables from .env to be used as defaults.
    pub fn init() -> Self {
        Self::load_dotenv();
        Self::parse()
    }

    /// Loads environment variables from .env file if the dotenv feature is enabled.
    #[cfg(feature = "dotenv")]
    fn load_dotenv() {
        if let Err(err) = dotenvy::dotenv()
            && !err.not_found()
        {
            eprintln!("Warning: failed to load .env file: {err}");
        }
    }

    /// No-op when dotenv feature is disabled.
    #[cfg(not(feature = "dotenv"))]
    fn load_dotenv() {}

    /// Logs build information at debug level.
    fn log_build_info() {
        tracing::debug!(
            target: TRACING_TARGET_STARTUP,
            version = env!("CARGO_PKG_VERSION"),
            pid = process::id(),
            arch = std::env::consts::ARCH,
            os = std::env::consts::OS,
            features = ?Self::enabled_features(),
            "Build information"
        );
    }

    /// Logs configuration at debug level.
    pub fn log(&self) {
        Self::log_build_info();

        tracing::debug!(
            target: TRACING_TARGET_CONFIG,
            config = %self.input.config.display(),
            input = %self.input.source(),
            ndjson = self.input.ndjson,
            validate = self.validate,
            ports = self.ports,
            log_format = %self.logging.log_format,
            "CLI configuration"
        );
    }

    /// Returns a list of enabled compile-time features.
    fn enabled_features() -> Vec<&'static str> {
        [cfg!(feature = "dotenv").then_some("dotenv")]
            .into_iter()
            .flatten()
            .collect()
    }
}
