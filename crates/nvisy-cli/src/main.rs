#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![doc = include_str!("../README.md")]

mod config;
mod evaluate;

use std::io;
use std::process;

use crate::config::Cli;

// Tracing target constants
pub const TRACING_TARGET_STARTUP: &str = "nvisy_cli::startup";
pub const TRACING_TARGET_SHUTDOWN: &str = "nvisy_cli::shutdown";
pub const TRACING_TARGET_CONFIG: &str = "nvisy_cli::config";
pub const TRACING_TARGET_EVALUATE: &str = "nvisy_cli::evaluate";

fn main() {
    let Err(error) = run() else {
        tracing::debug!(
            target: TRACING_TARGET_SHUTDOWN,
            "application terminated successfully"
        );
        process::exit(0);
    };

    let report = format!("{error:#}");
    if tracing::enabled!(tracing::Level::ERROR) {
        tracing::error!(
            target: TRACING_TARGET_SHUTDOWN,
            error = %report,
            "application terminated with error"
        );
    } else {
        eprintln!("Error: {report}");
    }

    process::exit(1);
}

/// Main application entry point.
fn run() -> anyhow::Result<()> {
    let cli = Cli::init();

    cli.logging.init_tracing();
    cli.log();

    let config = cli.input.load_routing_config()?;

    if cli.validate {
        evaluate::validate_config(&config)?;
    }

    if cli.ports {
        return evaluate::write_ports(&config, io::stdout().lock());
    }

    if cli.validate && cli.input.input.is_none() {
        return Ok(());
    }

    let documents = cli.input.read_documents()?;
    evaluate::route_documents(&config, &documents, io::stdout().lock())
}
