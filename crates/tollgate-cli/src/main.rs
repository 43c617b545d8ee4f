//! Tollgate CLI
//!
//! Validates account import/export configurations before a broker applies
//! them.

#![warn(clippy::all)]
#![forbid(unsafe_code)]

use anyhow::{Context, Result};
use clap::Parser;
use std::process::ExitCode;
use tollgate_cli::{Cli, CliConfig};
use tracing_subscriber::EnvFilter;

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    let config = CliConfig::load(cli.config.as_deref())
        .context("Failed to load tollgate settings")?
        .with_log_level(cli.log_level.clone());

    // RUST_LOG wins over the flag and the settings file
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.log_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    let mut stdout = std::io::stdout().lock();
    let outcome = tollgate_cli::run(&cli, &config, &mut stdout)?;
    Ok(ExitCode::from(outcome.exit_code()))
}
