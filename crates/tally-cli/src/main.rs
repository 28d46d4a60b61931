//! Tally CLI - Ledger summaries for dashboard charts
//!
//! Usage:
//!   tally summarize --file rows.csv   Summarize a ledger export
//!   tally sample                      Summarize the built-in sample ledger
//!   tally serve --port 3000           Start web server
//!   tally config                      Show effective configuration

mod cli;
mod commands;


use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use cli::*;
use tally_core::TallyConfig;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set up logging
    // Priority: RUST_LOG env var > --verbose flag > default (info)
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false).compact().with_writer(std::io::stderr))
        .init();

    let config = TallyConfig::load(cli.config.as_deref()).context("Failed to load config")?;

    match cli.command {
        Commands::Summarize {
            file,
            format,
            month_range,
            as_of,
            output,
            compact,
        } => commands::cmd_summarize(
            &config,
            &file,
            format.as_deref(),
            month_range,
            as_of.as_deref(),
            output.as_deref(),
            compact,
        ),
        Commands::Sample {
            month_range,
            compact,
        } => commands::cmd_sample(&config, month_range, compact),
        Commands::Serve {
            port,
            host,
            static_dir,
        } => commands::cmd_serve(&config, host.as_deref(), port, static_dir.as_deref()).await,
        Commands::Config => commands::cmd_config(&config),
    }
}
