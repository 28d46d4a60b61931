//! CLI argument definitions using clap
//!
//! This module contains all the clap structs and enums for parsing CLI arguments.
//! The actual command implementations are in the `commands` module.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Tally - Summarize ledger rows into dashboard-ready totals
#[derive(Parser)]
#[command(name = "tally")]
#[command(about = "Ledger summary engine for money-in/money-out dashboards", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Config file (defaults to the data-dir override, then built-in defaults)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Summarize ledger rows from a JSON or CSV file
    Summarize {
        /// Row file to summarize
        #[arg(short, long)]
        file: PathBuf,

        /// Row format: json or csv (inferred from the extension if not specified)
        #[arg(long)]
        format: Option<String>,

        /// Month range label echoed into the summary (defaults to config)
        #[arg(short, long, allow_negative_numbers = true)]
        month_range: Option<i32>,

        /// Reference date (YYYY-MM-DD, defaults to config or today)
        #[arg(long)]
        as_of: Option<String>,

        /// Write the summary to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Emit compact JSON instead of pretty-printed
        #[arg(long)]
        compact: bool,
    },

    /// Summarize the built-in sample ledger
    Sample {
        /// Month range label echoed into the summary (defaults to config)
        #[arg(short, long, allow_negative_numbers = true)]
        month_range: Option<i32>,

        /// Emit compact JSON instead of pretty-printed
        #[arg(long)]
        compact: bool,
    },

    /// Start the web server
    Serve {
        /// Port to listen on (defaults to config)
        #[arg(short, long)]
        port: Option<u16>,

        /// Host to bind to (defaults to config)
        #[arg(long)]
        host: Option<String>,

        /// Directory containing static files to serve (e.g., ui/dist)
        #[arg(long)]
        static_dir: Option<PathBuf>,
    },

    /// Show the effective configuration
    Config,
}
