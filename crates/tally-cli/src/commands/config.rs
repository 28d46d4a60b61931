//! Config command implementation

use anyhow::Result;

use tally_core::config::default_config_path;
use tally_core::TallyConfig;

pub fn cmd_config(config: &TallyConfig) -> Result<()> {
    println!("⚙️  Tally configuration");
    println!("   Source: {}", config.source);
    if let Some(path) = default_config_path() {
        let marker = if path.exists() { "" } else { " (not present)" };
        println!("   Override path: {}{}", path.display(), marker);
    }
    println!();

    println!("   [summary]");
    println!(
        "   default_month_range = {}",
        config.summary.default_month_range
    );
    match config.summary.as_of_date {
        Some(date) => println!("   as_of_date = {}", date),
        None => println!("   as_of_date = (today: {})", config.summary.as_of()),
    }
    println!();

    println!("   [server]");
    println!("   host = {}", config.server.host);
    println!("   port = {}", config.server.port);
    if config.server.allowed_origins.is_empty() {
        println!("   allowed_origins = (same-origin only)");
    } else {
        println!(
            "   allowed_origins = {}",
            config.server.allowed_origins.join(", ")
        );
    }

    Ok(())
}
