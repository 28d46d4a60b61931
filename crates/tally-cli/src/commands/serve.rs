//! Server command implementation

use std::path::Path;

use anyhow::{Context, Result};

use tally_core::config::parse_origins;
use tally_core::TallyConfig;
use tally_server::ServerConfig;

pub async fn cmd_serve(
    config: &TallyConfig,
    host: Option<&str>,
    port: Option<u16>,
    static_dir: Option<&Path>,
) -> Result<()> {
    let host = host.unwrap_or(config.server.host.as_str());
    let port = port.unwrap_or(config.server.port);

    let mut server_config = ServerConfig::from(config);
    if let Some(origins) = allowed_origins_from_env() {
        server_config.allowed_origins = origins;
    }

    println!("🚀 Starting Tally web server...");
    println!("   Config: {}", config.source);
    println!("   Listening: http://{}:{}", host, port);
    if let Some(dir) = static_dir {
        println!("   Static files: {}", dir.display());
    }
    if !server_config.allowed_origins.is_empty() {
        println!(
            "   🌐 CORS origins: {}",
            server_config.allowed_origins.join(", ")
        );
    }
    println!();

    let static_dir = static_dir
        .map(|d| {
            d.to_str()
                .context("Static directory path is not valid UTF-8")
        })
        .transpose()?;

    tally_server::serve(host, port, static_dir, server_config).await
}

/// CORS origins from TALLY_ALLOWED_ORIGINS (comma-separated), if set
fn allowed_origins_from_env() -> Option<Vec<String>> {
    std::env::var("TALLY_ALLOWED_ORIGINS")
        .ok()
        .map(|value| parse_origins(&value))
        .filter(|origins| !origins.is_empty())
}
