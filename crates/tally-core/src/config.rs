//! Tally configuration
//!
//! ## Configuration Resolution
//!
//! Config is loaded with a two-layer resolution:
//! 1. An explicit path, or the override in the data dir
//!    (~/.local/share/tally/config/tally.toml) when it exists
//! 2. Fall back to embedded defaults (compiled into binary)

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{NaiveDate, Utc};
use serde::Deserialize;
use tracing::debug;

use crate::error::{Error, Result};

/// Embedded default config (compiled into binary)
const DEFAULT_CONFIG: &str = include_str!("../../../config/tally.toml");

/// Settings for summary computation
#[derive(Debug, Clone, PartialEq)]
pub struct SummarySettings {
    /// Month range used when a request does not supply one
    pub default_month_range: i32,
    /// Fixed reference date; None means "today"
    pub as_of_date: Option<NaiveDate>,
}

impl SummarySettings {
    /// The effective as-of date
    pub fn as_of(&self) -> NaiveDate {
        self.as_of_date.unwrap_or_else(|| Utc::now().date_naive())
    }
}

impl Default for SummarySettings {
    fn default() -> Self {
        Self {
            default_month_range: 6,
            as_of_date: None,
        }
    }
}

/// Settings for the HTTP server
#[derive(Debug, Clone, PartialEq)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
    /// CORS origins; empty = same-origin only, "*" = any
    pub allowed_origins: Vec<String>,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 3000,
            allowed_origins: vec![],
        }
    }
}

/// Where the active configuration came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    Embedded,
    File(PathBuf),
}

impl std::fmt::Display for ConfigSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Embedded => write!(f, "built-in defaults"),
            Self::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Complete Tally configuration
#[derive(Debug, Clone, PartialEq)]
pub struct TallyConfig {
    pub summary: SummarySettings,
    pub server: ServerSettings,
    pub source: ConfigSource,
}

impl Default for TallyConfig {
    fn default() -> Self {
        Self {
            summary: SummarySettings::default(),
            server: ServerSettings::default(),
            source: ConfigSource::Embedded,
        }
    }
}

impl TallyConfig {
    /// Load configuration
    ///
    /// An explicit path must exist. Without one, the data-dir override is
    /// used when present, otherwise the embedded defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let path = match path {
            Some(path) => Some(path.to_path_buf()),
            None => default_config_path().filter(|p| p.exists()),
        };

        match path {
            Some(path) => {
                let content = fs::read_to_string(&path).map_err(|e| {
                    Error::InvalidData(format!(
                        "Failed to read config {}: {}",
                        path.display(),
                        e
                    ))
                })?;
                let mut config = Self::from_toml(&content)?;
                debug!(path = %path.display(), "Loaded config override");
                config.source = ConfigSource::File(path);
                Ok(config)
            }
            None => Self::from_toml(DEFAULT_CONFIG),
        }
    }

    /// Parse configuration from TOML content, layered over the defaults
    pub fn from_toml(content: &str) -> Result<Self> {
        let raw: RawConfig = toml::from_str(content)?;
        let mut config = Self::default();

        if let Some(summary) = raw.summary {
            if let Some(range) = summary.default_month_range {
                config.summary.default_month_range = range;
            }
            if let Some(date) = summary.as_of_date {
                let parsed = NaiveDate::parse_from_str(date.trim(), "%Y-%m-%d").map_err(|_| {
                    Error::InvalidData(format!(
                        "Invalid as_of_date '{}' (use YYYY-MM-DD)",
                        date
                    ))
                })?;
                config.summary.as_of_date = Some(parsed);
            }
        }

        if let Some(server) = raw.server {
            if let Some(host) = server.host {
                config.server.host = host;
            }
            if let Some(port) = server.port {
                config.server.port = port;
            }
            if let Some(origins) = server.allowed_origins {
                config.server.allowed_origins = origins;
            }
        }

        Ok(config)
    }
}

/// Default config override path
pub fn default_config_path() -> Option<PathBuf> {
    dirs::data_local_dir().map(|d| d.join("tally").join("config").join("tally.toml"))
}

/// Parse a comma-separated origin list, dropping empty entries
pub fn parse_origins(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

/// Raw config structure for TOML parsing
#[derive(Debug, Deserialize)]
struct RawConfig {
    summary: Option<RawSummary>,
    server: Option<RawServer>,
}

#[derive(Debug, Deserialize)]
struct RawSummary {
    default_month_range: Option<i32>,
    as_of_date: Option<String>,
}

#[derive(Debug, Deserialize)]
struct RawServer {
    host: Option<String>,
    port: Option<u16>,
    allowed_origins: Option<Vec<String>>,
}
