//! CLI command implementations
//!
//! Commands are organized by domain:
//! - `summarize` - Summary commands (summarize a row file, summarize the sample)
//! - `serve` - Web server command
//! - `config` - Effective configuration display

pub mod config;
pub mod serve;
pub mod summarize;

// Re-export command functions for main.rs
pub use config::*;
pub use serve::*;
pub use summarize::*;
