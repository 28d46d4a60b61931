//! Tally Core Library
//!
//! Shared functionality for the Tally ledger summary service:
//! - Ledger row and summary document models
//! - Locale-invariant month label calendar
//! - Summary aggregation (monthly insights, money in/out breakdowns)
//! - JSON and CSV row loading
//! - Built-in sample ledger
//! - Configuration with embedded defaults and file overrides

pub mod config;
pub mod error;
pub mod fixture;
pub mod models;
pub mod months;
pub mod rows;
pub mod summary;

pub use config::{ServerSettings, SummarySettings, TallyConfig};
pub use error::{Error, Result};
pub use models::{
    CategoryDetail, Direction, MoneySummary, MonthlyInsight, MonthlySummary, OverallSummary, Row,
    SummaryDocument,
};
pub use months::{parse_month_label, MonthKey};
pub use rows::{load_rows, parse_csv_rows, parse_json_rows, RowFormat};
pub use summary::compute_summary;
