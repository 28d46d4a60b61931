//! Summary command implementations

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use tracing::info;

use tally_core::models::SummaryDocument;
use tally_core::{compute_summary, fixture, load_rows, RowFormat, TallyConfig};

pub fn cmd_summarize(
    config: &TallyConfig,
    file: &Path,
    format: Option<&str>,
    month_range: Option<i32>,
    as_of: Option<&str>,
    output: Option<&Path>,
    compact: bool,
) -> Result<()> {
    let format = format
        .map(|f| f.parse::<RowFormat>())
        .transpose()
        .map_err(anyhow::Error::msg)?;
    let as_of = match as_of {
        Some(date) => parse_as_of(date)?,
        None => config.summary.as_of(),
    };
    let month_range = month_range.unwrap_or(config.summary.default_month_range);

    let rows = load_rows(file, format)
        .with_context(|| format!("Failed to load rows from {}", file.display()))?;
    info!("Summarizing {} rows from {}", rows.len(), file.display());

    let doc = compute_summary(Some(rows.as_slice()), month_range, as_of);
    let rendered = render_document(&doc, compact)?;

    match output {
        Some(path) => {
            fs::write(path, rendered + "\n")
                .with_context(|| format!("Failed to write {}", path.display()))?;
            info!("Wrote summary to {}", path.display());
        }
        None => println!("{}", rendered),
    }

    Ok(())
}

pub fn cmd_sample(config: &TallyConfig, month_range: Option<i32>, compact: bool) -> Result<()> {
    let month_range = month_range.unwrap_or(config.summary.default_month_range);
    let rows = fixture::sample_rows();

    let doc = compute_summary(Some(rows.as_slice()), month_range, config.summary.as_of());
    println!("{}", render_document(&doc, compact)?);

    Ok(())
}

/// Serialize a summary document as JSON
pub fn render_document(doc: &SummaryDocument, compact: bool) -> Result<String> {
    let json = if compact {
        serde_json::to_string(doc)?
    } else {
        serde_json::to_string_pretty(doc)?
    };
    Ok(json)
}

/// Parse an --as-of date
pub fn parse_as_of(s: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
        .with_context(|| format!("Invalid --as-of date '{}' (use YYYY-MM-DD)", s))
}
