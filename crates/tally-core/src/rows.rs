//! Ledger row loading from JSON and CSV files

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use std::str::FromStr;

use csv::{ReaderBuilder, StringRecord};
use rust_decimal::Decimal;
use serde::Deserialize;
use tracing::debug;

use crate::error::{Error, Result};
use crate::models::{Direction, Row};

/// Supported row file formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowFormat {
    Json,
    Csv,
}

impl RowFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Csv => "csv",
        }
    }

    /// Infer the format from a file extension
    pub fn from_path(path: &Path) -> Option<Self> {
        path.extension()
            .and_then(|ext| ext.to_str())
            .and_then(|ext| ext.parse().ok())
    }
}

impl FromStr for RowFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "csv" => Ok(Self::Csv),
            _ => Err(format!("Unknown row format: {} (valid: json, csv)", s)),
        }
    }
}

impl std::fmt::Display for RowFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Load rows from a file, inferring the format from the extension when not given
pub fn load_rows(path: &Path, format: Option<RowFormat>) -> Result<Vec<Row>> {
    let format = match format.or_else(|| RowFormat::from_path(path)) {
        Some(format) => format,
        None => {
            return Err(Error::UnsupportedFormat(format!(
                "cannot infer format of {} (use json or csv)",
                path.display()
            )))
        }
    };

    let reader = BufReader::new(File::open(path)?);
    let rows = match format {
        RowFormat::Json => parse_json_rows(reader)?,
        RowFormat::Csv => parse_csv_rows(reader)?,
    };

    debug!(path = %path.display(), %format, rows = rows.len(), "Loaded ledger rows");
    Ok(rows)
}

/// Parse rows from JSON: either a bare array or `{ "rows": [...] }`
pub fn parse_json_rows<R: Read>(mut reader: R) -> Result<Vec<Row>> {
    #[derive(Deserialize)]
    struct RowsFile {
        rows: Vec<Row>,
    }

    // Pick the shape from the first token: untagged enums buffer numbers,
    // which breaks exact decimal parsing.
    let mut content = Vec::new();
    reader.read_to_end(&mut content)?;
    let is_array = content
        .iter()
        .find(|b| !b.is_ascii_whitespace())
        .is_some_and(|b| *b == b'[');

    let rows = if is_array {
        serde_json::from_slice(&content)?
    } else {
        serde_json::from_slice::<RowsFile>(&content)?.rows
    };
    Ok(rows)
}

/// Column positions resolved from a CSV header
#[derive(Debug)]
struct CsvColumns {
    month_year: Option<usize>,
    category: Option<usize>,
    sub_category: Option<usize>,
    amount: usize,
    direction: Option<usize>,
}

impl CsvColumns {
    fn from_headers(headers: &StringRecord) -> Result<Self> {
        let mut month_year = None;
        let mut category = None;
        let mut sub_category = None;
        let mut amount = None;
        let mut direction = None;

        for (i, header) in headers.iter().enumerate() {
            let name: String = header
                .trim()
                .chars()
                .filter(|c| !matches!(c, ' ' | '_' | '-'))
                .collect::<String>()
                .to_lowercase();
            let slot = match name.as_str() {
                "monthyear" | "month" => &mut month_year,
                "category" => &mut category,
                "subcategory" => &mut sub_category,
                "amount" => &mut amount,
                "type" | "direction" => &mut direction,
                _ => continue,
            };
            slot.get_or_insert(i);
        }

        let amount =
            amount.ok_or_else(|| Error::InvalidData("CSV has no amount column".into()))?;

        Ok(Self {
            month_year,
            category,
            sub_category,
            amount,
            direction,
        })
    }
}

/// Parse rows from CSV with a header line
///
/// Headers are matched case-insensitively, ignoring spaces, underscores and
/// dashes (`monthYear`, `Month Year`, `sub_category` all work). Only the
/// amount column is required; empty cells become missing values.
pub fn parse_csv_rows<R: Read>(reader: R) -> Result<Vec<Row>> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let columns = CsvColumns::from_headers(rdr.headers()?)?;
    let mut rows = Vec::new();

    for (i, result) in rdr.records().enumerate() {
        let record = result?;
        // Header is line 1
        let line = i + 2;

        let cell = |col: Option<usize>| {
            col.and_then(|c| record.get(c))
                .map(str::trim)
                .filter(|s| !s.is_empty())
        };

        let amount = match cell(Some(columns.amount)) {
            Some(raw) => parse_amount(raw).ok_or_else(|| {
                Error::InvalidData(format!("line {}: unable to parse amount: {}", line, raw))
            })?,
            None => Decimal::ZERO,
        };

        rows.push(Row {
            month_year: cell(columns.month_year).map(String::from),
            category: cell(columns.category).map(String::from),
            sub_category: cell(columns.sub_category).map(String::from),
            amount,
            direction: cell(columns.direction)
                .map(Direction::from)
                .unwrap_or_default(),
        });
    }

    Ok(rows)
}

/// Parse a monetary amount, tolerating currency symbols, thousands separators
/// and accounting-style negatives
fn parse_amount(s: &str) -> Option<Decimal> {
    let cleaned: String = s
        .trim()
        .replace(['$', ',', ' '], "")
        .replace('(', "-")
        .replace(')', "");

    Decimal::from_str(&cleaned).ok()
}
