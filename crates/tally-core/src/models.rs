//! Domain models for Tally

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Direction of funds for a ledger row
///
/// Parsing is case-insensitive. Anything other than `in`/`out` is kept
/// verbatim as `Other` and is excluded from both directions.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Direction {
    /// Incoming funds
    #[default]
    In,
    /// Outgoing funds
    Out,
    /// Unrecognized direction label
    Other(String),
}

impl Direction {
    pub fn as_str(&self) -> &str {
        match self {
            Self::In => "In",
            Self::Out => "Out",
            Self::Other(s) => s,
        }
    }
}

impl From<&str> for Direction {
    fn from(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "in" => Self::In,
            "out" => Self::Out,
            _ => Self::Other(s.to_string()),
        }
    }
}

impl From<String> for Direction {
    fn from(s: String) -> Self {
        Self::from(s.as_str())
    }
}

impl From<Direction> for String {
    fn from(direction: Direction) -> Self {
        direction.as_str().to_string()
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A single ledger entry
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Row {
    /// Month label such as "Jul 25"
    #[serde(default)]
    pub month_year: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub sub_category: Option<String>,
    #[serde(default)]
    pub amount: Decimal,
    #[serde(default, rename = "type", alias = "direction")]
    pub direction: Direction,
}

impl Row {
    pub fn new(
        month_year: &str,
        category: &str,
        sub_category: &str,
        amount: Decimal,
        direction: Direction,
    ) -> Self {
        Self {
            month_year: Some(month_year.to_string()),
            category: Some(category.to_string()),
            sub_category: Some(sub_category.to_string()),
            amount,
            direction,
        }
    }

    /// The month label, if present and not blank
    pub fn month_label(&self) -> Option<&str> {
        non_blank(self.month_year.as_deref())
    }

    /// Whether both category and subcategory carry text
    pub fn is_categorized(&self) -> bool {
        non_blank(self.category.as_deref()).is_some()
            && non_blank(self.sub_category.as_deref()).is_some()
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|s| !s.trim().is_empty())
}

/// Aggregated summary returned to clients
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryDocument {
    /// One entry per parsable month, oldest first
    pub insight_summary: Vec<MonthlyInsight>,
    pub money_in_summary: MoneySummary,
    pub money_out_summary: MoneySummary,
}

/// Totals for a single month
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlyInsight {
    /// 1-based position in chronological order
    pub index: usize,
    pub month: String,
    pub summary: MonthlySummary,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlySummary {
    pub money_in_total: Decimal,
    pub money_out_total: Decimal,
}

/// Category breakdown for one direction
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MoneySummary {
    /// Reference month range, carried through verbatim
    pub month_range: String,
    pub summary: OverallSummary,
    /// Keyed by lowercased category name
    pub categories: BTreeMap<String, CategoryDetail>,
}

impl MoneySummary {
    /// An empty summary labelled with the given month range
    pub fn empty(month_range: i32) -> Self {
        Self {
            month_range: month_range.to_string(),
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OverallSummary {
    /// Sum of all category amounts
    pub total: Decimal,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CategoryDetail {
    pub amount: Decimal,
    /// Keyed by lowercased subcategory name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subitem: Option<BTreeMap<String, Decimal>>,
}
