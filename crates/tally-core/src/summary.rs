//! Ledger summary aggregation
//!
//! Turns a flat list of ledger rows into the summary document used by the
//! dashboard charts:
//! - monthly money in/out totals, oldest month first
//! - per-direction category breakdowns with subcategory detail
//!
//! Aggregation never fails. Rows that cannot be placed are left out of the
//! part of the document they do not fit:
//! - unparsable month labels are missing from the monthly insights
//! - rows with a blank category or subcategory are missing from the
//!   category breakdowns (but still counted in their month)

use std::collections::{BTreeMap, HashMap};

use chrono::NaiveDate;
use rust_decimal::Decimal;
use tracing::debug;

use crate::models::{
    Direction, MoneySummary, MonthlyInsight, MonthlySummary, Row, SummaryDocument,
};
use crate::months::parse_month_label;

/// Compute the summary document for a set of ledger rows
///
/// `None` and an empty slice are equivalent. `month_range` is copied into
/// both money summaries as a label and does not filter rows. `as_of` is
/// accepted for callers that track a reference date but does not affect the
/// result.
pub fn compute_summary(
    rows: Option<&[Row]>,
    month_range: i32,
    as_of: NaiveDate,
) -> SummaryDocument {
    let rows = rows.unwrap_or_default();
    debug!(rows = rows.len(), month_range, %as_of, "Computing summary");

    let insight_summary = monthly_insights(rows);

    let mut money_in = Vec::new();
    let mut money_out = Vec::new();
    for row in rows.iter().filter(|r| r.is_categorized()) {
        match row.direction {
            Direction::In => money_in.push(row),
            Direction::Out => money_out.push(row),
            Direction::Other(ref other) => {
                debug!(direction = %other, "Skipping row with unknown direction")
            }
        }
    }

    SummaryDocument {
        insight_summary,
        money_in_summary: money_summary(&money_in, month_range),
        money_out_summary: money_summary(&money_out, month_range),
    }
}

/// Per-month totals for every row with a parsable month label
fn monthly_insights(rows: &[Row]) -> Vec<MonthlyInsight> {
    // Labels keep first-seen order so case variants of the same month
    // ("Jul 25", "jul 25") stay in a stable order after sorting.
    let mut labels: Vec<&str> = Vec::new();
    let mut totals: HashMap<&str, MonthlySummary> = HashMap::new();

    for row in rows {
        let Some(label) = row.month_label() else {
            continue;
        };
        let entry = totals.entry(label).or_insert_with(|| {
            labels.push(label);
            MonthlySummary::default()
        });
        match row.direction {
            Direction::In => entry.money_in_total += row.amount,
            Direction::Out => entry.money_out_total += row.amount,
            Direction::Other(_) => {}
        }
    }

    let mut months: Vec<_> = labels
        .into_iter()
        .filter_map(|label| match parse_month_label(label) {
            Some(key) => Some((key, label)),
            None => {
                debug!(month = label, "Dropping unparsable month label");
                None
            }
        })
        .collect();
    months.sort_by_key(|(key, _)| *key);

    months
        .into_iter()
        .enumerate()
        .map(|(i, (_, label))| MonthlyInsight {
            index: i + 1,
            month: label.to_string(),
            summary: totals.remove(label).unwrap_or_default(),
        })
        .collect()
}

/// Category breakdown for rows of a single direction
fn money_summary(rows: &[&Row], month_range: i32) -> MoneySummary {
    let mut summary = MoneySummary::empty(month_range);

    let mut by_pair: BTreeMap<(String, String), Decimal> = BTreeMap::new();
    for row in rows {
        let category = normalize_key(row.category.as_deref());
        let sub_category = normalize_key(row.sub_category.as_deref());
        *by_pair
            .entry((category, sub_category))
            .or_insert(Decimal::ZERO) += row.amount;
    }

    for ((category, sub_category), sum) in by_pair {
        let detail = summary.categories.entry(category).or_default();
        detail.amount += sum;
        detail
            .subitem
            .get_or_insert_with(BTreeMap::new)
            .insert(sub_category, sum);
        summary.summary.total += sum;
    }

    summary
}

/// Grouping key: lowercased, otherwise untouched
fn normalize_key(label: Option<&str>) -> String {
    label.unwrap_or_default().to_lowercase()
}
