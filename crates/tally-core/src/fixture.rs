//! Built-in sample ledger
//!
//! Served by `GET /api/summary` and `tally sample` so the dashboard charts
//! have something to render without an upstream data source.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::models::{Direction, Row};

/// Reference as-of date of the sample ledger (2025-10-14)
pub const REFERENCE_AS_OF: (i32, u32, u32) = (2025, 10, 14);

/// The sample ledger's as-of date
pub fn reference_as_of() -> NaiveDate {
    let (year, month, day) = REFERENCE_AS_OF;
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or(NaiveDate::MIN)
}

/// Sample rows covering Jul/Aug/Sep 25 in both directions
pub fn sample_rows() -> Vec<Row> {
    let row = |month: &str, category: &str, sub: &str, amount: i64, direction: Direction| {
        Row::new(month, category, sub, Decimal::from(amount), direction)
    };

    vec![
        // Money in
        row("Jul 25", "Processed", "Processed", 1101, Direction::In),
        row("Jul 25", "upcoming payments", "In process", 1101, Direction::In),
        row("Jul 25", "upcoming payments", "scheduled", 2100, Direction::In),
        row("Jul 25", "upcoming payments", "inProcess", 1110, Direction::In),
        row("Aug 25", "Processed", "Processed", 1101, Direction::In),
        row("Sep 25", "Processed", "Processed", 1101, Direction::In),
        // Money out
        row("Jul 25", "paid", "paid", 5000, Direction::Out),
        row("Jul 25", "inprocess", "inprocess", 2000, Direction::Out),
        row("Aug 25", "open", "sent", 3000, Direction::Out),
        row("Aug 25", "open", "overDue", 1000, Direction::Out),
        row("Sep 25", "paid", "paid", 1500, Direction::Out),
    ]
}
