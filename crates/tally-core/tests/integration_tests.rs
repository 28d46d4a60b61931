//! Integration tests for tally-core
//!
//! These tests exercise the full load → aggregate → serialize workflow.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use tally_core::{
    compute_summary, fixture, parse_csv_rows, parse_json_rows, Direction, MoneySummary, Row,
};

/// Ledger export with mixed casing, a blank category and an unparsable month
fn ledger_csv() -> &'static str {
    r#"monthYear,category,subCategory,amount,type
Sep 25,Paid,Paid,1500.25,Out
Jul 25,paid,paid,5000,out
Jul 25,inprocess,inprocess,2000,OUT
Aug 25,open,sent,3000,Out
Aug 25,Open,overDue,1000,Out
Aug 25,,sent,99.75,Out
Jul 25,Processed,Processed,1101,In
Jul 25,upcoming payments,In process,1101,In
Jul 25,upcoming payments,scheduled,2100,in
Jul 25,upcoming payments,inProcess,1110,In
someday,Processed,Processed,50,In
"#
}

fn as_of() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 10, 14).unwrap()
}

fn assert_reconciles(summary: &MoneySummary) {
    let mut category_sum = Decimal::ZERO;
    for detail in summary.categories.values() {
        let subitems: Decimal = detail
            .subitem
            .as_ref()
            .expect("categories with rows report subitems")
            .values()
            .sum();
        assert_eq!(detail.amount, subitems);
        category_sum += detail.amount;
    }
    assert_eq!(summary.summary.total, category_sum);
}

// =============================================================================
// CSV Workflow
// =============================================================================

#[test]
fn test_csv_ledger_summary() {
    let rows = parse_csv_rows(ledger_csv().as_bytes()).expect("Failed to parse CSV");
    assert_eq!(rows.len(), 11);

    let doc = compute_summary(Some(rows.as_slice()), 6, as_of());

    // "someday" never parses, so only three months appear
    let months: Vec<&str> = doc
        .insight_summary
        .iter()
        .map(|m| m.month.as_str())
        .collect();
    assert_eq!(months, vec!["Jul 25", "Aug 25", "Sep 25"]);

    let august = &doc.insight_summary[1];
    assert_eq!(august.index, 2);
    // Blank-category row still counts toward August
    assert_eq!(august.summary.money_out_total, Decimal::new(409975, 2));

    let out = &doc.money_out_summary;
    assert_eq!(out.categories["paid"].amount, Decimal::new(650025, 2));
    assert_eq!(out.categories["open"].amount, Decimal::from(4000));
    assert_eq!(out.summary.total, Decimal::new(1250025, 2));

    // Unparsable month still contributes to its category
    let money_in = &doc.money_in_summary;
    assert_eq!(money_in.categories["processed"].amount, Decimal::from(1151));

    assert_reconciles(&doc.money_in_summary);
    assert_reconciles(&doc.money_out_summary);
}

// =============================================================================
// JSON Wire Shape
// =============================================================================

#[test]
fn test_sample_ledger_json_shape() {
    let rows = fixture::sample_rows();
    let doc = compute_summary(Some(rows.as_slice()), 6, fixture::reference_as_of());
    let json = serde_json::to_value(&doc).unwrap();

    let insights = json["insightSummary"].as_array().unwrap();
    assert_eq!(insights.len(), 3);
    assert_eq!(insights[0]["index"], 1);
    assert_eq!(insights[0]["month"], "Jul 25");
    assert_eq!(insights[0]["summary"]["moneyInTotal"].as_f64(), Some(5413.0));
    assert_eq!(insights[0]["summary"]["moneyOutTotal"].as_f64(), Some(7000.0));

    let money_in = &json["moneyInSummary"];
    assert_eq!(money_in["monthRange"], "6");
    assert_eq!(money_in["summary"]["total"].as_f64(), Some(7614.0));

    let upcoming = &money_in["categories"]["upcoming payments"];
    assert_eq!(upcoming["amount"].as_f64(), Some(4311.0));
    let subitem = upcoming["subitem"].as_object().unwrap();
    assert_eq!(subitem.len(), 3);
    assert_eq!(subitem["in process"].as_f64(), Some(1101.0));
    assert_eq!(subitem["inprocess"].as_f64(), Some(1110.0));

    let money_out = &json["moneyOutSummary"];
    assert_eq!(money_out["categories"]["open"]["subitem"]["overdue"].as_f64(), Some(1000.0));
}

#[test]
fn test_amounts_serialize_as_exact_numbers() {
    let rows = fixture::sample_rows();
    let doc = compute_summary(Some(rows.as_slice()), 6, fixture::reference_as_of());
    let text = serde_json::to_string(&doc).unwrap();

    assert!(text.contains(r#""moneyInTotal":5413"#), "{}", text);
    assert!(text.contains(r#""processed":{"amount":3303"#), "{}", text);
    assert!(text.contains(r#""total":7614"#), "{}", text);
    assert!(!text.contains("5413.0"));
}

#[test]
fn test_large_amounts_keep_their_cents() {
    let body = r#"[
        {"monthYear": "Jul 25", "category": "big", "subCategory": "ticket", "amount": "12345678901234567.89", "type": "Out"},
        {"monthYear": "Jul 25", "category": "big", "subCategory": "ticket", "amount": 0.11, "type": "Out"}
    ]"#;

    let rows = parse_json_rows(body.as_bytes()).unwrap();
    assert_eq!(rows[0].amount.to_string(), "12345678901234567.89");

    let doc = compute_summary(Some(rows.as_slice()), 6, as_of());
    let text = serde_json::to_string(&doc).unwrap();

    assert!(text.contains(r#""moneyOutTotal":12345678901234568.00"#), "{}", text);
    assert!(text.contains(r#""total":12345678901234568.00"#), "{}", text);
    assert!(!text.contains("e+"));
}

#[test]
fn test_json_request_body_rows() {
    let body = r#"{
        "monthRange": 3,
        "rows": [
            {"monthYear": "Aug 25", "category": "Fees", "subCategory": "Bank", "amount": 0.1, "type": "Out"},
            {"monthYear": "Aug 25", "category": "fees", "subCategory": "bank", "amount": 0.2, "type": "out"},
            {"monthYear": null, "category": "fees", "subCategory": "bank", "amount": 0.3, "type": "Out"}
        ]
    }"#;

    let rows = parse_json_rows(body.as_bytes()).unwrap();
    let doc = compute_summary(Some(rows.as_slice()), 3, as_of());

    assert_eq!(doc.insight_summary.len(), 1);
    assert_eq!(
        doc.insight_summary[0].summary.money_out_total,
        Decimal::new(3, 1)
    );
    assert_eq!(
        doc.money_out_summary.categories["fees"].amount,
        Decimal::new(6, 1)
    );
    assert_eq!(doc.money_out_summary.month_range, "3");
}

// =============================================================================
// Reconciliation
// =============================================================================

#[test]
fn test_reconciliation_over_generated_ledger() {
    let months = ["Jan 25", "Feb 25", "bogus", "", "Dec 24"];
    let categories = ["Rent", "rent", "Food", " ", "food"];
    let subs = ["Home", "home", "Groceries", "Dining", ""];
    let directions = ["In", "out", "OUT", "in", "transfer"];

    let rows: Vec<Row> = (0..250i64)
        .map(|i| {
            let i_usize = i as usize;
            Row {
                month_year: Some(months[i_usize % months.len()].to_string()),
                category: Some(categories[(i_usize / 2) % categories.len()].to_string()),
                sub_category: Some(subs[(i_usize / 3) % subs.len()].to_string()),
                amount: Decimal::new(i * 137 + 1, 2),
                direction: Direction::from(directions[(i_usize / 5) % directions.len()]),
            }
        })
        .collect();

    let doc = compute_summary(Some(rows.as_slice()), 12, as_of());

    assert_reconciles(&doc.money_in_summary);
    assert_reconciles(&doc.money_out_summary);

    // Keys are always lowercase
    for summary in [&doc.money_in_summary, &doc.money_out_summary] {
        for (category, detail) in &summary.categories {
            assert_eq!(category, &category.to_lowercase());
            for sub in detail.subitem.as_ref().unwrap().keys() {
                assert_eq!(sub, &sub.to_lowercase());
            }
        }
    }

    // Monthly insights cover every parsable month, in order
    let labels: Vec<&str> = doc
        .insight_summary
        .iter()
        .map(|m| m.month.as_str())
        .collect();
    assert_eq!(labels, vec!["Dec 24", "Jan 25", "Feb 25"]);
    for (i, insight) in doc.insight_summary.iter().enumerate() {
        assert_eq!(insight.index, i + 1);
    }

    // Monthly totals agree with a direct sum over rows for that label
    for insight in &doc.insight_summary {
        let expected_in: Decimal = rows
            .iter()
            .filter(|r| r.month_year.as_deref() == Some(insight.month.as_str()))
            .filter(|r| r.direction == Direction::In)
            .map(|r| r.amount)
            .sum();
        assert_eq!(insight.summary.money_in_total, expected_in);
    }
}
