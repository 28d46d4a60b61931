//! Summary handlers

use std::sync::Arc;

use axum::{
    extract::{Query, State},
    Json,
};
use chrono::NaiveDate;
use serde::{Deserialize, Deserializer};
use tracing::debug;

use crate::{AppError, AppState};
use tally_core::compute_summary;
use tally_core::models::{Row, SummaryDocument};

/// Query parameters for the sample summary
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryQuery {
    pub month_range: Option<i32>,
}

/// Request body for summarizing caller-supplied rows
///
/// An absent `rows` key means no rows; an explicit `null` is kept as `None`
/// and rejected by the handler.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryRequest {
    #[serde(default)]
    pub month_range: Option<i32>,
    #[serde(default = "no_rows", deserialize_with = "nullable_rows")]
    pub rows: Option<Vec<Row>>,
    #[serde(default)]
    pub as_of_date: Option<NaiveDate>,
}

fn no_rows() -> Option<Vec<Row>> {
    Some(Vec::new())
}

fn nullable_rows<'de, D>(deserializer: D) -> Result<Option<Vec<Row>>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<Vec<Row>>::deserialize(deserializer)
}

/// GET /api/summary - Summarize the built-in sample ledger
pub async fn get_summary(
    State(state): State<Arc<AppState>>,
    Query(params): Query<SummaryQuery>,
) -> Json<SummaryDocument> {
    let settings = &state.config.summary;
    let month_range = params.month_range.unwrap_or(settings.default_month_range);

    let doc = compute_summary(
        Some(state.sample_rows.as_slice()),
        month_range,
        settings.as_of(),
    );
    Json(doc)
}

/// POST /api/summary - Summarize rows supplied in the request body
pub async fn post_summary(
    State(state): State<Arc<AppState>>,
    Json(body): Json<Option<SummaryRequest>>,
) -> Result<Json<SummaryDocument>, AppError> {
    let request = body.ok_or_else(|| AppError::bad_request("Invalid request."))?;
    let rows = request
        .rows
        .ok_or_else(|| AppError::bad_request("Invalid request."))?;

    let settings = &state.config.summary;
    let month_range = request
        .month_range
        .unwrap_or(settings.default_month_range);
    let as_of = request.as_of_date.unwrap_or_else(|| settings.as_of());

    debug!(rows = rows.len(), month_range, %as_of, "Summarizing posted rows");

    Ok(Json(compute_summary(Some(rows.as_slice()), month_range, as_of)))
}
