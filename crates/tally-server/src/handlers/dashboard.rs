//! Dashboard handlers
//!
//! Metrics are simulated; only the `last3Months` range has its own figures.

use axum::{extract::Query, Json};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::AppError;

/// Query parameters for the dashboard
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardQuery {
    pub month_range: Option<String>,
}

/// Dashboard metrics for a range
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardMetrics {
    pub total_transactions: u32,
    pub revenue: Decimal,
    pub users_active: u32,
}

/// Dashboard response
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardResponse {
    pub month_range: String,
    pub metrics: DashboardMetrics,
    pub timestamp: DateTime<Utc>,
}

impl DashboardMetrics {
    fn for_range(month_range: &str) -> Self {
        if month_range == "last3Months" {
            Self {
                total_transactions: 1500,
                revenue: Decimal::new(2_500_000, 2),
                users_active: 120,
            }
        } else {
            Self {
                total_transactions: 500,
                revenue: Decimal::new(800_000, 2),
                users_active: 40,
            }
        }
    }
}

/// GET /api/dashboard - Simulated dashboard metrics for a month range
pub async fn get_dashboard(
    Query(params): Query<DashboardQuery>,
) -> Result<Json<DashboardResponse>, AppError> {
    let month_range = params
        .month_range
        .filter(|r| !r.trim().is_empty())
        .ok_or_else(|| AppError::bad_request("monthRange is required"))?;

    Ok(Json(DashboardResponse {
        metrics: DashboardMetrics::for_range(&month_range),
        month_range,
        timestamp: Utc::now(),
    }))
}
