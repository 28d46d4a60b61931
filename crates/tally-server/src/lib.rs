//! Tally Web Server
//!
//! Axum-based REST API that aggregates ledger rows into the summary
//! document consumed by the dashboard charts.
//!
//! - `GET /api/summary` summarizes the built-in sample ledger
//! - `POST /api/summary` summarizes rows supplied in the request body
//! - `GET /api/dashboard` returns simulated dashboard metrics
//! - `GET /api/health` reports liveness
//!
//! `/api/CategorySummary` and `/api/Dashboard` are kept as aliases for
//! clients of the earlier controller-style routes.
//!
//! The server holds no mutable state; every request computes a fresh
//! document.

use std::sync::Arc;

use axum::{
    http::{header, HeaderValue, Method, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    services::ServeDir,
    set_header::SetResponseHeaderLayer,
    trace::TraceLayer,
};
use tracing::{info, warn};

use tally_core::config::TallyConfig;
use tally_core::fixture;
use tally_core::models::Row;
use tally_core::SummarySettings;

mod handlers;

/// Server configuration
#[derive(Clone, Debug, Default)]
pub struct ServerConfig {
    /// Allowed CORS origins (empty = same-origin only, "*" = any origin)
    pub allowed_origins: Vec<String>,
    /// Defaults applied to summary requests
    pub summary: SummarySettings,
}

impl From<&TallyConfig> for ServerConfig {
    fn from(config: &TallyConfig) -> Self {
        Self {
            allowed_origins: config.server.allowed_origins.clone(),
            summary: config.summary.clone(),
        }
    }
}

impl ServerConfig {
    fn allows_any_origin(&self) -> bool {
        self.allowed_origins.iter().any(|o| o == "*")
    }
}

/// Shared application state
pub struct AppState {
    pub config: ServerConfig,
    /// Ledger served by `GET /api/summary`
    pub sample_rows: Vec<Row>,
}

/// Create the application router
pub fn create_router(static_dir: Option<&str>, config: ServerConfig) -> Router {
    create_router_with_rows(static_dir, config, fixture::sample_rows())
}

/// Create the application router with a custom sample ledger (for testing)
pub fn create_router_with_rows(
    static_dir: Option<&str>,
    config: ServerConfig,
    sample_rows: Vec<Row>,
) -> Router {
    let cors = build_cors(&config);

    let state = Arc::new(AppState {
        config,
        sample_rows,
    });

    let summary_routes = get(handlers::get_summary).post(handlers::post_summary);
    let dashboard_routes = get(handlers::get_dashboard);

    let api_routes = Router::new()
        // Summary
        .route("/summary", summary_routes.clone())
        .route("/CategorySummary", summary_routes)
        // Dashboard
        .route("/dashboard", dashboard_routes.clone())
        .route("/Dashboard", dashboard_routes)
        // Health
        .route("/health", get(handlers::health));

    let mut app = Router::new()
        .nest("/api", api_routes)
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        // Security headers
        .layer(SetResponseHeaderLayer::overriding(
            header::X_CONTENT_TYPE_OPTIONS,
            HeaderValue::from_static("nosniff"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            header::X_FRAME_OPTIONS,
            HeaderValue::from_static("DENY"),
        ));

    // Serve static files if directory provided
    if let Some(dir) = static_dir {
        app = app.fallback_service(ServeDir::new(dir));
    }

    app
}

/// Build the CORS layer from the configured origins
fn build_cors(config: &ServerConfig) -> CorsLayer {
    let base = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT]);

    if config.allows_any_origin() {
        return base.allow_origin(Any);
    }

    if config.allowed_origins.is_empty() {
        // Restrictive default: only allow same-origin
        return base;
    }

    let origins: Vec<HeaderValue> = config
        .allowed_origins
        .iter()
        .filter_map(|o| match o.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(_) => {
                warn!(origin = %o, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();
    base.allow_origin(origins)
}

/// Start the server
pub async fn serve(
    host: &str,
    port: u16,
    static_dir: Option<&str>,
    config: ServerConfig,
) -> anyhow::Result<()> {
    if config.allows_any_origin() {
        warn!("⚠️  CORS allows any origin - do not expose to untrusted networks");
    } else if !config.allowed_origins.is_empty() {
        info!("CORS origins: {}", config.allowed_origins.join(", "));
    }
    info!(
        "Summary defaults: month range {}, as-of {}",
        config.summary.default_month_range,
        config
            .summary
            .as_of_date
            .map(|d| d.to_string())
            .unwrap_or_else(|| "today".to_string())
    );

    let app = create_router(static_dir, config);
    let addr = format!("{}:{}", host, port);

    info!("Starting server at http://{}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

// ============================================================================
// Error Handling
// ============================================================================

/// Application error type with proper HTTP status codes
pub struct AppError {
    status: StatusCode,
    message: String,
}

impl AppError {
    pub fn bad_request(msg: &str) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: msg.to_string(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let body = Json(serde_json::json!({
            "error": self.message
        }));

        (self.status, body).into_response()
    }
}
