//! API route configuration.

use crate::api::handlers::{
    health_handler, metrics_handler, redirect_handler, root_handler, shorten_handler,
    stats_handler,
};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// All public routes.
///
/// # Endpoints
///
/// - `GET  /`              - Service description
/// - `POST /shorten`       - Create a short URL
/// - `GET  /stats`         - Link and redirect totals
/// - `GET  /metrics`       - Prometheus exposition
/// - `GET  /health`        - Health check
/// - `GET  /{short_code}`  - Redirect to the original URL
///
/// Static segments win over the `/{short_code}` capture, so `/metrics`,
/// `/stats` and `/health` never reach the redirect handler.
pub fn public_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(root_handler))
        .route("/shorten", post(shorten_handler))
        .route("/stats", get(stats_handler))
        .route("/metrics", get(metrics_handler))
        .route("/health", get(health_handler))
        .route("/{short_code}", get(redirect_handler))
}
