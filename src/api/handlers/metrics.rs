//! Handler for the metrics scrape endpoint.

use axum::{
    extract::State,
    http::header,
    response::IntoResponse,
};

use crate::error::AppError;
use crate::state::AppState;

/// Renders all counters and histograms in Prometheus text format.
///
/// # Endpoint
///
/// `GET /metrics`
pub async fn metrics_handler(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let body = state.metrics.render()?;

    Ok(([(header::CONTENT_TYPE, state.metrics.content_type())], body))
}
