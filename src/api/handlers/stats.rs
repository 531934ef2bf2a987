//! Handler for service statistics.

use axum::{Json, extract::State};

use crate::api::dto::stats::StatsResponse;
use crate::error::AppError;
use crate::state::AppState;

/// Returns link and redirect totals.
///
/// # Endpoint
///
/// `GET /stats`
///
/// # Response
///
/// ```json
/// { "total_urls": 3, "total_redirects": 10, "total_urls_created": 3 }
/// ```
pub async fn stats_handler(State(state): State<AppState>) -> Result<Json<StatsResponse>, AppError> {
    let total_urls = state.link_service.total_links().await?;
    let snapshot = state.metrics.snapshot();

    Ok(Json(StatsResponse {
        total_urls,
        total_redirects: snapshot.total_redirects,
        total_urls_created: snapshot.total_created,
    }))
}
