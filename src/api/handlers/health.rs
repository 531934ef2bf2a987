//! Handler for health check endpoint.

use axum::{Json, extract::State};

use crate::api::dto::health::{CheckStatus, HealthChecks, HealthResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Returns service health status with the registry size.
///
/// # Endpoint
///
/// `GET /health`
///
/// # Errors
///
/// Returns the standard error response if the registry count fails.
pub async fn health_handler(
    State(state): State<AppState>,
) -> Result<Json<HealthResponse>, AppError> {
    let count = state.link_service.total_links().await?;

    Ok(Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        checks: HealthChecks {
            registry: CheckStatus {
                status: "ok".to_string(),
                message: Some(format!("{} links", count)),
            },
        },
    }))
}
