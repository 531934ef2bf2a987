//! Handler for the service description endpoint.

use axum::Json;

use crate::api::dto::info::{EndpointsInfo, ServiceInfoResponse};

/// Describes the service and its endpoints.
///
/// # Endpoint
///
/// `GET /`
pub async fn root_handler() -> Json<ServiceInfoResponse> {
    Json(ServiceInfoResponse {
        message: "URL Shortener Service".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        endpoints: EndpointsInfo {
            shorten: "POST /shorten - Create a short URL",
            redirect: "GET /{short_code} - Redirect to original URL",
            stats: "GET /stats - Link and redirect totals",
            metrics: "GET /metrics - Prometheus metrics",
            health: "GET /health - Service health",
        },
    })
}
