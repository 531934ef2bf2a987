//! Handler for link shortening endpoint.

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::{HeaderMap, Uri},
};
use validator::Validate;

use crate::api::dto::shorten::{ShortenRequest, ShortenResponse};
use crate::error::AppError;
use crate::state::AppState;
use crate::utils::base_url::extract_base_url;
use crate::utils::url_normalizer::normalize_url;

/// Creates a short URL.
///
/// # Endpoint
///
/// `POST /shorten`
///
/// # Request Body
///
/// ```json
/// { "url": "https://www.python.org", "custom_code": "python" }
/// ```
///
/// # Response
///
/// ```json
/// {
///   "short_url": "http://localhost:8000/python",
///   "original_url": "https://www.python.org/",
///   "short_code": "python"
/// }
/// ```
///
/// # Errors
///
/// - 422 if the body is malformed or `url` is not an absolute HTTP(S) URL
/// - 400 if `custom_code` is reserved or already exists
pub async fn shorten_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    uri: Uri,
    payload: Result<Json<ShortenRequest>, JsonRejection>,
) -> Result<Json<ShortenResponse>, AppError> {
    let Json(payload) = payload?;
    payload.validate()?;

    let original_url =
        normalize_url(&payload.url).map_err(|e| AppError::validation(e.to_string()))?;

    let base_url = match state.public_base_url {
        Some(ref base) => base.clone(),
        None => extract_base_url(&headers, &uri, state.trust_forwarded_headers),
    };

    let shortened = state
        .link_service
        .shorten(original_url, payload.custom_code(), &base_url)
        .await?;

    Ok(Json(ShortenResponse {
        short_url: shortened.short_url,
        original_url: shortened.link.original_url,
        short_code: shortened.link.code,
    }))
}
