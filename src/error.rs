//! Application error type and its HTTP mapping.
//!
//! Every failure reaching a handler is an [`AppError`]. Responses use a
//! single JSON shape:
//!
//! ```json
//! { "detail": "Short code not found" }
//! ```

use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use validator::ValidationErrors;

#[derive(Serialize)]
struct ErrorBody {
    detail: String,
}

/// Errors surfaced by services and handlers.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Malformed request body or URL (422).
    #[error("{message}")]
    Validation { message: String },

    /// Request is well-formed but not acceptable (400).
    #[error("{message}")]
    BadRequest { message: String },

    /// Short code is already taken (400).
    #[error("{message}")]
    Conflict { message: String },

    /// No mapping for the requested short code (404).
    #[error("{message}")]
    NotFound { message: String },

    #[error("{message}")]
    Internal { message: String },
}

impl AppError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::BadRequest {
            message: message.into(),
        }
    }
    pub fn conflict(message: impl Into<String>) -> Self {
        Self::Conflict {
            message: message.into(),
        }
    }
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
        }
    }
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// HTTP status this error is reported with.
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::BadRequest { .. } | AppError::Conflict { .. } => StatusCode::BAD_REQUEST,
            AppError::NotFound { .. } => StatusCode::NOT_FOUND,
            AppError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        if let AppError::Internal { message } = &self {
            tracing::error!("Internal error: {}", message);
        }

        let body = ErrorBody {
            detail: self.to_string(),
        };

        (status, Json(body)).into_response()
    }
}

impl From<ValidationErrors> for AppError {
    fn from(errors: ValidationErrors) -> Self {
        let mut fields: Vec<String> = errors
            .field_errors()
            .iter()
            .map(|(field, errs)| {
                let reason = errs
                    .first()
                    .and_then(|e| e.message.as_ref())
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| "invalid value".to_string());
                format!("{}: {}", field, reason)
            })
            .collect();
        fields.sort();

        AppError::validation(fields.join("; "))
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::validation(rejection.body_text())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(
            AppError::validation("x").status_code(),
            StatusCode::UNPROCESSABLE_ENTITY
        );
        assert_eq!(
            AppError::bad_request("x").status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::conflict("x").status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(AppError::not_found("x").status_code(), StatusCode::NOT_FOUND);
        assert_eq!(
            AppError::internal("x").status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_display_is_message() {
        let err = AppError::conflict("Custom code already exists");
        assert_eq!(err.to_string(), "Custom code already exists");
    }

    #[test]
    fn test_response_status() {
        let response = AppError::not_found("Short code not found").into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
