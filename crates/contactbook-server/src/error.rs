//! API error types with HTTP status code mapping.
//!
//! [`ApiError`] is the unified error type for all API endpoints. It implements
//! `axum::response::IntoResponse` to produce structured JSON error responses
//! with appropriate HTTP status codes.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use contactbook_storage::StorageError;

/// Structured error detail in API responses.
#[derive(Debug, Clone, Serialize)]
pub struct ApiErrorDetail {
    /// Machine-readable error code (e.g., "NOT_FOUND", "BAD_REQUEST").
    pub code: String,
    /// Human-readable error message.
    pub message: String,
}

/// API errors with HTTP status code mapping.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Contact not found (404).
    #[error("not found: {0}")]
    NotFound(String),

    /// Request body is not the expected JSON (400).
    #[error("bad request: {0}")]
    BadRequest(String),

    /// Storage fault (500).
    #[error("internal error: {0}")]
    InternalError(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::InternalError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn code(&self) -> &'static str {
        match self {
            ApiError::NotFound(_) => "NOT_FOUND",
            ApiError::BadRequest(_) => "BAD_REQUEST",
            ApiError::InternalError(_) => "INTERNAL_ERROR",
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = match &self {
            ApiError::NotFound(msg) | ApiError::BadRequest(msg) | ApiError::InternalError(msg) => {
                msg.clone()
            }
        };

        if status.is_server_error() {
            tracing::error!(%status, error = %message, "request failed");
        }

        let detail = ApiErrorDetail {
            code: self.code().to_string(),
            message,
        };
        let body = serde_json::json!({
            "success": false,
            "error": detail,
        });

        (status, axum::Json(body)).into_response()
    }
}

impl From<StorageError> for ApiError {
    fn from(err: StorageError) -> Self {
        if err.is_not_found() {
            ApiError::NotFound(err.to_string())
        } else {
            ApiError::InternalError(err.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use contactbook_storage::ContactId;

    use super::*;

    #[test]
    fn storage_not_found_maps_to_404() {
        let err: ApiError = StorageError::NotFound(ContactId::from("x")).into();
        assert_eq!(err.status(), StatusCode::NOT_FOUND);
        assert_eq!(err.to_string(), "not found: contact not found: x");
    }

    #[test]
    fn storage_fault_maps_to_500_with_message() {
        let err: ApiError = StorageError::Unavailable("disk gone".into()).into();
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert!(matches!(err, ApiError::InternalError(ref m) if m.contains("disk gone")));
    }
}
