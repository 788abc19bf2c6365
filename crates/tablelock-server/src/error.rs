//! API error types with HTTP status code mapping.
//!
//! [`ApiError`] is the unified error type for all API endpoints. It implements
//! `axum::response::IntoResponse` to produce `{success:false, code, message}`
//! bodies with the matching status code.

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use tablelock_core::ValidationError;

/// Message sent for every internal failure. Details only go to the log.
pub const INTERNAL_ERROR_MESSAGE: &str = "Internal server error";

/// Body of every failed response.
#[derive(Debug, Clone, Serialize)]
pub struct ApiErrorBody {
    /// Always `false`.
    pub success: bool,
    /// Machine-readable error code (e.g. "BAD_REQUEST", "CONFLICT").
    pub code: &'static str,
    /// Human-readable error message.
    pub message: String,
}

/// API errors with HTTP status code mapping.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Invalid request (400).
    #[error("bad request: {0}")]
    BadRequest(String),

    /// Resource conflict (409).
    #[error("conflict: {0}")]
    Conflict(String),

    /// Internal server error (500). The payload is logged, never returned.
    #[error("internal error: {0}")]
    InternalError(String),
}

impl ApiError {
    fn status_and_code(&self) -> (StatusCode, &'static str) {
        match self {
            ApiError::BadRequest(_) => (StatusCode::BAD_REQUEST, "BAD_REQUEST"),
            ApiError::Conflict(_) => (StatusCode::CONFLICT, "CONFLICT"),
            ApiError::InternalError(_) => (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR"),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code) = self.status_and_code();
        let message = match self {
            ApiError::BadRequest(msg) | ApiError::Conflict(msg) => msg,
            ApiError::InternalError(detail) => {
                tracing::error!("internal error: {}", detail);
                INTERNAL_ERROR_MESSAGE.to_string()
            }
        };

        let body = ApiErrorBody {
            success: false,
            code,
            message,
        };
        (status, axum::Json(body)).into_response()
    }
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        ApiError::BadRequest(err.to_string())
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        match rejection {
            JsonRejection::JsonDataError(_) => ValidationError::MalformedBody.into(),
            other => ApiError::BadRequest(other.body_text()),
        }
    }
}
