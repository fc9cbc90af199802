//! HTTP error responses.
//!
//! Maps core error conditions to status codes and the `{error, message}`
//! body shape. Validation rejections are client errors; persistence and
//! scoring failures are server errors with opaque messages.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use crate::domain::foundation::DomainError;
use crate::domain::screening::ScreeningError;

/// Standard error response body.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
}

impl ErrorResponse {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            error: code.into(),
            message: message.into(),
        }
    }
}

/// Maps a screening error to its HTTP response.
pub fn screening_error_response(err: &ScreeningError) -> Response {
    let status = if err.is_validation() {
        StatusCode::BAD_REQUEST
    } else {
        StatusCode::INTERNAL_SERVER_ERROR
    };
    (
        status,
        Json(ErrorResponse::new(err.code().to_string(), err.message())),
    )
        .into_response()
}

/// Maps a read-path domain error to its HTTP response.
pub fn domain_error_response(err: &DomainError) -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorResponse::new(err.code.to_string(), err.message.clone())),
    )
        .into_response()
}
