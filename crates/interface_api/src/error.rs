//! API error handling

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use core_kernel::{DomainError, ErrorKind};
use serde::Serialize;
use thiserror::Error;
use validator::ValidationErrors;

/// API error types
#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Validation error: {0}")]
    Validation(String),
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Domain(err) => match err.kind() {
                ErrorKind::NotFound => StatusCode::NOT_FOUND,
                ErrorKind::DuplicateKey => StatusCode::CONFLICT,
                ErrorKind::InvalidFormat => StatusCode::BAD_REQUEST,
                ErrorKind::BusinessRuleViolation => StatusCode::UNPROCESSABLE_ENTITY,
            },
            ApiError::BadRequest(_) | ApiError::Validation(_) => StatusCode::BAD_REQUEST,
        }
    }

    fn error_type(&self) -> &'static str {
        match self {
            ApiError::Domain(err) => err.kind().as_str(),
            ApiError::BadRequest(_) => "bad_request",
            ApiError::Validation(_) => "validation_error",
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let message = match &self {
            ApiError::Domain(err) => err.to_string(),
            ApiError::BadRequest(msg) | ApiError::Validation(msg) => msg.clone(),
        };

        let body = ErrorResponse {
            error: self.error_type().to_string(),
            message,
        };

        (self.status(), Json(body)).into_response()
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

impl From<ValidationErrors> for ApiError {
    fn from(errors: ValidationErrors) -> Self {
        ApiError::Validation(errors.to_string())
    }
}
