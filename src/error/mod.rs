//! Error handling module.
//!
//! This module provides unified error handling with proper HTTP status code mapping
//! and standardized API error responses.

pub mod codes;

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

pub use codes::ErrorCode;

use crate::domain::AddressError;

/// Application-level error type.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Address failed parsing or scheme preconditions.
    #[error(transparent)]
    Address(#[from] AddressError),

    /// Requested more results than the service allows.
    #[error("Requested {requested} results, maximum is {max}")]
    LimitExceeded {
        /// Result count implied by the request.
        requested: u64,
        /// Configured ceiling.
        max: u64,
    },

    /// Invalid request parameters.
    #[error("Invalid request: {0}")]
    BadRequest(String),

}

impl AppError {
    /// Get the error code for this error.
    #[must_use]
    pub const fn error_code(&self) -> ErrorCode {
        match self {
            Self::Address(AddressError::Empty) => ErrorCode::EMPTY_INPUT,
            Self::Address(AddressError::Malformed) => ErrorCode::MALFORMED_ADDRESS,
            Self::Address(AddressError::SchemeMismatch) => ErrorCode::SCHEME_MISMATCH,
            Self::LimitExceeded { .. } => ErrorCode::LIMIT_EXCEEDED,
            Self::BadRequest(_) => ErrorCode::BAD_REQUEST,
        }
    }

    /// Get the HTTP status code for this error.
    #[must_use]
    pub const fn status_code(&self) -> StatusCode {
        match self {
            Self::Address(AddressError::SchemeMismatch) => StatusCode::UNPROCESSABLE_ENTITY,
            Self::Address(_) | Self::LimitExceeded { .. } | Self::BadRequest(_) => {
                StatusCode::BAD_REQUEST
            }
        }
    }

    /// Short machine-readable reason, used as a metrics label.
    #[must_use]
    pub const fn reason(&self) -> &'static str {
        match self {
            Self::Address(err) => err.reason(),
            Self::LimitExceeded { .. } => "limit_exceeded",
            Self::BadRequest(_) => "bad_request",
        }
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        Self::BadRequest(rejection.body_text())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let code = self.error_code().as_i32();
        let message = self.to_string();

        tracing::warn!(
            error_code = code,
            status = %status,
            message = %message,
            "Request rejected"
        );

        let body = Json(json!({
            "code": code,
            "message": message,
            "data": null
        }));

        (status, body).into_response()
    }
}

/// Result type alias using `AppError`.
pub type Result<T> = std::result::Result<T, AppError>;
