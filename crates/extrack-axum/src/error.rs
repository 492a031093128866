//! Axum-specific error types and mappings.
//!
//! Failures reach clients in two tiers:
//!
//! - **Soft errors** are business-rule failures (bad input, unknown user).
//!   They are returned with status `200` and a JSON body `{"error": "..."}`.
//! - **Hard errors** ([`HttpError`]) cover routing, body extraction and
//!   anything the business layer cannot explain. They use a non-2xx status
//!   and a plain-text body.

use std::any::Any;

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use extrack_core::{CoreError, RepositoryError};
use serde::Serialize;
use thiserror::Error;

/// Body text used whenever no more specific message is available.
pub const INTERNAL_SERVER_ERROR: &str = "Internal Server Error";

/// Body text for unmatched routes.
pub const NOT_FOUND: &str = "not found";

/// Hard error rendered as plain text with a non-2xx status.
#[derive(Debug, Error)]
pub enum HttpError {
    /// Route or resource does not exist.
    #[error("{0}")]
    NotFound(String),

    /// Malformed request body or a write rejected by a storage constraint.
    #[error("{0}")]
    BadRequest(String),

    /// Anything else. The detail is logged, never sent to the client.
    #[error("{0}")]
    Internal(String),
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        match self {
            Self::NotFound(msg) => (StatusCode::NOT_FOUND, msg).into_response(),
            Self::BadRequest(msg) => {
                tracing::warn!(error = %msg, "Rejected request");
                (StatusCode::BAD_REQUEST, msg).into_response()
            }
            Self::Internal(detail) => {
                tracing::error!(error = %detail, "Request failed");
                (StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_SERVER_ERROR).into_response()
            }
        }
    }
}

impl From<RepositoryError> for HttpError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::Constraint(msg) => Self::BadRequest(msg),
            other => Self::Internal(other.to_string()),
        }
    }
}

/// JSON body of a soft error.
#[derive(Debug, Serialize)]
pub struct SoftErrorBody {
    pub error: String,
}

/// Error returned by the business handlers.
#[derive(Debug)]
pub enum ApiError {
    /// Business failure, reported as `200 {"error": "..."}`.
    Soft(String),
    /// Infrastructure failure, reported through [`HttpError`].
    Hard(HttpError),
}

impl ApiError {
    /// Report any error as a soft error with its display text.
    pub fn soft(err: impl std::fmt::Display) -> Self {
        Self::Soft(err.to_string())
    }
}

impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::Validation(msg) | CoreError::NotFound(msg) => Self::Soft(msg),
            CoreError::Repository(repo_err) => {
                tracing::warn!(error = %repo_err, "Storage failure");
                Self::Hard(repo_err.into())
            }
        }
    }
}

impl From<HttpError> for ApiError {
    fn from(err: HttpError) -> Self {
        Self::Hard(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            Self::Soft(error) => {
                tracing::debug!(error = %error, "Business rule rejected request");
                (StatusCode::OK, Json(SoftErrorBody { error })).into_response()
            }
            Self::Hard(err) => err.into_response(),
        }
    }
}

/// Fallback handler for unmatched routes.
pub async fn not_found() -> HttpError {
    HttpError::NotFound(NOT_FOUND.to_string())
}

/// Response for a handler that panicked.
pub fn handle_panic(panic: Box<dyn Any + Send + 'static>) -> Response {
    let detail = panic
        .downcast_ref::<String>()
        .map(String::as_str)
        .or_else(|| panic.downcast_ref::<&str>().copied())
        .unwrap_or("unknown panic");

    HttpError::Internal(format!("handler panicked: {detail}")).into_response()
}
