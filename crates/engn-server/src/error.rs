//! HTTP error types for the ENGN-F1 server.
//!
//! Maps domain errors from `engn-core` into HTTP responses. Validation
//! failures carry their field-level issues to the client; everything else
//! becomes a generic message and the cause goes to the log only.

use std::any::Any;

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use tracing::error;

use engn_core::error::StoreError;
use engn_core::schema::{Issue, IssueCode, ValidationFailure};

/// Application-level error returned from HTTP handlers.
#[derive(Debug)]
pub enum AppError {
    /// The request body broke one or more schema rules.
    Validation(Vec<Issue>),
    /// The request body exceeded the configured limit.
    PayloadTooLarge,
    /// Something failed on our side; the string is the public message.
    Internal(&'static str),
}

impl AppError {
    /// Log `cause` and return a generic 500 carrying `public_message`.
    pub fn internal(public_message: &'static str, cause: &dyn std::fmt::Display) -> Self {
        error!(error = %cause, "{public_message}");
        Self::Internal(public_message)
    }
}

/// JSON error body. `details` appears only for validation failures.
#[derive(Serialize)]
struct ErrorBody {
    error: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<Vec<Issue>>,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error, details) = match self {
            Self::Validation(issues) => {
                (StatusCode::BAD_REQUEST, "Validation failed", Some(issues))
            }
            Self::PayloadTooLarge => (StatusCode::PAYLOAD_TOO_LARGE, "Payload too large", None),
            Self::Internal(message) => (StatusCode::INTERNAL_SERVER_ERROR, message, None),
        };

        (status, axum::Json(ErrorBody { error, details })).into_response()
    }
}

impl From<ValidationFailure> for AppError {
    fn from(failure: ValidationFailure) -> Self {
        Self::Validation(failure.issues)
    }
}

impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        Self::internal("Internal server error", &err)
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
            return Self::PayloadTooLarge;
        }
        Self::Validation(vec![Issue::root(
            IssueCode::InvalidType,
            rejection.body_text(),
        )])
    }
}

/// Final error layer: turns a handler panic into a 500 so one bad request
/// never takes the process down.
pub fn panic_response(panic: Box<dyn Any + Send + 'static>) -> Response {
    let detail = panic
        .downcast_ref::<String>()
        .map(String::as_str)
        .or_else(|| panic.downcast_ref::<&str>().copied())
        .unwrap_or("unknown panic payload");
    error!(panic = detail, "request handler panicked");

    (
        StatusCode::INTERNAL_SERVER_ERROR,
        axum::Json(serde_json::json!({ "message": "Internal Server Error" })),
    )
        .into_response()
}
