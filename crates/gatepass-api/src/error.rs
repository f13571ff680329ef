//! Maps `AppError` to plain-text HTTP responses.
//!
//! `AppError` lives in `gatepass-core`, so handlers return [`ApiError`],
//! which wraps it and carries the `IntoResponse` impl.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use gatepass_core::error::{AppError, ErrorKind};

/// Body sent for every server-side fault; the cause is only logged.
pub const INTERNAL_SERVER_ERROR: &str = "Internal Server Error";

/// HTTP status for an error kind.
pub fn status_for(kind: ErrorKind) -> StatusCode {
    match kind {
        ErrorKind::Validation => StatusCode::BAD_REQUEST,
        ErrorKind::Unauthorized => StatusCode::UNAUTHORIZED,
        ErrorKind::Forbidden => StatusCode::FORBIDDEN,
        ErrorKind::Conflict => StatusCode::CONFLICT,
        ErrorKind::PartialFailure
        | ErrorKind::Database
        | ErrorKind::Serialization
        | ErrorKind::Configuration
        | ErrorKind::Internal => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// Handler-facing error: an `AppError` that renders as a response.
#[derive(Debug)]
pub struct ApiError(pub AppError);

impl From<AppError> for ApiError {
    fn from(err: AppError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let Self(err) = self;
        let status = status_for(err.kind);

        if err.is_server_fault() {
            match std::error::Error::source(&err) {
                Some(cause) => tracing::error!(
                    kind = %err.kind,
                    error = %err.message,
                    cause = %cause,
                    "Request failed"
                ),
                None => tracing::error!(kind = %err.kind, error = %err.message, "Request failed"),
            }
            return (status, INTERNAL_SERVER_ERROR).into_response();
        }

        (status, err.message).into_response()
    }
}
