//! Access log middleware.
//!
//! One event per request. Server faults log at `error`, rejected
//! credentials at `warn`, everything else at `info`. The Authorization
//! header is never logged.

use std::time::Instant;

use axum::extract::Request;
use axum::http::StatusCode;
use axum::middleware::Next;
use axum::response::Response;
use tracing::{error, info, warn};

/// Emits an access log line once the inner service has answered.
pub async fn request_logging(request: Request, next: Next) -> Response {
    let method = request.method().to_string();
    let path = request.uri().path().to_owned();
    let authenticated = request
        .headers()
        .contains_key(axum::http::header::AUTHORIZATION);
    let started = Instant::now();

    let response = next.run(request).await;

    let status = response.status();
    let elapsed_ms = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX);

    if status.is_server_error() {
        error!(%method, %path, status = status.as_u16(), elapsed_ms, authenticated, "Request failed");
    } else if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
        warn!(%method, %path, status = status.as_u16(), elapsed_ms, authenticated, "Request rejected");
    } else {
        info!(%method, %path, status = status.as_u16(), elapsed_ms, authenticated, "Request handled");
    }

    response
}
