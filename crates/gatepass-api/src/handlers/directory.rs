//! Directory read and visitor deletion handlers.

use axum::Json;
use axum::extract::State;
use axum::response::{IntoResponse, Response};

use gatepass_service::ReadOutcome;

use crate::error::ApiError;
use crate::extractors::AuthUser;
use crate::state::AppState;

/// GET /readAdmin and GET /readSecurity
///
/// The body depends on the caller's role, not on the path.
pub async fn read(State(state): State<AppState>, auth: AuthUser) -> Result<Response, ApiError> {
    let outcome = state.directory_service.read(auth.context()).await?;

    let response = match outcome {
        ReadOutcome::Directory(view) => Json(view).into_response(),
        ReadOutcome::Assigned(view) => Json(view).into_response(),
        other => other.message().unwrap_or_default().into_response(),
    };
    Ok(response)
}

/// DELETE /deleteVisitor
pub async fn delete_visitor(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<String, ApiError> {
    let outcome = state.directory_service.delete_visitor(auth.context()).await?;
    Ok(outcome.to_string())
}
