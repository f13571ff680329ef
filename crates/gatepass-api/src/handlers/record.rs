//! Visitor pass handler.

use axum::extract::State;

use crate::dto::request::IssuePassBody;
use crate::error::ApiError;
use crate::extractors::{AuthUser, ValidatedJson};
use crate::state::AppState;

/// POST /issueVisitorPass
pub async fn issue_visitor_pass(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(body): ValidatedJson<IssuePassBody>,
) -> Result<String, ApiError> {
    let issued = state
        .record_service
        .issue_visitor_pass(auth.context(), body.into())
        .await?;
    Ok(issued.to_string())
}
