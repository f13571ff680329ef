//! Account registration handler.

use axum::extract::State;

use crate::dto::request::RegisterAccountBody;
use crate::error::ApiError;
use crate::extractors::{AuthUser, ValidatedJson};
use crate::state::AppState;

/// POST /registerSecurity
///
/// Admins create security accounts; security staff create visitors.
pub async fn register(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(body): ValidatedJson<RegisterAccountBody>,
) -> Result<String, ApiError> {
    let outcome = state
        .registration_service
        .register(auth.context(), body.into())
        .await?;
    Ok(outcome.to_string())
}
