//! Admin registration and login handlers.

use axum::extract::State;

use crate::dto::request::{LoginRequest, RegisterAdminBody};
use crate::error::ApiError;
use crate::extractors::ValidatedJson;
use crate::state::AppState;

/// POST /registerAdmin
pub async fn register_admin(
    State(state): State<AppState>,
    ValidatedJson(body): ValidatedJson<RegisterAdminBody>,
) -> Result<String, ApiError> {
    let outcome = state.auth_service.register_admin(body.into()).await?;
    Ok(outcome.to_string())
}

/// POST /loginAdmin and POST /loginSecurity
///
/// Both endpoints search the admin table first, then the security table.
pub async fn login(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<LoginRequest>,
) -> Result<String, ApiError> {
    let outcome = state
        .auth_service
        .login(&req.username, &req.password)
        .await?;
    Ok(outcome.to_string())
}
