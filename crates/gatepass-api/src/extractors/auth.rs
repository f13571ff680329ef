//! `AuthUser` extractor: pulls the bearer token from the Authorization
//! header, validates it, and injects the actor context.

use axum::extract::FromRequestParts;
use axum::http::header::AUTHORIZATION;
use axum::http::request::Parts;

use gatepass_auth::jwt::decoder::INVALID_TOKEN;
use gatepass_core::error::AppError;
use gatepass_service::context::RequestContext;

use crate::error::ApiError;
use crate::state::AppState;

/// Extracted authenticated actor available in handlers.
#[derive(Debug, Clone)]
pub struct AuthUser(pub RequestContext);

impl AuthUser {
    /// Returns the inner `RequestContext`.
    pub fn context(&self) -> &RequestContext {
        &self.0
    }
}

impl std::ops::Deref for AuthUser {
    type Target = RequestContext;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let header = parts
            .headers
            .get(AUTHORIZATION)
            .ok_or_else(|| AppError::unauthorized("Unauthorized"))?;

        // Scheme is not checked; the token is the second space-separated part.
        let token = header
            .to_str()
            .ok()
            .and_then(|value| value.split(' ').nth(1))
            .filter(|token| !token.is_empty())
            .ok_or_else(|| AppError::unauthorized(INVALID_TOKEN))?;

        let claims = state.jwt_decoder.decode(token)?;

        Ok(AuthUser(RequestContext::from(claims)))
    }
}
