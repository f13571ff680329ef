//! Request context carrying the authenticated actor.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use gatepass_auth::jwt::Claims;
use gatepass_entity::account::Role;

/// The actor behind the current authenticated request.
///
/// Built from verified token claims by the API extractor and passed into
/// service methods so every operation knows *who* is acting.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RequestContext {
    /// Account row identifier from the token.
    pub account_id: Uuid,
    /// Login name from the token.
    pub username: String,
    /// Display name from the token.
    pub name: String,
    /// Contact phone number from the token.
    pub phone_number: String,
    /// Role at the time the token was issued.
    pub role: Role,
    /// When the request was received.
    pub request_time: DateTime<Utc>,
}

impl RequestContext {
    /// Creates a context for an actor.
    pub fn new(
        account_id: Uuid,
        username: impl Into<String>,
        name: impl Into<String>,
        phone_number: impl Into<String>,
        role: Role,
    ) -> Self {
        Self {
            account_id,
            username: username.into(),
            name: name.into(),
            phone_number: phone_number.into(),
            role,
            request_time: Utc::now(),
        }
    }
}

impl From<Claims> for RequestContext {
    fn from(claims: Claims) -> Self {
        Self::new(
            claims.id,
            claims.username,
            claims.name,
            claims.phone_number,
            claims.role,
        )
    }
}
