//! JWT token creation with configurable signing secret and TTL.

use chrono::{TimeDelta, Utc};
use jsonwebtoken::{EncodingKey, Header, encode};

use gatepass_core::config::AuthConfig;
use gatepass_core::error::AppError;
use gatepass_entity::account::Account;

use super::claims::Claims;

/// Creates signed HS256 login tokens.
#[derive(Clone)]
pub struct JwtEncoder {
    /// HMAC secret key for signing.
    encoding_key: EncodingKey,
    /// Lifetime of issued tokens.
    ttl: TimeDelta,
}

impl std::fmt::Debug for JwtEncoder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtEncoder")
            .field("ttl", &self.ttl)
            .finish()
    }
}

impl JwtEncoder {
    /// Creates a new encoder from auth configuration.
    pub fn new(config: &AuthConfig) -> Result<Self, AppError> {
        let ttl = i64::try_from(config.jwt_ttl_minutes)
            .ok()
            .and_then(TimeDelta::try_minutes)
            .ok_or_else(|| {
                AppError::configuration(format!(
                    "Invalid token lifetime: {} minutes",
                    config.jwt_ttl_minutes
                ))
            })?;

        Ok(Self {
            encoding_key: EncodingKey::from_secret(config.jwt_secret.as_bytes()),
            ttl,
        })
    }

    /// Issues a token for the account with the configured TTL.
    pub fn issue(&self, account: &Account) -> Result<String, AppError> {
        self.issue_with_ttl(account, self.ttl)
    }

    /// Issues a token for the account that expires after `ttl`.
    ///
    /// A negative `ttl` yields an already-expired token.
    pub fn issue_with_ttl(&self, account: &Account, ttl: TimeDelta) -> Result<String, AppError> {
        let now = Utc::now();
        let expires_at = now
            .checked_add_signed(ttl)
            .ok_or_else(|| AppError::internal("Token expiry is out of range"))?;
        let claims = Claims::for_account(account, now, expires_at);
        self.encode_claims(&claims)
    }

    /// Signs arbitrary claims.
    pub fn encode_claims(&self, claims: &Claims) -> Result<String, AppError> {
        encode(&Header::default(), claims, &self.encoding_key)
            .map_err(|e| AppError::internal(format!("Failed to encode token: {e}")))
    }
}
