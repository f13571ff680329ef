//! JWT claims embedded in every login token.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use gatepass_entity::account::{Account, Role};

/// Token payload: the account document without its password hash, plus
/// issue and expiry timestamps.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Claims {
    /// Account row identifier.
    pub id: Uuid,
    /// Login name.
    pub username: String,
    /// Display name.
    pub name: String,
    /// Contact email.
    pub email: String,
    /// Contact phone number.
    pub phone_number: String,
    /// Role at the time of issuance.
    pub role: Role,
    /// Visitor names on the account (security accounts only).
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub visitors: Vec<String>,
    /// Issued-at timestamp (seconds since epoch).
    pub iat: i64,
    /// Expiration timestamp (seconds since epoch).
    pub exp: i64,
}

impl Claims {
    /// Build claims for an account, valid from `issued_at` until `expires_at`.
    pub fn for_account(
        account: &Account,
        issued_at: DateTime<Utc>,
        expires_at: DateTime<Utc>,
    ) -> Self {
        let id = match account {
            Account::Admin(a) => a.id,
            Account::Security(s) => s.id,
        };

        Self {
            id,
            username: account.username().to_string(),
            name: account.name().to_string(),
            email: account.email().to_string(),
            phone_number: account.phone_number().to_string(),
            role: account.role(),
            visitors: account.visitors().to_vec(),
            iat: issued_at.timestamp(),
            exp: expires_at.timestamp(),
        }
    }

    /// Checks whether this token has expired.
    pub fn is_expired(&self) -> bool {
        Utc::now().timestamp() >= self.exp
    }
}
