//! Account entity models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use super::role::Role;

/// An administrator account.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Admin {
    /// Unique row identifier.
    pub id: Uuid,
    /// Unique login name.
    pub username: String,
    /// Argon2 password hash.
    #[serde(skip_serializing, default)]
    pub password_hash: String,
    /// Display name.
    pub name: String,
    /// Contact email.
    pub email: String,
    /// Contact phone number.
    pub phone_number: String,
    /// Always [`Role::Admin`].
    pub role: Role,
    /// When the account was created.
    pub created_at: DateTime<Utc>,
}

/// A security staff account.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Security {
    /// Unique row identifier.
    pub id: Uuid,
    /// Unique login name.
    pub username: String,
    /// Argon2 password hash.
    #[serde(skip_serializing, default)]
    pub password_hash: String,
    /// Display name.
    pub name: String,
    /// Contact email.
    pub email: String,
    /// Contact phone number.
    pub phone_number: String,
    /// Always [`Role::Security`].
    pub role: Role,
    /// Names of the visitors this security registered.
    pub visitors: Vec<String>,
    /// When the account was created.
    pub created_at: DateTime<Utc>,
}

/// A registered visitor.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Visitor {
    /// Unique row identifier.
    pub id: Uuid,
    /// Visitor name; deletion matches on it exactly.
    pub name: String,
    /// Contact email.
    pub email: String,
    /// Vehicle registration number.
    pub vehicle_number: String,
    /// Identity card number.
    pub ic_number: String,
    /// Contact phone number.
    pub phone_number: String,
    /// Always [`Role::Visitor`].
    pub role: Role,
    /// Username of the security that registered this visitor.
    #[serde(rename = "Security")]
    pub security: Option<String>,
    /// Identifiers of this visitor's records.
    pub records: Vec<String>,
    /// When the visitor was registered.
    pub created_at: DateTime<Utc>,
}

/// A login-capable account, as found by the username lookup.
#[derive(Debug, Clone)]
pub enum Account {
    /// Found in the admin table.
    Admin(Admin),
    /// Found in the security table.
    Security(Security),
}

impl Account {
    /// The account's login name.
    pub fn username(&self) -> &str {
        match self {
            Self::Admin(a) => &a.username,
            Self::Security(s) => &s.username,
        }
    }

    /// The account's display name.
    pub fn name(&self) -> &str {
        match self {
            Self::Admin(a) => &a.name,
            Self::Security(s) => &s.name,
        }
    }

    /// The stored password hash.
    pub fn password_hash(&self) -> &str {
        match self {
            Self::Admin(a) => &a.password_hash,
            Self::Security(s) => &s.password_hash,
        }
    }

    /// The stored role.
    pub fn role(&self) -> Role {
        match self {
            Self::Admin(a) => a.role,
            Self::Security(s) => s.role,
        }
    }

    /// The account's email.
    pub fn email(&self) -> &str {
        match self {
            Self::Admin(a) => &a.email,
            Self::Security(s) => &s.email,
        }
    }

    /// The account's phone number.
    pub fn phone_number(&self) -> &str {
        match self {
            Self::Admin(a) => &a.phone_number,
            Self::Security(s) => &s.phone_number,
        }
    }

    /// Visitor names listed on the account (always empty for admins).
    pub fn visitors(&self) -> &[String] {
        match self {
            Self::Admin(_) => &[],
            Self::Security(s) => &s.visitors,
        }
    }
}

/// Data required to create an admin.
#[derive(Debug, Clone)]
pub struct NewAdmin {
    /// Desired username.
    pub username: String,
    /// Pre-hashed password.
    pub password_hash: String,
    /// Display name.
    pub name: String,
    /// Contact email.
    pub email: String,
    /// Contact phone number.
    pub phone_number: String,
}

/// Data required to create a security account.
#[derive(Debug, Clone)]
pub struct NewSecurity {
    /// Desired username.
    pub username: String,
    /// Pre-hashed password.
    pub password_hash: String,
    /// Display name.
    pub name: String,
    /// Contact email.
    pub email: String,
    /// Contact phone number.
    pub phone_number: String,
}

/// Data required to register a visitor.
#[derive(Debug, Clone)]
pub struct NewVisitor {
    /// Visitor name.
    pub name: String,
    /// Contact email.
    pub email: String,
    /// Vehicle registration number.
    pub vehicle_number: String,
    /// Identity card number.
    pub ic_number: String,
    /// Contact phone number.
    pub phone_number: String,
    /// Registering security's username.
    pub security: Option<String>,
}
