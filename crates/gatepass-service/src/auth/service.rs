//! Admin registration and login.

use std::fmt;
use std::sync::Arc;

use tracing::{info, warn};

use gatepass_auth::jwt::JwtEncoder;
use gatepass_auth::password::PasswordHasher;
use gatepass_core::error::{AppError, ErrorKind};
use gatepass_database::Stores;
use gatepass_entity::account::{Account, Admin, NewAdmin};

/// Data for registering an admin.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct RegisterAdminRequest {
    /// Desired username.
    pub username: String,
    /// Plaintext password.
    pub password: String,
    /// Display name.
    pub name: String,
    /// Contact email.
    pub email: String,
    /// Contact phone number.
    pub phone_number: String,
}

/// Result of an admin registration attempt.
#[derive(Debug, Clone)]
pub enum RegisterAdminOutcome {
    /// The admin was stored.
    Registered(Admin),
    /// The username already belongs to an admin or security account.
    UsernameTaken,
}

impl fmt::Display for RegisterAdminOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Registered(_) => f.write_str("Admin registered"),
            Self::UsernameTaken => f.write_str("Username already registered"),
        }
    }
}

/// Result of a login attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginOutcome {
    /// Credentials matched; a token was issued.
    Token {
        /// Display name of the account.
        name: String,
        /// Signed token.
        token: String,
    },
    /// The account exists but the password does not match.
    WrongPassword,
    /// No admin or security account has the username.
    UserNotFound,
}

impl fmt::Display for LoginOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Token { name, token } => write!(f, "Token for {name}: {token}"),
            Self::WrongPassword => f.write_str("Wrong password"),
            Self::UserNotFound => f.write_str("User not found"),
        }
    }
}

/// Handles admin bootstrap registration and credential login.
#[derive(Debug, Clone)]
pub struct AuthService {
    /// Data-access handle.
    stores: Stores,
    /// Password hasher.
    hasher: Arc<PasswordHasher>,
    /// Token encoder.
    encoder: Arc<JwtEncoder>,
}

impl AuthService {
    /// Creates a new auth service.
    pub fn new(stores: Stores, hasher: Arc<PasswordHasher>, encoder: Arc<JwtEncoder>) -> Self {
        Self {
            stores,
            hasher,
            encoder,
        }
    }

    /// Registers an admin unless the username is already taken by an admin
    /// or security account.
    pub async fn register_admin(
        &self,
        req: RegisterAdminRequest,
    ) -> Result<RegisterAdminOutcome, AppError> {
        if self.username_taken(&req.username).await? {
            info!(username = %req.username, "Admin registration rejected: username taken");
            return Ok(RegisterAdminOutcome::UsernameTaken);
        }

        let password_hash = self.hasher.hash_password(&req.password)?;
        let new_admin = NewAdmin {
            username: req.username,
            password_hash,
            name: req.name,
            email: req.email,
            phone_number: req.phone_number,
        };

        match self.stores.admins.create(&new_admin).await {
            Ok(admin) => {
                info!(username = %admin.username, admin_id = %admin.id, "Admin registered");
                Ok(RegisterAdminOutcome::Registered(admin))
            }
            Err(e) if e.kind == ErrorKind::Conflict => {
                warn!(username = %new_admin.username, "Concurrent admin registration lost the race");
                Ok(RegisterAdminOutcome::UsernameTaken)
            }
            Err(e) => Err(e),
        }
    }

    /// Verifies credentials against the admin table, then the security table.
    pub async fn login(&self, username: &str, password: &str) -> Result<LoginOutcome, AppError> {
        let Some(account) = self.find_account(username).await? else {
            info!(username = %username, "Login failed: user not found");
            return Ok(LoginOutcome::UserNotFound);
        };

        if !self
            .hasher
            .verify_password(password, account.password_hash())?
        {
            info!(username = %username, "Login failed: wrong password");
            return Ok(LoginOutcome::WrongPassword);
        }

        let token = self.encoder.issue(&account)?;
        info!(username = %username, role = %account.role(), "User logged in");

        Ok(LoginOutcome::Token {
            name: account.name().to_string(),
            token,
        })
    }

    /// Looks the username up in the admin table, then the security table.
    pub async fn find_account(&self, username: &str) -> Result<Option<Account>, AppError> {
        if let Some(admin) = self.stores.admins.find_by_username(username).await? {
            return Ok(Some(Account::Admin(admin)));
        }
        Ok(self
            .stores
            .securities
            .find_by_username(username)
            .await?
            .map(Account::Security))
    }

    /// Whether an admin or security account already holds the username.
    pub async fn username_taken(&self, username: &str) -> Result<bool, AppError> {
        Ok(self.find_account(username).await?.is_some())
    }
}
