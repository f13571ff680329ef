//! Role-gated registration of security staff and visitors.

use std::fmt;
use std::sync::Arc;

use tracing::{info, warn};

use gatepass_auth::password::PasswordHasher;
use gatepass_auth::rbac::{RbacEnforcer, RegistrationTarget};
use gatepass_core::error::{AppError, ErrorKind};
use gatepass_database::Stores;
use gatepass_entity::account::{NewSecurity, NewVisitor};

use crate::context::RequestContext;

/// Data for registering a security or visitor account.
///
/// Which fields matter depends on the actor: admins register security
/// staff (username and password required), security staff register
/// visitors (vehicle and identity numbers used, username ignored).
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
pub struct RegisterAccountRequest {
    /// Desired username.
    pub username: Option<String>,
    /// Plaintext password.
    pub password: Option<String>,
    /// Display name.
    pub name: String,
    /// Contact email.
    pub email: String,
    /// Contact phone number.
    pub phone_number: String,
    /// Vehicle registration number.
    pub vehicle_number: Option<String>,
    /// Identity card number.
    pub ic_number: Option<String>,
}

/// Result of a registration attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegistrationOutcome {
    /// An admin created a security account.
    SecurityRegistered,
    /// A security account created a visitor.
    VisitorRegistered,
    /// The requested username belongs to an admin or security account.
    UsernameInUse,
    /// The actor's role has no registration capability.
    NotPermitted,
}

impl fmt::Display for RegistrationOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SecurityRegistered => f.write_str("Security registered successfully"),
            Self::VisitorRegistered => f.write_str("Visitor registered successfully"),
            Self::UsernameInUse => {
                f.write_str("Username already in use, please enter another username")
            }
            Self::NotPermitted => f.write_str("Visitor accounts cannot register other accounts"),
        }
    }
}

/// Creates accounts on behalf of an authenticated actor.
#[derive(Debug, Clone)]
pub struct RegistrationService {
    /// Data-access handle.
    stores: Stores,
    /// Password hasher.
    hasher: Arc<PasswordHasher>,
    /// Capability table.
    enforcer: Arc<RbacEnforcer>,
}

impl RegistrationService {
    /// Creates a new registration service.
    pub fn new(stores: Stores, hasher: Arc<PasswordHasher>, enforcer: Arc<RbacEnforcer>) -> Self {
        Self {
            stores,
            hasher,
            enforcer,
        }
    }

    /// Registers the account kind the actor's role is allowed to create.
    pub async fn register(
        &self,
        ctx: &RequestContext,
        req: RegisterAccountRequest,
    ) -> Result<RegistrationOutcome, AppError> {
        if let Some(username) = req.username.as_deref() {
            if self.username_taken(username).await? {
                info!(
                    actor = %ctx.username,
                    username = %username,
                    "Registration rejected: username in use"
                );
                return Ok(RegistrationOutcome::UsernameInUse);
            }
        }

        match self.enforcer.registration_target(ctx.role) {
            Some(RegistrationTarget::Security) => self.register_security(ctx, req).await,
            Some(RegistrationTarget::Visitor) => self.register_visitor(ctx, req).await,
            None => {
                info!(actor = %ctx.username, role = %ctx.role, "Registration not permitted");
                Ok(RegistrationOutcome::NotPermitted)
            }
        }
    }

    async fn register_security(
        &self,
        ctx: &RequestContext,
        req: RegisterAccountRequest,
    ) -> Result<RegistrationOutcome, AppError> {
        let username = req
            .username
            .filter(|u| !u.is_empty())
            .ok_or_else(|| AppError::validation("username is required"))?;
        let password = req
            .password
            .filter(|p| !p.is_empty())
            .ok_or_else(|| AppError::validation("password is required"))?;

        let password_hash = self.hasher.hash_password(&password)?;
        let new_security = NewSecurity {
            username,
            password_hash,
            name: req.name,
            email: req.email,
            phone_number: req.phone_number,
        };

        match self.stores.securities.create(&new_security).await {
            Ok(security) => {
                info!(
                    actor = %ctx.username,
                    username = %security.username,
                    security_id = %security.id,
                    "Security registered"
                );
                Ok(RegistrationOutcome::SecurityRegistered)
            }
            Err(e) if e.kind == ErrorKind::Conflict => Ok(RegistrationOutcome::UsernameInUse),
            Err(e) => Err(e),
        }
    }

    async fn register_visitor(
        &self,
        ctx: &RequestContext,
        req: RegisterAccountRequest,
    ) -> Result<RegistrationOutcome, AppError> {
        let new_visitor = NewVisitor {
            name: req.name,
            email: req.email,
            vehicle_number: req.vehicle_number.unwrap_or_default(),
            ic_number: req.ic_number.unwrap_or_default(),
            phone_number: req.phone_number,
            security: Some(ctx.username.clone()),
        };

        let visitor = self.stores.visitors.create(&new_visitor).await?;

        let linked = self
            .stores
            .securities
            .append_visitor(&ctx.username, &visitor.name)
            .await?;
        if !linked {
            warn!(
                actor = %ctx.username,
                visitor = %visitor.name,
                "Registering security account not found; visitor left unlinked"
            );
        }

        info!(
            actor = %ctx.username,
            visitor = %visitor.name,
            visitor_id = %visitor.id,
            "Visitor registered"
        );
        Ok(RegistrationOutcome::VisitorRegistered)
    }

    async fn username_taken(&self, username: &str) -> Result<bool, AppError> {
        if self.stores.admins.find_by_username(username).await?.is_some() {
            return Ok(true);
        }
        Ok(self
            .stores
            .securities
            .find_by_username(username)
            .await?
            .is_some())
    }
}
