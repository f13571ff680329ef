//! Capability enforcement and dispatch helpers.

use gatepass_core::error::AppError;
use gatepass_entity::account::Role;

use super::policies::{Capability, RbacPolicies};

/// The account kind an actor creates when it calls the registration endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegistrationTarget {
    /// Admins register security staff.
    Security,
    /// Security staff register visitors.
    Visitor,
}

/// The slice of the directory an actor may read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReadScope {
    /// Everything: admins, securities and records.
    Directory,
    /// The actor's own security document and its visitors, plus records.
    AssignedVisitors,
}

/// Enforces the role capability table.
#[derive(Debug, Clone, Default)]
pub struct RbacEnforcer {
    /// The policy configuration.
    policies: RbacPolicies,
}

impl RbacEnforcer {
    /// Creates a new enforcer with the default policy set.
    pub fn new() -> Self {
        Self {
            policies: RbacPolicies::new(),
        }
    }

    /// Returns `Ok(())` if allowed, or a `Forbidden` error if denied.
    pub fn require_capability(&self, role: Role, capability: Capability) -> Result<(), AppError> {
        if self.policies.has_capability(role, capability) {
            Ok(())
        } else {
            Err(AppError::forbidden(format!(
                "Role '{role}' does not have capability '{capability:?}'"
            )))
        }
    }

    /// Checks whether the role has the capability.
    pub fn has_capability(&self, role: Role, capability: Capability) -> bool {
        self.policies.has_capability(role, capability)
    }

    /// Which account kind the role registers, if any.
    pub fn registration_target(&self, role: Role) -> Option<RegistrationTarget> {
        if self.has_capability(role, Capability::RegisterSecurity) {
            Some(RegistrationTarget::Security)
        } else if self.has_capability(role, Capability::RegisterVisitor) {
            Some(RegistrationTarget::Visitor)
        } else {
            None
        }
    }

    /// Which part of the directory the role reads, if any.
    pub fn read_scope(&self, role: Role) -> Option<ReadScope> {
        if self.has_capability(role, Capability::ReadDirectory) {
            Some(ReadScope::Directory)
        } else if self.has_capability(role, Capability::ReadAssignedVisitors) {
            Some(ReadScope::AssignedVisitors)
        } else {
            None
        }
    }
}
