//! Role-to-capability mapping definitions.

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};

use gatepass_entity::account::Role;

/// An operation an authenticated actor may be allowed to perform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Capability {
    /// Create security staff accounts.
    RegisterSecurity,
    /// Create visitor accounts bound to the registering security.
    RegisterVisitor,
    /// Read every admin, security and record document.
    ReadDirectory,
    /// Read the actor's own security document and the visitors it registered.
    ReadAssignedVisitors,
    /// Delete the visitor whose name matches the actor's name.
    DeleteVisitor,
    /// Store a pass record and its first check-in.
    IssuePass,
}

/// Defines the mapping from each role to its set of capabilities.
#[derive(Debug, Clone)]
pub struct RbacPolicies {
    /// Role → set of capabilities.
    policies: HashMap<Role, HashSet<Capability>>,
}

impl RbacPolicies {
    /// Creates the default policy set.
    pub fn new() -> Self {
        let mut policies = HashMap::new();

        policies.insert(
            Role::Admin,
            [
                Capability::RegisterSecurity,
                Capability::ReadDirectory,
                Capability::DeleteVisitor,
                Capability::IssuePass,
            ]
            .into_iter()
            .collect(),
        );

        policies.insert(
            Role::Security,
            [
                Capability::RegisterVisitor,
                Capability::ReadAssignedVisitors,
                Capability::DeleteVisitor,
                Capability::IssuePass,
            ]
            .into_iter()
            .collect(),
        );

        // Visitors can only remove themselves or record their own visit.
        policies.insert(
            Role::Visitor,
            [Capability::DeleteVisitor, Capability::IssuePass]
                .into_iter()
                .collect(),
        );

        Self { policies }
    }

    /// Returns the set of capabilities for the given role.
    pub fn capabilities_for_role(&self, role: Role) -> HashSet<Capability> {
        self.policies.get(&role).cloned().unwrap_or_default()
    }

    /// Checks whether the given role has the specified capability.
    pub fn has_capability(&self, role: Role, capability: Capability) -> bool {
        self.policies
            .get(&role)
            .map(|caps| caps.contains(&capability))
            .unwrap_or(false)
    }
}

impl Default for RbacPolicies {
    fn default() -> Self {
        Self::new()
    }
}
