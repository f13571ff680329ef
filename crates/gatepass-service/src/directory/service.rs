//! Role-scoped directory reads and visitor deletion.

use std::fmt;
use std::sync::Arc;

use serde::Serialize;
use tracing::info;

use gatepass_auth::rbac::{Capability, RbacEnforcer, ReadScope};
use gatepass_core::error::AppError;
use gatepass_database::Stores;
use gatepass_entity::account::{Admin, Security, Visitor};
use gatepass_entity::record::Record;

use crate::context::RequestContext;

/// Everything an admin can see.
#[derive(Debug, Clone, Serialize)]
pub struct AdminView {
    /// The first admin account, if any.
    #[serde(rename = "Admins")]
    pub admins: Option<Admin>,
    /// Every security account.
    #[serde(rename = "Securitys")]
    pub securitys: Vec<Security>,
    /// Every record.
    #[serde(rename = "Records")]
    pub records: Vec<Record>,
}

/// What a security account can see.
#[derive(Debug, Clone, Serialize)]
pub struct SecurityView {
    /// The actor's own security document.
    #[serde(rename = "Security")]
    pub security: Security,
    /// Visitors the actor registered.
    #[serde(rename = "Visitors")]
    pub visitors: Vec<Visitor>,
    /// Every record.
    #[serde(rename = "Records")]
    pub records: Vec<Record>,
}

/// Result of a directory read.
#[derive(Debug, Clone)]
pub enum ReadOutcome {
    /// Admin-scoped data.
    Directory(AdminView),
    /// Security-scoped data.
    Assigned(SecurityView),
    /// The actor's security document no longer exists.
    UserNotFound,
    /// The actor's role has no read capability.
    NotPermitted,
}

impl ReadOutcome {
    /// Text shown when the outcome carries no data.
    pub fn message(&self) -> Option<&'static str> {
        match self {
            Self::Directory(_) | Self::Assigned(_) => None,
            Self::UserNotFound => Some("User not found"),
            Self::NotPermitted => Some("Visitor accounts cannot read directory data"),
        }
    }
}

/// Result of a visitor deletion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    /// One visitor was deleted and its name pulled from security lists.
    Deleted {
        /// Number of security accounts whose visitor list changed.
        unlinked_from: u64,
    },
    /// No visitor has the actor's name.
    UserNotFound,
}

impl fmt::Display for DeleteOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Deleted { .. } => {
                f.write_str("Delete Successful\nBut the records are still in the database")
            }
            Self::UserNotFound => f.write_str("User not found"),
        }
    }
}

/// Reads directory data and deletes visitors.
#[derive(Debug, Clone)]
pub struct DirectoryService {
    /// Data-access handle.
    stores: Stores,
    /// Capability table.
    enforcer: Arc<RbacEnforcer>,
}

impl DirectoryService {
    /// Creates a new directory service.
    pub fn new(stores: Stores, enforcer: Arc<RbacEnforcer>) -> Self {
        Self { stores, enforcer }
    }

    /// Returns the data the actor's role may read.
    pub async fn read(&self, ctx: &RequestContext) -> Result<ReadOutcome, AppError> {
        match self.enforcer.read_scope(ctx.role) {
            Some(ReadScope::Directory) => {
                let admins = self.stores.admins.find_first().await?;
                let securitys = self.stores.securities.list_all().await?;
                let records = self.stores.records.list_all().await?;
                Ok(ReadOutcome::Directory(AdminView {
                    admins,
                    securitys,
                    records,
                }))
            }
            Some(ReadScope::AssignedVisitors) => {
                let Some(security) = self
                    .stores
                    .securities
                    .find_by_username(&ctx.username)
                    .await?
                else {
                    return Ok(ReadOutcome::UserNotFound);
                };
                let visitors = self.stores.visitors.list_by_security(&ctx.username).await?;
                let records = self.stores.records.list_all().await?;
                Ok(ReadOutcome::Assigned(SecurityView {
                    security,
                    visitors,
                    records,
                }))
            }
            None => Ok(ReadOutcome::NotPermitted),
        }
    }

    /// Deletes one visitor named after the actor and unlinks the name from
    /// every security account. Records are kept.
    pub async fn delete_visitor(&self, ctx: &RequestContext) -> Result<DeleteOutcome, AppError> {
        self.enforcer
            .require_capability(ctx.role, Capability::DeleteVisitor)?;

        if !self.stores.visitors.delete_one_by_name(&ctx.name).await? {
            info!(actor = %ctx.username, visitor = %ctx.name, "No visitor to delete");
            return Ok(DeleteOutcome::UserNotFound);
        }

        let unlinked_from = self.stores.securities.pull_visitor(&ctx.name).await?;
        info!(
            actor = %ctx.username,
            visitor = %ctx.name,
            unlinked_from,
            "Visitor deleted"
        );

        Ok(DeleteOutcome::Deleted { unlinked_from })
    }
}

#[cfg(test)]
mod tests {
    use gatepass_entity::account::{NewVisitor, Role};

    use super::*;
    use crate::account::RegisterAccountRequest;
    use crate::record::IssuePassRequest;
    use crate::test_support::{TestServices, actor, admin_request};

    async fn register_visitor(t: &TestServices, security: &str, name: &str) {
        let guard = actor(security, &format!("Guard {security}"), Role::Security);
        t.registration
            .register(
                &guard,
                RegisterAccountRequest {
                    name: name.to_string(),
                    ..RegisterAccountRequest::default()
                },
            )
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_admin_read_includes_issued_records() {
        let t = TestServices::new();
        t.auth.register_admin(admin_request("a1", "p1")).await.unwrap();
        t.seed_security("s1").await;
        let guard = actor("s1", "Guard s1", Role::Security);
        t.records
            .issue_visitor_pass(
                &guard,
                IssuePassRequest {
                    name: Some("Vera".to_string()),
                    record_id: "R-1".to_string(),
                    ..IssuePassRequest::default()
                },
            )
            .await
            .unwrap();

        let outcome = t.directory.read(&actor("a1", "Admin a1", Role::Admin)).await.unwrap();
        let ReadOutcome::Directory(view) = outcome else {
            panic!("expected admin view");
        };
        assert_eq!(view.admins.map(|a| a.username), Some("a1".to_string()));
        assert_eq!(view.securitys.len(), 1);
        assert_eq!(view.records.len(), 2);
    }

    #[tokio::test]
    async fn test_admin_view_json_keys() {
        let t = TestServices::new();
        let ReadOutcome::Directory(view) =
            t.directory.read(&actor("a1", "A", Role::Admin)).await.unwrap()
        else {
            panic!("expected admin view");
        };

        let json = serde_json::to_value(&view).unwrap();
        assert!(json["Admins"].is_null());
        assert!(json["Securitys"].as_array().unwrap().is_empty());
        assert!(json["Records"].as_array().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_security_read_scoped_to_own_visitors() {
        let t = TestServices::new();
        t.seed_security("s1").await;
        t.seed_security("s2").await;
        register_visitor(&t, "s1", "Vera").await;
        register_visitor(&t, "s2", "Victor").await;

        let outcome = t
            .directory
            .read(&actor("s1", "Guard s1", Role::Security))
            .await
            .unwrap();
        let ReadOutcome::Assigned(view) = outcome else {
            panic!("expected security view");
        };
        assert_eq!(view.security.username, "s1");
        assert_eq!(view.visitors.len(), 1);
        assert_eq!(view.visitors[0].name, "Vera");
    }

    #[tokio::test]
    async fn test_security_read_without_document() {
        let t = TestServices::new();
        let outcome = t
            .directory
            .read(&actor("ghost", "Ghost", Role::Security))
            .await
            .unwrap();
        assert_eq!(outcome.message(), Some("User not found"));
    }

    #[tokio::test]
    async fn test_visitor_read_not_permitted() {
        let t = TestServices::new();
        let outcome = t
            .directory
            .read(&actor("", "Vera", Role::Visitor))
            .await
            .unwrap();
        assert!(matches!(outcome, ReadOutcome::NotPermitted));
    }

    #[tokio::test]
    async fn test_delete_removes_one_visitor_and_unlinks_name() {
        let t = TestServices::new();
        t.seed_security("s1").await;
        t.seed_security("s2").await;
        register_visitor(&t, "s1", "Vera").await;
        register_visitor(&t, "s2", "Vera").await;
        t.records
            .issue_visitor_pass(
                &actor("", "Vera", Role::Visitor),
                IssuePassRequest::default(),
            )
            .await
            .unwrap();

        let outcome = t
            .directory
            .delete_visitor(&actor("", "Vera", Role::Visitor))
            .await
            .unwrap();
        assert_eq!(outcome, DeleteOutcome::Deleted { unlinked_from: 2 });
        assert_eq!(
            outcome.to_string(),
            "Delete Successful\nBut the records are still in the database"
        );

        let remaining = t.stores.visitors.list_by_security("s1").await.unwrap().len()
            + t.stores.visitors.list_by_security("s2").await.unwrap().len();
        assert_eq!(remaining, 1);
        for username in ["s1", "s2"] {
            let security = t
                .stores
                .securities
                .find_by_username(username)
                .await
                .unwrap()
                .unwrap();
            assert!(security.visitors.is_empty());
        }
        assert_eq!(t.records.list_records().await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_delete_unknown_visitor() {
        let t = TestServices::new();
        t.stores
            .visitors
            .create(&NewVisitor {
                name: "Vera".to_string(),
                email: String::new(),
                vehicle_number: String::new(),
                ic_number: String::new(),
                phone_number: String::new(),
                security: None,
            })
            .await
            .unwrap();

        let outcome = t
            .directory
            .delete_visitor(&actor("s1", "Sam", Role::Security))
            .await
            .unwrap();
        assert_eq!(outcome.to_string(), "User not found");
    }
}
