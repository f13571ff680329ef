//! Visitor pass issuance.
//!
//! Issuing a pass writes two documents: the standing pass record and the
//! check-in event. The writes are independent; if the second fails the
//! first stays in place and the failure is reported as a partial write.

use std::fmt;
use std::sync::Arc;

use chrono::{DateTime, SecondsFormat, Utc};
use tracing::{error, info};

use gatepass_auth::rbac::{Capability, RbacEnforcer};
use gatepass_core::error::{AppError, ErrorKind};
use gatepass_database::Stores;
use gatepass_entity::record::{NewCheckInRecord, NewPassRecord, Record};

use crate::context::RequestContext;

/// Data for issuing a visitor pass.
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
pub struct IssuePassRequest {
    /// Visitor name; the actor's name is used when absent.
    pub name: Option<String>,
    /// Identity card number.
    pub ic_number: String,
    /// Physical pass identifier.
    pub pass_identifier: String,
    /// Host's phone number.
    pub host_number: String,
    /// Host's username.
    pub host_username: String,
    /// Caller-supplied record identifier.
    pub record_id: String,
    /// Purpose of the visit.
    pub purpose: String,
}

/// Confirmation of an issued pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PassIssued {
    /// Visitor name written to both documents.
    pub name: String,
    /// Server-assigned check-in time.
    pub check_in_time: DateTime<Utc>,
    /// Caller-supplied record identifier.
    pub record_id: String,
}

impl fmt::Display for PassIssued {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Visitor {} has checked in at '{}' with recordID '{}'",
            self.name,
            self.check_in_time.to_rfc3339_opts(SecondsFormat::Millis, true),
            self.record_id
        )
    }
}

/// Stores pass and check-in records.
#[derive(Debug, Clone)]
pub struct RecordService {
    /// Data-access handle.
    stores: Stores,
    /// Capability table.
    enforcer: Arc<RbacEnforcer>,
}

impl RecordService {
    /// Creates a new record service.
    pub fn new(stores: Stores, enforcer: Arc<RbacEnforcer>) -> Self {
        Self { stores, enforcer }
    }

    /// Writes the pass record, then the check-in record.
    pub async fn issue_visitor_pass(
        &self,
        ctx: &RequestContext,
        req: IssuePassRequest,
    ) -> Result<PassIssued, AppError> {
        self.enforcer
            .require_capability(ctx.role, Capability::IssuePass)?;

        let name = req
            .name
            .filter(|n| !n.is_empty())
            .unwrap_or_else(|| ctx.name.clone());

        let pass = self
            .stores
            .records
            .insert_pass(&NewPassRecord {
                name: name.clone(),
                ic_number: req.ic_number,
                pass_identifier: req.pass_identifier,
                host_number: req.host_number,
                host_username: req.host_username,
                record_id: req.record_id.clone(),
            })
            .await?;

        let check_in_time = Utc::now();
        let check_in = NewCheckInRecord {
            name: name.clone(),
            record_id: req.record_id.clone(),
            purpose: req.purpose,
            check_in_time,
        };

        if let Err(e) = self.stores.records.insert_check_in(&check_in).await {
            error!(
                actor = %ctx.username,
                visitor = %name,
                record_id = %req.record_id,
                pass_record = %pass.id,
                error = %e,
                "Check-in insert failed after pass record was stored"
            );
            return Err(AppError::with_source(
                ErrorKind::PartialFailure,
                format!("Pass record {} stored but check-in insert failed", pass.id),
                e,
            ));
        }

        info!(
            actor = %ctx.username,
            visitor = %name,
            record_id = %req.record_id,
            "Visitor pass issued"
        );

        Ok(PassIssued {
            name,
            check_in_time,
            record_id: req.record_id,
        })
    }

    /// Lists every stored record in insertion order.
    pub async fn list_records(&self) -> Result<Vec<Record>, AppError> {
        self.stores.records.list_all().await
    }
}
