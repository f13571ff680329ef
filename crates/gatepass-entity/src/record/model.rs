//! Record entity models.
//!
//! The records table holds two document shapes: the standing pass record
//! written when a pass is issued, and the check-in event written right
//! after it. Both are immutable once stored.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::account::Role;

/// The visitor's standing record created at pass issuance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PassRecord {
    /// Unique row identifier.
    pub id: Uuid,
    /// Visitor name.
    pub name: String,
    /// Identity card number.
    pub ic_number: String,
    /// Physical pass identifier handed to the visitor.
    pub pass_identifier: String,
    /// Host's phone number.
    pub host_number: String,
    /// Host's username.
    pub host_username: String,
    /// Record identifier of the current check-in.
    pub current_check_in: String,
    /// Record identifiers associated with this pass.
    pub records: Vec<String>,
    /// Always [`Role::Visitor`].
    pub role: Role,
    /// When the document was stored.
    pub created_at: DateTime<Utc>,
}

/// A single check-in event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckInRecord {
    /// Unique row identifier.
    pub id: Uuid,
    /// Visitor name.
    pub name: String,
    /// Caller-supplied record identifier.
    #[serde(rename = "recordID")]
    pub record_id: String,
    /// Purpose of the visit.
    pub purpose: String,
    /// Server-assigned check-in time.
    pub check_in_time: DateTime<Utc>,
}

/// Any document stored in the records table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Record {
    /// A standing pass record.
    Pass(PassRecord),
    /// A check-in event.
    CheckIn(CheckInRecord),
}

impl Record {
    /// Visitor name on the document.
    pub fn name(&self) -> &str {
        match self {
            Self::Pass(p) => &p.name,
            Self::CheckIn(c) => &c.name,
        }
    }

    /// Short label for the document shape.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Pass(_) => "pass",
            Self::CheckIn(_) => "check_in",
        }
    }
}

/// Data required to store a pass record.
#[derive(Debug, Clone)]
pub struct NewPassRecord {
    /// Visitor name.
    pub name: String,
    /// Identity card number.
    pub ic_number: String,
    /// Physical pass identifier.
    pub pass_identifier: String,
    /// Host's phone number.
    pub host_number: String,
    /// Host's username.
    pub host_username: String,
    /// Record identifier of the check-in this pass opens.
    pub record_id: String,
}

/// Data required to store a check-in record.
#[derive(Debug, Clone)]
pub struct NewCheckInRecord {
    /// Visitor name.
    pub name: String,
    /// Caller-supplied record identifier.
    pub record_id: String,
    /// Purpose of the visit.
    pub purpose: String,
    /// Server-assigned check-in time.
    pub check_in_time: DateTime<Utc>,
}
