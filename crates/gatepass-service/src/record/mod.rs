//! Visitor pass issuance and record listing.

pub mod service;

pub use service::{IssuePassRequest, PassIssued, RecordService};
