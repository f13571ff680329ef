//! # gatepass-service
//!
//! Business logic service layer for Gatepass. Each service orchestrates the
//! injected [`Stores`](gatepass_database::Stores) handle and the auth
//! primitives to implement one group of use cases.
//!
//! Domain outcomes (a taken username, a wrong password, a missing visitor)
//! are returned as outcome enums whose `Display` is the client-facing text.
//! Only infrastructure failures travel as [`AppError`](gatepass_core::AppError).

pub mod account;
pub mod auth;
pub mod context;
pub mod directory;
pub mod record;

#[cfg(test)]
pub(crate) mod test_support;

pub use account::{RegisterAccountRequest, RegistrationOutcome, RegistrationService};
pub use auth::{AuthService, LoginOutcome, RegisterAdminOutcome, RegisterAdminRequest};
pub use context::RequestContext;
pub use directory::{AdminView, DeleteOutcome, DirectoryService, ReadOutcome, SecurityView};
pub use record::{IssuePassRequest, PassIssued, RecordService};
