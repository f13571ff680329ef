//! Admin bootstrap registration and credential login.

pub mod service;

pub use service::{AuthService, LoginOutcome, RegisterAdminOutcome, RegisterAdminRequest};
