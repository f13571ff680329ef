//! Role-gated account registration.

pub mod registration;

pub use registration::{RegisterAccountRequest, RegistrationOutcome, RegistrationService};
