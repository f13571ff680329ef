//! Role-based capability enforcement.

pub mod enforcer;
pub mod policies;

pub use enforcer::{RbacEnforcer, ReadScope, RegistrationTarget};
pub use policies::{Capability, RbacPolicies};
