//! # gatepass-auth
//!
//! Authentication and authorization building blocks for Gatepass.
//!
//! ## Modules
//!
//! - `jwt`: signed token creation and validation
//! - `password`: Argon2id password hashing
//! - `rbac`: role capability table and enforcement

pub mod jwt;
pub mod password;
pub mod rbac;

pub use jwt::{Claims, JwtDecoder, JwtEncoder};
pub use password::PasswordHasher;
pub use rbac::{Capability, RbacEnforcer, RbacPolicies, ReadScope, RegistrationTarget};
