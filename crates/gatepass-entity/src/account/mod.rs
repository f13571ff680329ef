//! Account domain entities.

pub mod model;
pub mod role;

pub use model::{Account, Admin, NewAdmin, NewSecurity, NewVisitor, Security, Visitor};
pub use role::Role;
