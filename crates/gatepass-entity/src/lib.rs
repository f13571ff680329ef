//! # gatepass-entity
//!
//! Domain entity models for Gatepass. Account entities map to database
//! rows and derive `sqlx::FromRow`; records are exposed as a closed enum
//! over the two document shapes stored in the records table.
//!
//! Documents serialize with camelCase keys and never include password hashes.

pub mod account;
pub mod record;
