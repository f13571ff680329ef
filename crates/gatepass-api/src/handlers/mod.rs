//! HTTP request handlers, grouped by component.

pub mod account;
pub mod auth;
pub mod directory;
pub mod health;
pub mod record;
