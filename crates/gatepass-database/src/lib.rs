//! # gatepass-database
//!
//! PostgreSQL connection management, the store traits the service layer
//! depends on, their PostgreSQL repositories, and an in-memory store used
//! by tests and local runs.

pub mod connection;
pub mod memory;
pub mod migration;
pub mod repositories;
pub mod store;

pub use connection::DatabasePool;
pub use memory::MemoryStore;
pub use store::{AdminStore, RecordStore, SecurityStore, Stores, VisitorStore};
