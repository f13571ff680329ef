//! Role-scoped reads and visitor deletion.

pub mod service;

pub use service::{AdminView, DeleteOutcome, DirectoryService, ReadOutcome, SecurityView};
