//! PostgreSQL repository implementations of the store traits.

pub mod admin;
pub mod record;
pub mod security;
pub mod visitor;

pub use admin::AdminRepository;
pub use record::RecordRepository;
pub use security::SecurityRepository;
pub use visitor::VisitorRepository;
