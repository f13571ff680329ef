//! Store traits consumed by the service layer.
//!
//! Each trait covers one collection. Services receive a [`Stores`] handle
//! at construction time instead of reaching for a global client, so the
//! same services run against PostgreSQL in production and against
//! [`MemoryStore`] in tests.

use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;
use sqlx::PgPool;

use gatepass_core::result::AppResult;
use gatepass_entity::account::{Admin, NewAdmin, NewSecurity, NewVisitor, Security, Visitor};
use gatepass_entity::record::{CheckInRecord, NewCheckInRecord, NewPassRecord, PassRecord, Record};

use crate::connection::DatabasePool;
use crate::memory::MemoryStore;
use crate::repositories::{
    AdminRepository, RecordRepository, SecurityRepository, VisitorRepository,
};

/// Admin collection.
#[async_trait]
pub trait AdminStore: Send + Sync + 'static {
    /// Find an admin by exact (case-sensitive) username.
    async fn find_by_username(&self, username: &str) -> AppResult<Option<Admin>>;

    /// Return the earliest-created admin, if any.
    async fn find_first(&self) -> AppResult<Option<Admin>>;

    /// Insert a new admin. A duplicate username is a `Conflict` error.
    async fn create(&self, data: &NewAdmin) -> AppResult<Admin>;
}

/// Security collection.
#[async_trait]
pub trait SecurityStore: Send + Sync + 'static {
    /// Find a security account by exact (case-sensitive) username.
    async fn find_by_username(&self, username: &str) -> AppResult<Option<Security>>;

    /// List every security account.
    async fn list_all(&self) -> AppResult<Vec<Security>>;

    /// Insert a new security account. A duplicate username is a `Conflict` error.
    async fn create(&self, data: &NewSecurity) -> AppResult<Security>;

    /// Append a visitor name to the account's `visitors` list.
    ///
    /// Returns `false` when no account has the given username.
    async fn append_visitor(&self, username: &str, visitor_name: &str) -> AppResult<bool>;

    /// Remove a visitor name from every account's `visitors` list.
    ///
    /// Returns the number of accounts modified.
    async fn pull_visitor(&self, visitor_name: &str) -> AppResult<u64>;
}

/// Visitor collection.
#[async_trait]
pub trait VisitorStore: Send + Sync + 'static {
    /// Insert a new visitor.
    async fn create(&self, data: &NewVisitor) -> AppResult<Visitor>;

    /// List visitors registered by the given security username.
    async fn list_by_security(&self, security_username: &str) -> AppResult<Vec<Visitor>>;

    /// Delete at most one visitor with the exact name.
    ///
    /// Returns `true` if a visitor was deleted.
    async fn delete_one_by_name(&self, name: &str) -> AppResult<bool>;
}

/// Records collection.
#[async_trait]
pub trait RecordStore: Send + Sync + 'static {
    /// Store a standing pass record.
    async fn insert_pass(&self, data: &NewPassRecord) -> AppResult<PassRecord>;

    /// Store a check-in event.
    async fn insert_check_in(&self, data: &NewCheckInRecord) -> AppResult<CheckInRecord>;

    /// List every record in insertion order.
    async fn list_all(&self) -> AppResult<Vec<Record>>;
}

/// Where the stores keep their data.
#[derive(Debug, Clone)]
enum Backend {
    Postgres(DatabasePool),
    Memory,
}

/// The data-access handle injected into every service.
#[derive(Clone)]
pub struct Stores {
    /// Admin collection.
    pub admins: Arc<dyn AdminStore>,
    /// Security collection.
    pub securities: Arc<dyn SecurityStore>,
    /// Visitor collection.
    pub visitors: Arc<dyn VisitorStore>,
    /// Records collection.
    pub records: Arc<dyn RecordStore>,
    backend: Backend,
}

impl fmt::Debug for Stores {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Stores")
            .field("backend", &self.backend_name())
            .finish()
    }
}

impl Stores {
    /// Build PostgreSQL-backed stores sharing one pool.
    pub fn postgres(pool: DatabasePool) -> Self {
        let pg: PgPool = pool.pool().clone();
        Self {
            admins: Arc::new(AdminRepository::new(pg.clone())),
            securities: Arc::new(SecurityRepository::new(pg.clone())),
            visitors: Arc::new(VisitorRepository::new(pg.clone())),
            records: Arc::new(RecordRepository::new(pg)),
            backend: Backend::Postgres(pool),
        }
    }

    /// Build stores over a single in-memory dataset.
    pub fn memory(store: MemoryStore) -> Self {
        Self {
            admins: Arc::new(store.clone()),
            securities: Arc::new(store.clone()),
            visitors: Arc::new(store.clone()),
            records: Arc::new(store),
            backend: Backend::Memory,
        }
    }

    /// Name of the backing store, for health output.
    pub fn backend_name(&self) -> &'static str {
        match self.backend {
            Backend::Postgres(_) => "postgres",
            Backend::Memory => "memory",
        }
    }

    /// Check that the backing store is reachable.
    pub async fn health_check(&self) -> AppResult<bool> {
        match &self.backend {
            Backend::Postgres(pool) => pool.health_check().await,
            Backend::Memory => Ok(true),
        }
    }
}
