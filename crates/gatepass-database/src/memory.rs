//! In-memory store using a Tokio lock, for tests and single-process runs.
//!
//! One [`MemoryStore`] holds all four collections; clones share the same
//! data, which lets [`Stores::memory`](crate::Stores::memory) hand the same
//! dataset to every trait object.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use tracing::debug;
use uuid::Uuid;

use gatepass_core::error::AppError;
use gatepass_core::result::AppResult;
use gatepass_entity::account::{
    Admin, NewAdmin, NewSecurity, NewVisitor, Role, Security, Visitor,
};
use gatepass_entity::record::{
    CheckInRecord, NewCheckInRecord, NewPassRecord, PassRecord, Record,
};

use crate::store::{AdminStore, RecordStore, SecurityStore, VisitorStore};

/// Collections held by the memory store, each in insertion order.
#[derive(Debug, Default)]
struct Collections {
    admins: Vec<Admin>,
    securities: Vec<Security>,
    visitors: Vec<Visitor>,
    records: Vec<Record>,
}

/// In-memory implementation of every store trait.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    inner: Arc<RwLock<Collections>>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl AdminStore for MemoryStore {
    async fn find_by_username(&self, username: &str) -> AppResult<Option<Admin>> {
        let inner = self.inner.read().await;
        Ok(inner.admins.iter().find(|a| a.username == username).cloned())
    }

    async fn find_first(&self) -> AppResult<Option<Admin>> {
        let inner = self.inner.read().await;
        Ok(inner
            .admins
            .iter()
            .find(|a| a.role == Role::Admin)
            .cloned())
    }

    async fn create(&self, data: &NewAdmin) -> AppResult<Admin> {
        let mut inner = self.inner.write().await;
        if inner.admins.iter().any(|a| a.username == data.username) {
            return Err(AppError::conflict(format!(
                "Username '{}' already exists",
                data.username
            )));
        }

        let admin = Admin {
            id: Uuid::now_v7(),
            username: data.username.clone(),
            password_hash: data.password_hash.clone(),
            name: data.name.clone(),
            email: data.email.clone(),
            phone_number: data.phone_number.clone(),
            role: Role::Admin,
            created_at: Utc::now(),
        };
        inner.admins.push(admin.clone());
        debug!(username = %admin.username, "Stored admin in memory");
        Ok(admin)
    }
}

#[async_trait]
impl SecurityStore for MemoryStore {
    async fn find_by_username(&self, username: &str) -> AppResult<Option<Security>> {
        let inner = self.inner.read().await;
        Ok(inner
            .securities
            .iter()
            .find(|s| s.username == username)
            .cloned())
    }

    async fn list_all(&self) -> AppResult<Vec<Security>> {
        let inner = self.inner.read().await;
        Ok(inner
            .securities
            .iter()
            .filter(|s| s.role == Role::Security)
            .cloned()
            .collect())
    }

    async fn create(&self, data: &NewSecurity) -> AppResult<Security> {
        let mut inner = self.inner.write().await;
        if inner.securities.iter().any(|s| s.username == data.username) {
            return Err(AppError::conflict(format!(
                "Username '{}' already exists",
                data.username
            )));
        }

        let security = Security {
            id: Uuid::now_v7(),
            username: data.username.clone(),
            password_hash: data.password_hash.clone(),
            name: data.name.clone(),
            email: data.email.clone(),
            phone_number: data.phone_number.clone(),
            role: Role::Security,
            visitors: Vec::new(),
            created_at: Utc::now(),
        };
        inner.securities.push(security.clone());
        debug!(username = %security.username, "Stored security in memory");
        Ok(security)
    }

    async fn append_visitor(&self, username: &str, visitor_name: &str) -> AppResult<bool> {
        let mut inner = self.inner.write().await;
        match inner.securities.iter_mut().find(|s| s.username == username) {
            Some(security) => {
                security.visitors.push(visitor_name.to_string());
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn pull_visitor(&self, visitor_name: &str) -> AppResult<u64> {
        let mut inner = self.inner.write().await;
        let mut modified = 0;
        for security in inner.securities.iter_mut() {
            let before = security.visitors.len();
            security.visitors.retain(|v| v != visitor_name);
            if security.visitors.len() != before {
                modified += 1;
            }
        }
        Ok(modified)
    }
}

#[async_trait]
impl VisitorStore for MemoryStore {
    async fn create(&self, data: &NewVisitor) -> AppResult<Visitor> {
        let mut inner = self.inner.write().await;
        let visitor = Visitor {
            id: Uuid::now_v7(),
            name: data.name.clone(),
            email: data.email.clone(),
            vehicle_number: data.vehicle_number.clone(),
            ic_number: data.ic_number.clone(),
            phone_number: data.phone_number.clone(),
            role: Role::Visitor,
            security: data.security.clone(),
            records: Vec::new(),
            created_at: Utc::now(),
        };
        inner.visitors.push(visitor.clone());
        Ok(visitor)
    }

    async fn list_by_security(&self, security_username: &str) -> AppResult<Vec<Visitor>> {
        let inner = self.inner.read().await;
        Ok(inner
            .visitors
            .iter()
            .filter(|v| v.security.as_deref() == Some(security_username))
            .cloned()
            .collect())
    }

    async fn delete_one_by_name(&self, name: &str) -> AppResult<bool> {
        let mut inner = self.inner.write().await;
        match inner.visitors.iter().position(|v| v.name == name) {
            Some(index) => {
                inner.visitors.remove(index);
                Ok(true)
            }
            None => Ok(false),
        }
    }
}

#[async_trait]
impl RecordStore for MemoryStore {
    async fn insert_pass(&self, data: &NewPassRecord) -> AppResult<PassRecord> {
        let mut inner = self.inner.write().await;
        let pass = PassRecord {
            id: Uuid::now_v7(),
            name: data.name.clone(),
            ic_number: data.ic_number.clone(),
            pass_identifier: data.pass_identifier.clone(),
            host_number: data.host_number.clone(),
            host_username: data.host_username.clone(),
            current_check_in: data.record_id.clone(),
            records: vec![data.record_id.clone()],
            role: Role::Visitor,
            created_at: Utc::now(),
        };
        inner.records.push(Record::Pass(pass.clone()));
        Ok(pass)
    }

    async fn insert_check_in(&self, data: &NewCheckInRecord) -> AppResult<CheckInRecord> {
        let mut inner = self.inner.write().await;
        let check_in = CheckInRecord {
            id: Uuid::now_v7(),
            name: data.name.clone(),
            record_id: data.record_id.clone(),
            purpose: data.purpose.clone(),
            check_in_time: data.check_in_time,
        };
        inner.records.push(Record::CheckIn(check_in.clone()));
        Ok(check_in)
    }

    async fn list_all(&self) -> AppResult<Vec<Record>> {
        let inner = self.inner.read().await;
        Ok(inner.records.clone())
    }
}
