//! Admin repository implementation.

use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use gatepass_core::error::{AppError, ErrorKind};
use gatepass_core::result::AppResult;
use gatepass_entity::account::{Admin, NewAdmin};

use crate::store::AdminStore;

/// Repository for the `admins` table.
#[derive(Debug, Clone)]
pub struct AdminRepository {
    pool: PgPool,
}

impl AdminRepository {
    /// Create a new admin repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AdminStore for AdminRepository {
    async fn find_by_username(&self, username: &str) -> AppResult<Option<Admin>> {
        sqlx::query_as::<_, Admin>("SELECT * FROM admins WHERE username = $1")
            .bind(username)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find admin by username", e)
            })
    }

    async fn find_first(&self) -> AppResult<Option<Admin>> {
        sqlx::query_as::<_, Admin>(
            "SELECT * FROM admins WHERE role = 'Admin' ORDER BY created_at ASC, id ASC LIMIT 1",
        )
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to load admin", e))
    }

    async fn create(&self, data: &NewAdmin) -> AppResult<Admin> {
        sqlx::query_as::<_, Admin>(
            "INSERT INTO admins (id, username, password_hash, name, email, phone_number, role) \
             VALUES ($1, $2, $3, $4, $5, $6, 'Admin') \
             RETURNING *",
        )
        .bind(Uuid::now_v7())
        .bind(&data.username)
        .bind(&data.password_hash)
        .bind(&data.name)
        .bind(&data.email)
        .bind(&data.phone_number)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db_err)
                if db_err.constraint() == Some("admins_username_key") =>
            {
                AppError::conflict(format!("Username '{}' already exists", data.username))
            }
            _ => AppError::with_source(ErrorKind::Database, "Failed to create admin", e),
        })
    }
}
