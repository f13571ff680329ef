//! Visitor repository implementation.

use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use gatepass_core::error::{AppError, ErrorKind};
use gatepass_core::result::AppResult;
use gatepass_entity::account::{NewVisitor, Visitor};

use crate::store::VisitorStore;

/// Repository for the `visitors` table.
#[derive(Debug, Clone)]
pub struct VisitorRepository {
    pool: PgPool,
}

impl VisitorRepository {
    /// Create a new visitor repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl VisitorStore for VisitorRepository {
    async fn create(&self, data: &NewVisitor) -> AppResult<Visitor> {
        sqlx::query_as::<_, Visitor>(
            "INSERT INTO visitors (id, name, email, vehicle_number, ic_number, phone_number, role, security, records) \
             VALUES ($1, $2, $3, $4, $5, $6, 'Visitor', $7, '{}') \
             RETURNING *",
        )
        .bind(Uuid::now_v7())
        .bind(&data.name)
        .bind(&data.email)
        .bind(&data.vehicle_number)
        .bind(&data.ic_number)
        .bind(&data.phone_number)
        .bind(&data.security)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create visitor", e))
    }

    async fn list_by_security(&self, security_username: &str) -> AppResult<Vec<Visitor>> {
        sqlx::query_as::<_, Visitor>(
            "SELECT * FROM visitors WHERE security = $1 ORDER BY created_at ASC, id ASC",
        )
        .bind(security_username)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to list visitors by security", e)
        })
    }

    async fn delete_one_by_name(&self, name: &str) -> AppResult<bool> {
        let result = sqlx::query(
            "DELETE FROM visitors WHERE id = \
             (SELECT id FROM visitors WHERE name = $1 ORDER BY created_at ASC, id ASC LIMIT 1)",
        )
        .bind(name)
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to delete visitor", e))?;

        Ok(result.rows_affected() > 0)
    }
}
