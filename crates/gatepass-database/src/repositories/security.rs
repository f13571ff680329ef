//! Security account repository implementation.

use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use gatepass_core::error::{AppError, ErrorKind};
use gatepass_core::result::AppResult;
use gatepass_entity::account::{NewSecurity, Security};

use crate::store::SecurityStore;

/// Repository for the `securities` table.
#[derive(Debug, Clone)]
pub struct SecurityRepository {
    pool: PgPool,
}

impl SecurityRepository {
    /// Create a new security repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SecurityStore for SecurityRepository {
    async fn find_by_username(&self, username: &str) -> AppResult<Option<Security>> {
        sqlx::query_as::<_, Security>("SELECT * FROM securities WHERE username = $1")
            .bind(username)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(
                    ErrorKind::Database,
                    "Failed to find security by username",
                    e,
                )
            })
    }

    async fn list_all(&self) -> AppResult<Vec<Security>> {
        sqlx::query_as::<_, Security>(
            "SELECT * FROM securities WHERE role = 'Security' ORDER BY created_at ASC, id ASC",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list securities", e))
    }

    async fn create(&self, data: &NewSecurity) -> AppResult<Security> {
        sqlx::query_as::<_, Security>(
            "INSERT INTO securities (id, username, password_hash, name, email, phone_number, role, visitors) \
             VALUES ($1, $2, $3, $4, $5, $6, 'Security', '{}') \
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
                if db_err.constraint() == Some("securities_username_key") =>
            {
                AppError::conflict(format!("Username '{}' already exists", data.username))
            }
            _ => AppError::with_source(ErrorKind::Database, "Failed to create security", e),
        })
    }

    async fn append_visitor(&self, username: &str, visitor_name: &str) -> AppResult<bool> {
        let result = sqlx::query(
            "UPDATE securities SET visitors = array_append(visitors, $2) WHERE username = $1",
        )
        .bind(username)
        .bind(visitor_name)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to append visitor to security", e)
        })?;

        Ok(result.rows_affected() > 0)
    }

    async fn pull_visitor(&self, visitor_name: &str) -> AppResult<u64> {
        let result = sqlx::query(
            "UPDATE securities SET visitors = array_remove(visitors, $1) WHERE $1 = ANY(visitors)",
        )
        .bind(visitor_name)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to pull visitor references", e)
        })?;

        Ok(result.rows_affected())
    }
}
