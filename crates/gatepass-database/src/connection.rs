//! PostgreSQL connection pool.
//!
//! One pool is opened at startup and shared by every repository through
//! [`Stores::postgres`](crate::Stores::postgres).

use std::time::Duration;

use sqlx::postgres::{PgPool, PgPoolOptions};
use tracing::{debug, info};

use gatepass_core::config::DatabaseConfig;
use gatepass_core::config::database::mask_password;
use gatepass_core::error::{AppError, ErrorKind};

/// Shared PostgreSQL pool.
#[derive(Debug, Clone)]
pub struct DatabasePool {
    pool: PgPool,
}

impl DatabasePool {
    /// Opens the pool described by `config`, failing if no connection can be
    /// acquired within `connect_timeout_seconds`.
    pub async fn connect(config: &DatabaseConfig) -> Result<Self, AppError> {
        let target = mask_password(&config.url);
        info!(
            url = %target,
            max_connections = config.max_connections,
            "Opening PostgreSQL pool"
        );

        let pool = pool_options(config)
            .connect(&config.url)
            .await
            .map_err(|e| {
                AppError::with_source(
                    ErrorKind::Database,
                    format!("Cannot reach PostgreSQL at {target}"),
                    e,
                )
            })?;

        debug!(size = pool.size(), idle = pool.num_idle(), "PostgreSQL pool ready");
        Ok(Self { pool })
    }

    /// The underlying sqlx pool, for repositories and migrations.
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Runs a trivial query to confirm the database answers.
    pub async fn health_check(&self) -> Result<bool, AppError> {
        let one: i32 = sqlx::query_scalar("SELECT 1")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Health check failed", e))?;
        Ok(one == 1)
    }

    /// Waits for checked-out connections to return, then closes the pool.
    pub async fn close(&self) {
        debug!(size = self.pool.size(), idle = self.pool.num_idle(), "Closing PostgreSQL pool");
        self.pool.close().await;
        info!("PostgreSQL pool closed");
    }
}

fn pool_options(config: &DatabaseConfig) -> PgPoolOptions {
    PgPoolOptions::new()
        .max_connections(config.max_connections)
        .min_connections(config.min_connections.min(config.max_connections))
        .acquire_timeout(Duration::from_secs(config.connect_timeout_seconds))
        .idle_timeout(Duration::from_secs(config.idle_timeout_seconds))
}
