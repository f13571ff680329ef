//! Gatepass Server: visitor pass and security staff management backend.
//!
//! Main entry point that wires the crates together and starts the server.

use std::time::Duration;

use tracing_subscriber::{EnvFilter, fmt};

use gatepass_core::config::{AppConfig, LogFormat};
use gatepass_core::error::AppError;
use gatepass_database::migration::run_migrations;
use gatepass_database::{DatabasePool, Stores};

#[tokio::main]
async fn main() {
    let config = match load_configuration() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {e}");
            std::process::exit(1);
        }
    };

    init_logging(&config);

    if let Err(e) = run(config).await {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }
}

/// Load configuration for the environment named by `GATEPASS_ENV`.
fn load_configuration() -> Result<AppConfig, AppError> {
    let env = std::env::var("GATEPASS_ENV").unwrap_or_else(|_| "development".to_string());
    AppConfig::load(&env)
}

/// Initialize tracing/logging
fn init_logging(config: &AppConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    match config.logging.format {
        LogFormat::Json => {
            fmt()
                .json()
                .with_env_filter(filter)
                .with_target(true)
                .with_thread_ids(true)
                .init();
        }
        LogFormat::Pretty => {
            fmt()
                .pretty()
                .with_env_filter(filter)
                .with_target(true)
                .init();
        }
    }
}

/// Connect, migrate, serve, then drain the pool.
async fn run(config: AppConfig) -> Result<(), AppError> {
    tracing::info!("Starting Gatepass v{}", env!("CARGO_PKG_VERSION"));

    let pool = DatabasePool::connect(&config.database).await?;

    tracing::info!("Running database migrations...");
    run_migrations(pool.pool()).await?;

    let grace = Duration::from_secs(config.server.shutdown_grace_seconds);
    let stores = Stores::postgres(pool.clone());
    gatepass_api::run_server(config, stores).await?;

    if tokio::time::timeout(grace, pool.close()).await.is_err() {
        tracing::warn!(
            grace_seconds = grace.as_secs(),
            "Database pool did not close within the shutdown grace period"
        );
    }

    tracing::info!("Gatepass shut down");
    Ok(())
}
