//! Database migration command.

use gatepass_core::error::AppError;
use gatepass_database::migration::run_migrations;

use crate::output;

/// Apply all pending migrations
pub async fn execute(config_path: &str) -> Result<(), AppError> {
    let config = super::load_config(config_path)?;
    let (pool, _) = super::connect_stores(&config).await?;

    println!("Running database migrations...");
    run_migrations(pool.pool()).await?;
    output::print_success("All migrations applied successfully.");

    pool.close().await;
    Ok(())
}
