//! Start the Gatepass server.

use clap::Args;

use gatepass_core::error::AppError;
use gatepass_database::migration::run_migrations;
use gatepass_database::{MemoryStore, Stores};

use crate::output;

/// Arguments for the serve command
#[derive(Debug, Args)]
pub struct ServeArgs {
    /// Override the server port
    #[arg(short, long)]
    pub port: Option<u16>,

    /// Override the server host
    #[arg(long)]
    pub host: Option<String>,

    /// Run database migrations on startup
    #[arg(long)]
    pub auto_migrate: bool,

    /// Serve from an in-memory store instead of PostgreSQL (data is lost on exit)
    #[arg(long, conflicts_with = "auto_migrate")]
    pub in_memory: bool,
}

/// Execute the serve command
pub async fn execute(args: &ServeArgs, config_path: &str) -> Result<(), AppError> {
    let mut config = super::load_config(config_path)?;

    if let Some(port) = args.port {
        config.server.port = port;
    }
    if let Some(ref host) = args.host {
        config.server.host = host.clone();
    }

    println!("Starting Gatepass server...");
    output::print_kv("Host", &config.server.host);
    output::print_kv("Port", &config.server.port.to_string());

    if args.in_memory {
        output::print_warning("Using the in-memory store; nothing will be persisted.");
        return gatepass_api::run_server(config, Stores::memory(MemoryStore::new())).await;
    }

    let (pool, stores) = super::connect_stores(&config).await?;

    if args.auto_migrate {
        run_migrations(pool.pool()).await?;
        output::print_success("Migrations applied.");
    }

    gatepass_api::run_server(config, stores).await?;
    pool.close().await;
    Ok(())
}
