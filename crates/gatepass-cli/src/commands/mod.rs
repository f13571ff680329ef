//! CLI command definitions and dispatch.

pub mod admin;
pub mod config;
pub mod migrate;
pub mod records;
pub mod serve;

use clap::{Parser, Subcommand};

use gatepass_core::config::AppConfig;
use gatepass_core::error::AppError;
use gatepass_database::{DatabasePool, Stores};

use crate::output::OutputFormat;

/// Gatepass: visitor and security management backend
#[derive(Debug, Parser)]
#[command(name = "gatepass", version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "config/default.toml")]
    pub config: String,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table")]
    pub format: OutputFormat,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Start the HTTP server
    Serve(serve::ServeArgs),
    /// Apply pending database migrations
    Migrate,
    /// Admin account management
    Admin(admin::AdminArgs),
    /// Record inspection
    Records(records::RecordsArgs),
    /// Configuration inspection
    Config(config::ConfigArgs),
}

impl Cli {
    /// Execute the CLI command
    pub async fn execute(&self) -> Result<(), AppError> {
        match &self.command {
            Commands::Serve(args) => serve::execute(args, &self.config).await,
            Commands::Migrate => migrate::execute(&self.config).await,
            Commands::Admin(args) => admin::execute(args, &self.config).await,
            Commands::Records(args) => records::execute(args, &self.config, self.format).await,
            Commands::Config(args) => config::execute(args, &self.config, self.format).await,
        }
    }
}

/// Helper: load configuration from file
pub fn load_config(config_path: &str) -> Result<AppConfig, AppError> {
    AppConfig::load_file(config_path)
}

/// Helper: connect to PostgreSQL and wrap the pool in stores
pub async fn connect_stores(config: &AppConfig) -> Result<(DatabasePool, Stores), AppError> {
    let pool = DatabasePool::connect(&config.database).await?;
    let stores = Stores::postgres(pool.clone());
    Ok((pool, stores))
}
