//! Admin account management commands.

use std::sync::Arc;

use clap::{Args, Subcommand};

use gatepass_auth::jwt::JwtEncoder;
use gatepass_auth::password::PasswordHasher;
use gatepass_core::error::AppError;
use gatepass_service::{AuthService, RegisterAdminOutcome, RegisterAdminRequest};

use crate::output;

/// Arguments for admin commands
#[derive(Debug, Args)]
pub struct AdminArgs {
    /// Admin subcommand
    #[command(subcommand)]
    pub command: AdminCommand,
}

/// Admin subcommands
#[derive(Debug, Subcommand)]
pub enum AdminCommand {
    /// Create an admin account (prompts for missing fields)
    Create {
        /// Username
        #[arg(short, long)]
        username: Option<String>,
        /// Password (will prompt if not provided)
        #[arg(short, long)]
        password: Option<String>,
        /// Display name
        #[arg(short, long)]
        name: Option<String>,
        /// Email
        #[arg(short, long)]
        email: Option<String>,
        /// Phone number
        #[arg(long)]
        phone_number: Option<String>,
    },
}

/// Execute admin commands
pub async fn execute(args: &AdminArgs, config_path: &str) -> Result<(), AppError> {
    let config = super::load_config(config_path)?;
    let (pool, stores) = super::connect_stores(&config).await?;
    let hasher = Arc::new(PasswordHasher::new(&config.auth)?);
    let encoder = Arc::new(JwtEncoder::new(&config.auth)?);
    let auth = AuthService::new(stores, hasher, encoder);

    match &args.command {
        AdminCommand::Create {
            username,
            password,
            name,
            email,
            phone_number,
        } => {
            let username = prompt_or(username, "Admin username", false)?;
            let name = prompt_or(name, "Display name", false)?;
            let email = prompt_or(email, "Email (optional, press Enter to skip)", true)?;
            let phone_number =
                prompt_or(phone_number, "Phone number (optional, press Enter to skip)", true)?;

            let password = match password {
                Some(p) => p.clone(),
                None => dialoguer::Password::new()
                    .with_prompt("Admin password")
                    .with_confirmation("Confirm password", "Passwords do not match")
                    .interact()
                    .map_err(|e| AppError::internal(format!("Input error: {e}")))?,
            };

            let outcome = auth
                .register_admin(RegisterAdminRequest {
                    username: username.clone(),
                    password,
                    name,
                    email,
                    phone_number,
                })
                .await?;

            match outcome {
                RegisterAdminOutcome::Registered(admin) => output::print_success(&format!(
                    "Admin '{}' created (id: {})",
                    admin.username, admin.id
                )),
                RegisterAdminOutcome::UsernameTaken => {
                    output::print_warning(&format!("{outcome}: '{username}'"))
                }
            }
        }
    }

    pool.close().await;
    Ok(())
}

/// Use the flag value if given, otherwise prompt for it.
fn prompt_or(value: &Option<String>, prompt: &str, allow_empty: bool) -> Result<String, AppError> {
    match value {
        Some(v) => Ok(v.clone()),
        None => dialoguer::Input::new()
            .with_prompt(prompt)
            .allow_empty(allow_empty)
            .interact_text()
            .map_err(|e| AppError::internal(format!("Input error: {e}"))),
    }
}
