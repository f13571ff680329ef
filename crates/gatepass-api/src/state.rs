//! Application state shared across all handlers.

use std::sync::Arc;

use gatepass_auth::jwt::{JwtDecoder, JwtEncoder};
use gatepass_auth::password::PasswordHasher;
use gatepass_auth::rbac::RbacEnforcer;
use gatepass_core::config::AppConfig;
use gatepass_core::error::AppError;
use gatepass_database::Stores;
use gatepass_service::{AuthService, DirectoryService, RecordService, RegistrationService};

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
/// All fields are `Arc`-wrapped or cheaply cloneable.
#[derive(Debug, Clone)]
pub struct AppState {
    // ── Configuration ────────────────────────────────────────
    /// Application configuration
    pub config: Arc<AppConfig>,

    // ── Infrastructure ───────────────────────────────────────
    /// Data-access handle (PostgreSQL or in-memory)
    pub stores: Stores,

    // ── Auth ─────────────────────────────────────────────────
    /// JWT token decoder and validator
    pub jwt_decoder: Arc<JwtDecoder>,

    // ── Services ─────────────────────────────────────────────
    /// Admin registration and login
    pub auth_service: Arc<AuthService>,
    /// Security and visitor registration
    pub registration_service: Arc<RegistrationService>,
    /// Visitor pass issuance
    pub record_service: Arc<RecordService>,
    /// Directory reads and visitor deletion
    pub directory_service: Arc<DirectoryService>,
}

impl AppState {
    /// Wires the auth primitives and services over the given stores.
    pub fn new(config: AppConfig, stores: Stores) -> Result<Self, AppError> {
        let hasher = Arc::new(PasswordHasher::new(&config.auth)?);
        let encoder = Arc::new(JwtEncoder::new(&config.auth)?);
        let jwt_decoder = Arc::new(JwtDecoder::new(&config.auth));
        let enforcer = Arc::new(RbacEnforcer::new());

        let auth_service = Arc::new(AuthService::new(stores.clone(), hasher.clone(), encoder));
        let registration_service = Arc::new(RegistrationService::new(
            stores.clone(),
            hasher,
            enforcer.clone(),
        ));
        let record_service = Arc::new(RecordService::new(stores.clone(), enforcer.clone()));
        let directory_service = Arc::new(DirectoryService::new(stores.clone(), enforcer));

        Ok(Self {
            config: Arc::new(config),
            stores,
            jwt_decoder,
            auth_service,
            registration_service,
            record_service,
            directory_service,
        })
    }
}
