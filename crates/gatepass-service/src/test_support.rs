//! Shared fixtures for service unit tests.

use std::sync::Arc;

use gatepass_auth::jwt::JwtEncoder;
use gatepass_auth::password::PasswordHasher;
use gatepass_auth::rbac::RbacEnforcer;
use gatepass_core::config::AuthConfig;
use gatepass_database::{MemoryStore, Stores};
use gatepass_entity::account::{NewSecurity, Role, Security};
use uuid::Uuid;

use crate::account::RegistrationService;
use crate::auth::{AuthService, RegisterAdminRequest};
use crate::context::RequestContext;
use crate::directory::DirectoryService;
use crate::record::RecordService;

pub(crate) struct TestServices {
    pub config: AuthConfig,
    pub stores: Stores,
    pub hasher: Arc<PasswordHasher>,
    pub auth: AuthService,
    pub registration: RegistrationService,
    pub records: RecordService,
    pub directory: DirectoryService,
}

impl TestServices {
    pub fn new() -> Self {
        Self::with_stores(Stores::memory(MemoryStore::new()))
    }

    pub fn with_stores(stores: Stores) -> Self {
        let config = AuthConfig {
            jwt_secret: "unit-test-secret".to_string(),
            hash_memory_kib: 1024,
            hash_iterations: 1,
            ..AuthConfig::default()
        };
        let hasher = Arc::new(PasswordHasher::new(&config).unwrap());
        let encoder = Arc::new(JwtEncoder::new(&config).unwrap());
        let enforcer = Arc::new(RbacEnforcer::new());

        Self {
            auth: AuthService::new(stores.clone(), hasher.clone(), encoder),
            registration: RegistrationService::new(
                stores.clone(),
                hasher.clone(),
                enforcer.clone(),
            ),
            records: RecordService::new(stores.clone(), enforcer.clone()),
            directory: DirectoryService::new(stores.clone(), enforcer),
            config,
            stores,
            hasher,
        }
    }

    /// Stores a security account whose password is `secret`.
    pub async fn seed_security(&self, username: &str) -> Security {
        let password_hash = self.hasher.hash_password("secret").unwrap();
        self.stores
            .securities
            .create(&NewSecurity {
                username: username.to_string(),
                password_hash,
                name: format!("Guard {username}"),
                email: format!("{username}@example.com"),
                phone_number: "0123".to_string(),
            })
            .await
            .unwrap()
    }
}

pub(crate) fn admin_request(username: &str, password: &str) -> RegisterAdminRequest {
    RegisterAdminRequest {
        username: username.to_string(),
        password: password.to_string(),
        name: format!("Admin {username}"),
        email: format!("{username}@example.com"),
        phone_number: "0100".to_string(),
    }
}

pub(crate) fn actor(username: &str, name: &str, role: Role) -> RequestContext {
    RequestContext::new(Uuid::new_v4(), username, name, "0999", role)
}
