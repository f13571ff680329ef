//! Shared test helpers for integration tests.
//!
//! Every `TestApp` runs the full router over a fresh in-memory store, so
//! tests are isolated and need no database.

#![allow(dead_code)]

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use serde_json::Value;
use tower::ServiceExt;

use gatepass_api::{AppState, build_router};
use gatepass_core::config::AppConfig;
use gatepass_database::{MemoryStore, Stores};

/// Password used for every seeded account.
pub const PASSWORD: &str = "secret";

/// Test application context
pub struct TestApp {
    /// The Axum router for making test requests
    pub router: Router,
    /// Stores behind the router, for direct assertions
    pub stores: Stores,
    /// Application config
    pub config: AppConfig,
}

impl TestApp {
    /// Create a new test application
    pub fn new() -> Self {
        let config = test_config();
        let stores = Stores::memory(MemoryStore::new());
        let state =
            AppState::new(config.clone(), stores.clone()).expect("Failed to build app state");

        Self {
            router: build_router(state),
            stores,
            config,
        }
    }

    /// Register an admin through the API.
    pub async fn register_admin(&self, username: &str, password: &str) -> TestResponse {
        let body = serde_json::json!({
            "username": username,
            "password": password,
            "name": format!("Admin {username}"),
            "email": format!("{username}@example.com"),
            "phoneNumber": "0100000000",
        });
        self.request("POST", "/registerAdmin", Some(body), None).await
    }

    /// Login and return the JWT from the `Token for <name>: <jwt>` text.
    pub async fn login(&self, username: &str, password: &str) -> String {
        let body = serde_json::json!({
            "username": username,
            "password": password,
        });

        let response = self.request("POST", "/loginAdmin", Some(body), None).await;

        assert_eq!(response.status, StatusCode::OK, "Login failed: {}", response.text);
        assert!(
            response.text.starts_with("Token for "),
            "Login failed: {}",
            response.text
        );

        response
            .text
            .rsplit(": ")
            .next()
            .expect("No token in login response")
            .to_string()
    }

    /// Register and log in an admin, returning its token.
    pub async fn admin_token(&self, username: &str) -> String {
        let response = self.register_admin(username, PASSWORD).await;
        assert_eq!(response.text, "Admin registered");
        self.login(username, PASSWORD).await
    }

    /// Register a security account as the given admin and return its token.
    pub async fn security_token(&self, admin_token: &str, username: &str) -> String {
        let body = serde_json::json!({
            "username": username,
            "password": PASSWORD,
            "name": format!("Guard {username}"),
            "email": format!("{username}@example.com"),
            "phoneNumber": "0120000000",
        });
        let response = self
            .request("POST", "/registerSecurity", Some(body), Some(admin_token))
            .await;
        assert_eq!(response.text, "Security registered successfully");
        self.login(username, PASSWORD).await
    }

    /// Register a visitor as the given security account.
    pub async fn register_visitor(&self, security_token: &str, name: &str) -> TestResponse {
        let body = serde_json::json!({
            "name": name,
            "email": format!("{}@example.com", name.to_lowercase()),
            "phoneNumber": "0130000000",
            "vehicleNumber": "WXY1234",
            "icNumber": "900101-14-5555",
        });
        self.request("POST", "/registerSecurity", Some(body), Some(security_token))
            .await
    }

    /// Sign a token for a visitor, who has no login of its own.
    pub fn visitor_token(&self, name: &str) -> String {
        let now = chrono::Utc::now();
        let claims = gatepass_auth::Claims {
            id: uuid::Uuid::now_v7(),
            username: String::new(),
            name: name.to_string(),
            email: format!("{}@example.com", name.to_lowercase()),
            phone_number: "0130000000".to_string(),
            role: gatepass_entity::account::Role::Visitor,
            visitors: Vec::new(),
            iat: now.timestamp(),
            exp: (now + chrono::Duration::minutes(5)).timestamp(),
        };
        gatepass_auth::JwtEncoder::new(&self.config.auth)
            .expect("Failed to build encoder")
            .encode_claims(&claims)
            .expect("Failed to sign visitor token")
    }

    /// Make an HTTP request to the test app
    pub async fn request(
        &self,
        method: &str,
        path: &str,
        body: Option<Value>,
        token: Option<&str>,
    ) -> TestResponse {
        let mut req = Request::builder().method(method).uri(path);

        if let Some(token) = token {
            req = req.header("Authorization", format!("Bearer {token}"));
        }

        self.send(req, body).await
    }

    /// Make a request with a raw Authorization header value.
    pub async fn request_with_header(&self, method: &str, path: &str, header: &str) -> TestResponse {
        let req = Request::builder()
            .method(method)
            .uri(path)
            .header("Authorization", header);
        self.send(req, None).await
    }

    async fn send(&self, req: axum::http::request::Builder, body: Option<Value>) -> TestResponse {
        let req = match body {
            Some(body) => req
                .header("Content-Type", "application/json")
                .body(Body::from(
                    serde_json::to_string(&body).expect("Failed to serialize body"),
                )),
            None => req.body(Body::empty()),
        }
        .expect("Failed to build request");

        let response = self
            .router
            .clone()
            .oneshot(req)
            .await
            .expect("Failed to send request");

        let status = response.status();
        let body_bytes = axum::body::to_bytes(response.into_body(), 1024 * 1024)
            .await
            .expect("Failed to read body");

        TestResponse {
            status,
            text: String::from_utf8_lossy(&body_bytes).into_owned(),
        }
    }
}

/// Config with a fixed secret and cheap hashing.
pub fn test_config() -> AppConfig {
    let mut config = AppConfig::default();
    config.auth.jwt_secret = "integration-test-secret".to_string();
    config.auth.hash_memory_kib = 1024;
    config.auth.hash_iterations = 1;
    config
}

/// Response from a test request
#[derive(Debug)]
pub struct TestResponse {
    /// HTTP status code
    pub status: StatusCode,
    /// Raw body text
    pub text: String,
}

impl TestResponse {
    /// Parse the body as JSON.
    pub fn json(&self) -> Value {
        serde_json::from_str(&self.text).expect("Response body is not JSON")
    }
}
