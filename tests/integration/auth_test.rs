//! Integration tests for admin bootstrap, login, and token checks.

mod helpers;

use axum::http::StatusCode;

use gatepass_auth::{Claims, JwtDecoder, JwtEncoder};
use gatepass_entity::account::Role;

#[tokio::test]
async fn test_welcome_and_health() {
    let app = helpers::TestApp::new();

    let welcome = app.request("GET", "/", None, None).await;
    assert_eq!(welcome.status, StatusCode::OK);
    assert_eq!(welcome.text, "Welcome to the Security Management System");

    let health = app.request("GET", "/health", None, None).await;
    assert_eq!(health.status, StatusCode::OK);
    let body = health.json();
    assert_eq!(body["status"], "ok");
    assert_eq!(body["database"], "memory: connected");
}

#[tokio::test]
async fn test_admin_register_and_login_scenario() {
    let app = helpers::TestApp::new();

    let first = app.register_admin("a1", "p1").await;
    assert_eq!(first.status, StatusCode::OK);
    assert_eq!(first.text, "Admin registered");

    let second = app.register_admin("a1", "p1").await;
    assert_eq!(second.text, "Username already registered");
    assert!(app.stores.admins.find_by_username("a1").await.unwrap().is_some());

    let body = serde_json::json!({ "username": "a1", "password": "p1" });
    let ok = app.request("POST", "/loginAdmin", Some(body), None).await;
    assert_eq!(ok.status, StatusCode::OK);
    assert!(ok.text.contains("Token for Admin a1: "));

    let body = serde_json::json!({ "username": "a1", "password": "wrong" });
    let wrong = app.request("POST", "/loginAdmin", Some(body), None).await;
    assert_eq!(wrong.status, StatusCode::OK);
    assert_eq!(wrong.text, "Wrong password");

    let body = serde_json::json!({ "username": "nobody", "password": "p1" });
    let missing = app.request("POST", "/loginAdmin", Some(body), None).await;
    assert_eq!(missing.text, "User not found");
}

#[tokio::test]
async fn test_both_login_endpoints_accept_security_accounts() {
    let app = helpers::TestApp::new();
    let admin = app.admin_token("a1").await;
    app.security_token(&admin, "s1").await;

    for path in ["/loginAdmin", "/loginSecurity"] {
        let body = serde_json::json!({ "username": "s1", "password": helpers::PASSWORD });
        let response = app.request("POST", path, Some(body), None).await;
        assert!(
            response.text.starts_with("Token for Guard s1: "),
            "{path}: {}",
            response.text
        );
    }
}

#[tokio::test]
async fn test_login_token_carries_stored_role() {
    let app = helpers::TestApp::new();
    let admin = app.admin_token("a1").await;
    let security = app.security_token(&admin, "s1").await;

    let decoder = JwtDecoder::new(&app.config.auth);
    assert_eq!(decoder.decode(&admin).unwrap().role, Role::Admin);

    let claims = decoder.decode(&security).unwrap();
    assert_eq!(claims.role, Role::Security);
    assert_eq!(claims.username, "s1");
}

#[tokio::test]
async fn test_empty_credentials_are_rejected() {
    let app = helpers::TestApp::new();

    let body = serde_json::json!({ "username": "", "password": "p1" });
    let response = app.request("POST", "/loginAdmin", Some(body), None).await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);

    let body = serde_json::json!({ "username": "a1" });
    let response = app.request("POST", "/registerAdmin", Some(body), None).await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_missing_authorization_header() {
    let app = helpers::TestApp::new();

    let response = app.request("GET", "/readAdmin", None, None).await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.text, "Unauthorized");
}

#[tokio::test]
async fn test_malformed_and_forged_tokens() {
    let app = helpers::TestApp::new();

    for header in ["Bearer", "Bearer not-a-jwt", "garbage"] {
        let response = app.request_with_header("GET", "/readAdmin", header).await;
        assert_eq!(response.status, StatusCode::UNAUTHORIZED, "{header}");
        assert_eq!(response.text, "Invalid token", "{header}");
    }

    let mut other = helpers::test_config();
    other.auth.jwt_secret = "some-other-secret".to_string();
    let forged = forge(&other.auth, Role::Admin, chrono::Duration::minutes(5));
    let response = app.request("GET", "/readAdmin", None, Some(&forged)).await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.text, "Invalid token");
}

#[tokio::test]
async fn test_expired_token_is_rejected() {
    let app = helpers::TestApp::new();

    let expired = forge(&app.config.auth, Role::Admin, chrono::Duration::minutes(-5));
    let response = app.request("GET", "/readAdmin", None, Some(&expired)).await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.text, "Invalid token");
}

fn forge(
    config: &gatepass_core::config::AuthConfig,
    role: Role,
    ttl: chrono::Duration,
) -> String {
    let now = chrono::Utc::now();
    let claims = Claims {
        id: uuid::Uuid::now_v7(),
        username: "a1".to_string(),
        name: "Admin a1".to_string(),
        email: "a1@example.com".to_string(),
        phone_number: "0100000000".to_string(),
        role,
        visitors: Vec::new(),
        iat: (now - chrono::Duration::minutes(10)).timestamp(),
        exp: (now + ttl).timestamp(),
    };
    JwtEncoder::new(config).unwrap().encode_claims(&claims).unwrap()
}
