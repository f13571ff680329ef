//! Integration tests for role-gated account registration.

mod helpers;

use axum::http::StatusCode;

#[tokio::test]
async fn test_admin_registers_security() {
    let app = helpers::TestApp::new();
    let admin = app.admin_token("a1").await;

    app.security_token(&admin, "s1").await;

    let stored = app
        .stores
        .securities
        .find_by_username("s1")
        .await
        .unwrap()
        .expect("security stored");
    assert_eq!(stored.name, "Guard s1");
    assert!(stored.visitors.is_empty());
    assert_ne!(stored.password_hash, helpers::PASSWORD);
}

#[tokio::test]
async fn test_username_must_be_unique_across_admins_and_securities() {
    let app = helpers::TestApp::new();
    let admin = app.admin_token("a1").await;
    app.security_token(&admin, "s1").await;

    for taken in ["a1", "s1"] {
        let body = serde_json::json!({
            "username": taken,
            "password": "pw",
            "name": "Dup",
            "email": "dup@example.com",
            "phoneNumber": "0",
        });
        let response = app
            .request("POST", "/registerSecurity", Some(body), Some(&admin))
            .await;
        assert_eq!(response.status, StatusCode::OK);
        assert_eq!(
            response.text,
            "Username already in use, please enter another username"
        );
    }

    let register_admin_again = app.register_admin("s1", "pw").await;
    assert_eq!(register_admin_again.text, "Username already registered");
}

#[tokio::test]
async fn test_security_registers_visitor_and_links_it() {
    let app = helpers::TestApp::new();
    let admin = app.admin_token("a1").await;
    let security = app.security_token(&admin, "s1").await;

    let response = app.register_visitor(&security, "Vera").await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.text, "Visitor registered successfully");

    let visitors = app.stores.visitors.list_by_security("s1").await.unwrap();
    assert_eq!(visitors.len(), 1);
    assert_eq!(visitors[0].name, "Vera");
    assert!(visitors[0].records.is_empty());

    let guard = app
        .stores
        .securities
        .find_by_username("s1")
        .await
        .unwrap()
        .unwrap();
    assert_eq!(guard.visitors, vec!["Vera".to_string()]);
}

#[tokio::test]
async fn test_visitor_cannot_register_accounts() {
    let app = helpers::TestApp::new();
    let visitor = app.visitor_token("Vera");

    let body = serde_json::json!({ "name": "Victor" });
    let response = app
        .request("POST", "/registerSecurity", Some(body), Some(&visitor))
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(
        response.text,
        "Visitor accounts cannot register other accounts"
    );
    assert!(app.stores.visitors.list_by_security("").await.unwrap().is_empty());
}

#[tokio::test]
async fn test_security_registration_needs_credentials() {
    let app = helpers::TestApp::new();
    let admin = app.admin_token("a1").await;

    let body = serde_json::json!({
        "username": "s2",
        "name": "No Password",
        "email": "s2@example.com",
        "phoneNumber": "0",
    });
    let response = app
        .request("POST", "/registerSecurity", Some(body), Some(&admin))
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert!(
        app.stores
            .securities
            .find_by_username("s2")
            .await
            .unwrap()
            .is_none()
    );
}

#[tokio::test]
async fn test_registration_requires_token() {
    let app = helpers::TestApp::new();

    let body = serde_json::json!({ "name": "Vera" });
    let response = app.request("POST", "/registerSecurity", Some(body), None).await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.text, "Unauthorized");
}
