//! Integration tests for role-scoped reads and visitor deletion.

mod helpers;

use axum::http::StatusCode;

async fn issue_pass(app: &helpers::TestApp, token: &str, name: &str, record_id: &str) {
    let body = serde_json::json!({
        "name": name,
        "icNumber": "900101-14-5555",
        "passIdentifier": "PASS123",
        "hostNumber": "0120000000",
        "hostUsername": "s1",
        "recordID": record_id,
        "purpose": "Delivery",
    });
    let response = app
        .request("POST", "/issueVisitorPass", Some(body), Some(token))
        .await;
    assert_eq!(response.status, StatusCode::OK, "{}", response.text);
}

#[tokio::test]
async fn test_admin_read_sees_everything() {
    let app = helpers::TestApp::new();
    let admin = app.admin_token("a1").await;
    let security = app.security_token(&admin, "s1").await;
    issue_pass(&app, &security, "Vera", "R-1").await;

    // Role decides the view, not the path.
    for path in ["/readAdmin", "/readSecurity"] {
        let response = app.request("GET", path, None, Some(&admin)).await;
        assert_eq!(response.status, StatusCode::OK);

        let body = response.json();
        assert_eq!(body["Admins"]["username"], "a1");
        assert!(body["Admins"].get("passwordHash").is_none());
        assert_eq!(body["Securitys"].as_array().unwrap().len(), 1);

        let records = body["Records"].as_array().unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0]["passIdentifier"], "PASS123");
        assert_eq!(records[1]["recordID"], "R-1");
    }
}

#[tokio::test]
async fn test_security_read_is_scoped_to_own_visitors() {
    let app = helpers::TestApp::new();
    let admin = app.admin_token("a1").await;
    let s1 = app.security_token(&admin, "s1").await;
    let s2 = app.security_token(&admin, "s2").await;
    app.register_visitor(&s1, "Vera").await;
    app.register_visitor(&s2, "Victor").await;

    let response = app.request("GET", "/readSecurity", None, Some(&s1)).await;
    assert_eq!(response.status, StatusCode::OK);

    let body = response.json();
    assert_eq!(body["Security"]["username"], "s1");
    assert_eq!(body["Security"]["visitors"], serde_json::json!(["Vera"]));
    let visitors = body["Visitors"].as_array().unwrap();
    assert_eq!(visitors.len(), 1);
    assert_eq!(visitors[0]["name"], "Vera");
    assert!(body["Records"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_visitor_read_is_refused() {
    let app = helpers::TestApp::new();
    let visitor = app.visitor_token("Vera");

    let response = app.request("GET", "/readAdmin", None, Some(&visitor)).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.text, "Visitor accounts cannot read directory data");
}

#[tokio::test]
async fn test_delete_removes_one_visitor_and_keeps_records() {
    let app = helpers::TestApp::new();
    let admin = app.admin_token("a1").await;
    let s1 = app.security_token(&admin, "s1").await;
    let s2 = app.security_token(&admin, "s2").await;
    app.register_visitor(&s1, "Vera").await;
    app.register_visitor(&s2, "Vera").await;

    let visitor = app.visitor_token("Vera");
    issue_pass(&app, &visitor, "Vera", "R-9").await;

    let response = app.request("DELETE", "/deleteVisitor", None, Some(&visitor)).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(
        response.text,
        "Delete Successful\nBut the records are still in the database"
    );

    let remaining = app.stores.visitors.list_by_security("s1").await.unwrap().len()
        + app.stores.visitors.list_by_security("s2").await.unwrap().len();
    assert_eq!(remaining, 1);

    for username in ["s1", "s2"] {
        let guard = app
            .stores
            .securities
            .find_by_username(username)
            .await
            .unwrap()
            .unwrap();
        assert!(!guard.visitors.contains(&"Vera".to_string()), "{username}");
    }

    assert_eq!(app.stores.records.list_all().await.unwrap().len(), 2);
}

#[tokio::test]
async fn test_delete_without_match_reports_user_not_found() {
    let app = helpers::TestApp::new();
    let visitor = app.visitor_token("Nobody");

    let response = app.request("DELETE", "/deleteVisitor", None, Some(&visitor)).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.text, "User not found");
}
