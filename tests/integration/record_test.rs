//! Integration tests for visitor pass issuance.

mod helpers;

use axum::http::StatusCode;

use gatepass_entity::record::Record;

fn pass_body(name: Option<&str>, record_id: &str) -> serde_json::Value {
    let mut body = serde_json::json!({
        "icNumber": "900101-14-5555",
        "passIdentifier": "PASS123",
        "hostNumber": "0120000000",
        "hostUsername": "s1",
        "recordID": record_id,
        "purpose": "Meeting",
    });
    if let Some(name) = name {
        body["name"] = serde_json::json!(name);
    }
    body
}

#[tokio::test]
async fn test_issue_pass_writes_pass_and_check_in() {
    let app = helpers::TestApp::new();
    let admin = app.admin_token("a1").await;
    let security = app.security_token(&admin, "s1").await;

    let response = app
        .request(
            "POST",
            "/issueVisitorPass",
            Some(pass_body(Some("Vera"), "R-1")),
            Some(&security),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert!(response.text.starts_with("Visitor Vera has checked in at '"));
    assert!(response.text.ends_with("' with recordID 'R-1'"));

    let records = app.stores.records.list_all().await.unwrap();
    assert_eq!(records.len(), 2);

    let Record::Pass(pass) = &records[0] else {
        panic!("first record should be the pass");
    };
    assert_eq!(pass.name, "Vera");
    assert_eq!(pass.current_check_in, "R-1");
    assert_eq!(pass.records, vec!["R-1".to_string()]);

    let Record::CheckIn(check_in) = &records[1] else {
        panic!("second record should be the check-in");
    };
    assert_eq!(check_in.record_id, "R-1");
    assert_eq!(check_in.purpose, "Meeting");

    let stamp = check_in
        .check_in_time
        .to_rfc3339_opts(chrono::SecondsFormat::Millis, true);
    assert!(response.text.contains(&stamp));
}

#[tokio::test]
async fn test_name_defaults_to_caller() {
    let app = helpers::TestApp::new();
    let visitor = app.visitor_token("Vera");

    let response = app
        .request(
            "POST",
            "/issueVisitorPass",
            Some(pass_body(None, "R-2")),
            Some(&visitor),
        )
        .await;
    assert!(response.text.starts_with("Visitor Vera has checked in"));

    let records = app.stores.records.list_all().await.unwrap();
    assert!(records.iter().all(|r| r.name() == "Vera"));
}

#[tokio::test]
async fn test_issue_pass_requires_token() {
    let app = helpers::TestApp::new();

    let response = app
        .request("POST", "/issueVisitorPass", Some(pass_body(None, "R-3")), None)
        .await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert!(app.stores.records.list_all().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_malformed_body_is_a_client_error() {
    let app = helpers::TestApp::new();
    let admin = app.admin_token("a1").await;

    let body = serde_json::json!({ "recordID": 42 });
    let response = app
        .request("POST", "/issueVisitorPass", Some(body), Some(&admin))
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}
