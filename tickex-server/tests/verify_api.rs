//! Endpoint tests against the fully wired router.

use axum::http::{HeaderName, HeaderValue, StatusCode};
use axum_test::TestServer;
use serde_json::{Value, json};
use tickex_server::{AppState, Config, create_app};

fn test_server() -> TestServer {
    let app = create_app(AppState::new(Config::default()));
    TestServer::builder()
        .save_cookies()
        .build(app)
        .expect("router should build into a test server")
}

/// Fetch a CSRF token; the matching cookie is retained by the server's
/// cookie jar.
async fn csrf_token(server: &TestServer) -> String {
    let response = server.get("/api/csrf").await;
    response.assert_status_ok();
    let body: Value = response.json();
    body["token"]
        .as_str()
        .expect("token field should be a string")
        .to_string()
}

fn csrf_header(token: &str) -> (HeaderName, HeaderValue) {
    (
        HeaderName::from_static("x-csrf-token"),
        HeaderValue::from_str(token).expect("token is a valid header value"),
    )
}

#[tokio::test]
async fn valid_payload_round_trip() {
    let server = test_server();
    let token = csrf_token(&server).await;
    let (name, value) = csrf_header(&token);

    let response = server
        .post("/api/verify")
        .add_header(name, value)
        .json(&json!({ "qrcode": "VALID123" }))
        .await;

    response.assert_status_ok();
    response.assert_json(&json!({
        "status": "valid",
        "message": "Ticket valid",
    }));
}

#[tokio::test]
async fn invalid_payload_round_trip() {
    let server = test_server();
    let token = csrf_token(&server).await;
    let (name, value) = csrf_header(&token);

    let response = server
        .post("/api/verify")
        .add_header(name, value)
        .json(&json!({ "qrcode": "abc" }))
        .await;

    response.assert_status_ok();
    response.assert_json(&json!({
        "status": "invalid",
        "message": "Ticket invalid",
    }));
}

#[tokio::test]
async fn prefix_check_is_case_insensitive() {
    let server = test_server();
    let token = csrf_token(&server).await;
    let (name, value) = csrf_header(&token);

    let response = server
        .post("/api/verify")
        .add_header(name, value)
        .json(&json!({ "qrcode": "valid-ticket-42" }))
        .await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["status"], "valid");
}

#[tokio::test]
async fn missing_qrcode_field_is_a_validation_failure() {
    let server = test_server();
    let token = csrf_token(&server).await;
    let (name, value) = csrf_header(&token);

    let response = server
        .post("/api/verify")
        .add_header(name, value)
        .json(&json!({ "code": "VALID123" }))
        .await;

    response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn non_string_qrcode_is_a_validation_failure() {
    let server = test_server();
    let token = csrf_token(&server).await;
    let (name, value) = csrf_header(&token);

    let response = server
        .post("/api/verify")
        .add_header(name, value)
        .json(&json!({ "qrcode": 123 }))
        .await;

    response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn verify_without_a_csrf_token_is_forbidden() {
    let server = test_server();

    let response = server
        .post("/api/verify")
        .json(&json!({ "qrcode": "VALID123" }))
        .await;

    response.assert_status(StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn verify_with_a_mismatched_csrf_token_is_forbidden() {
    let server = test_server();
    // Issue a token so the cookie is present, then send a different one.
    let _ = csrf_token(&server).await;
    let (name, value) = csrf_header("not-the-issued-token");

    let response = server
        .post("/api/verify")
        .add_header(name, value)
        .json(&json!({ "qrcode": "VALID123" }))
        .await;

    response.assert_status(StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn health_reports_ok() {
    let server = test_server();

    let response = server.get("/health").await;
    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["status"], "ok");
}
