mod common;

use axum::{Router, routing::post};
use axum_test::TestServer;
use chrono::{DateTime, Duration, Utc};
use serde_json::json;
use shortreg::api::handlers::shorten_handler;

fn parse_expiry(json: &serde_json::Value) -> DateTime<Utc> {
    DateTime::parse_from_rfc3339(json["expiry"].as_str().unwrap())
        .unwrap()
        .with_timezone(&Utc)
}

#[tokio::test]
async fn test_shorten_success() {
    let state = common::create_test_state();
    let app = Router::new()
        .route("/shorturls", post(shorten_handler))
        .with_state(state);

    let server = TestServer::new(app).unwrap();

    let response = server
        .post("/shorturls")
        .json(&json!({ "url": "https://example.com/some/long/path" }))
        .await;

    assert_eq!(response.status_code(), 201);

    let json = response.json::<serde_json::Value>();
    let short_link = json["shortLink"].as_str().unwrap();
    assert!(short_link.starts_with(&format!("{}/", common::TEST_BASE_URL)));

    let code = short_link.rsplit('/').next().unwrap();
    assert_eq!(code.len(), 8);
    assert!(json["expiry"].is_string());
}

#[tokio::test]
async fn test_shorten_default_validity_is_thirty_minutes() {
    let state = common::create_test_state();
    let app = Router::new()
        .route("/shorturls", post(shorten_handler))
        .with_state(state);

    let server = TestServer::new(app).unwrap();

    let before = Utc::now();
    let response = server
        .post("/shorturls")
        .json(&json!({ "url": "https://example.com" }))
        .await;
    let after = Utc::now();

    assert_eq!(response.status_code(), 201);

    let expiry = parse_expiry(&response.json::<serde_json::Value>());
    assert!(expiry >= before + Duration::minutes(30));
    assert!(expiry <= after + Duration::minutes(30));
}

#[tokio::test]
async fn test_shorten_with_custom_validity() {
    let state = common::create_test_state();
    let app = Router::new()
        .route("/shorturls", post(shorten_handler))
        .with_state(state);

    let server = TestServer::new(app).unwrap();

    let before = Utc::now();
    let response = server
        .post("/shorturls")
        .json(&json!({ "url": "https://example.com", "validity": 120 }))
        .await;
    let after = Utc::now();

    assert_eq!(response.status_code(), 201);

    let expiry = parse_expiry(&response.json::<serde_json::Value>());
    assert!(expiry >= before + Duration::minutes(120));
    assert!(expiry <= after + Duration::minutes(120));
}

#[tokio::test]
async fn test_shorten_zero_validity_is_accepted() {
    let state = common::create_test_state();
    let app = Router::new()
        .route("/shorturls", post(shorten_handler))
        .with_state(state);

    let server = TestServer::new(app).unwrap();

    let response = server
        .post("/shorturls")
        .json(&json!({ "url": "https://example.com", "validity": 0 }))
        .await;

    assert_eq!(response.status_code(), 201);
}

#[tokio::test]
async fn test_shorten_with_custom_shortcode() {
    let state = common::create_test_state();
    let app = Router::new()
        .route("/shorturls", post(shorten_handler))
        .with_state(state);

    let server = TestServer::new(app).unwrap();

    let response = server
        .post("/shorturls")
        .json(&json!({ "url": "https://example.com", "shortcode": "mycode123" }))
        .await;

    assert_eq!(response.status_code(), 201);

    let json = response.json::<serde_json::Value>();
    assert_eq!(
        json["shortLink"],
        format!("{}/mycode123", common::TEST_BASE_URL)
    );
}

#[tokio::test]
async fn test_shorten_shortcode_conflict() {
    let state = common::create_test_state();
    let app = Router::new()
        .route("/shorturls", post(shorten_handler))
        .with_state(state);

    let server = TestServer::new(app).unwrap();

    let first = server
        .post("/shorturls")
        .json(&json!({ "url": "https://first.com", "shortcode": "taken123" }))
        .await;
    assert_eq!(first.status_code(), 201);

    let response = server
        .post("/shorturls")
        .json(&json!({ "url": "https://second.com", "shortcode": "taken123" }))
        .await;

    assert_eq!(response.status_code(), 409);

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["code"], "code_conflict");
}

#[tokio::test]
async fn test_shorten_concurrent_same_shortcode_single_winner() {
    let state = common::create_test_state();
    let app = Router::new()
        .route("/shorturls", post(shorten_handler))
        .with_state(state);

    let server = TestServer::new(app).unwrap();

    let first = server
        .post("/shorturls")
        .json(&json!({ "url": "https://first.com", "shortcode": "race1234" }));
    let second = server
        .post("/shorturls")
        .json(&json!({ "url": "https://second.com", "shortcode": "race1234" }));

    let (response_a, response_b) = tokio::join!(first, second);

    let mut statuses = [response_a.status_code(), response_b.status_code()];
    statuses.sort();
    assert_eq!(statuses[0], 201);
    assert_eq!(statuses[1], 409);
}

#[tokio::test]
async fn test_shorten_invalid_url() {
    let state = common::create_test_state();
    let app = Router::new()
        .route("/shorturls", post(shorten_handler))
        .with_state(state);

    let server = TestServer::new(app).unwrap();

    let response = server
        .post("/shorturls")
        .json(&json!({ "url": "not-a-valid-url" }))
        .await;

    response.assert_status_bad_request();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["code"], "invalid_input");
}

#[tokio::test]
async fn test_shorten_rejects_non_http_scheme() {
    let state = common::create_test_state();
    let app = Router::new()
        .route("/shorturls", post(shorten_handler))
        .with_state(state);

    let server = TestServer::new(app).unwrap();

    let response = server
        .post("/shorturls")
        .json(&json!({ "url": "ftp://files.example.com/a.txt" }))
        .await;

    response.assert_status_bad_request();
}

#[tokio::test]
async fn test_shorten_missing_url_field() {
    let state = common::create_test_state();
    let app = Router::new()
        .route("/shorturls", post(shorten_handler))
        .with_state(state);

    let server = TestServer::new(app).unwrap();

    let response = server.post("/shorturls").json(&json!({})).await;

    response.assert_status_bad_request();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["code"], "invalid_input");
}

#[tokio::test]
async fn test_shorten_non_string_url_field() {
    let state = common::create_test_state();
    let app = Router::new()
        .route("/shorturls", post(shorten_handler))
        .with_state(state);

    let server = TestServer::new(app).unwrap();

    let response = server
        .post("/shorturls")
        .json(&json!({ "url": 12345 }))
        .await;

    response.assert_status_bad_request();
}

#[tokio::test]
async fn test_shorten_invalid_shortcode() {
    let state = common::create_test_state();
    let app = Router::new()
        .route("/shorturls", post(shorten_handler))
        .with_state(state);

    let server = TestServer::new(app).unwrap();

    let response = server
        .post("/shorturls")
        .json(&json!({ "url": "https://example.com", "shortcode": "bad code!" }))
        .await;

    response.assert_status_bad_request();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["code"], "invalid_input");
}

#[tokio::test]
async fn test_shorten_reserved_shortcode() {
    let state = common::create_test_state();
    let app = Router::new()
        .route("/shorturls", post(shorten_handler))
        .with_state(state);

    let server = TestServer::new(app).unwrap();

    let response = server
        .post("/shorturls")
        .json(&json!({ "url": "https://example.com", "shortcode": "health" }))
        .await;

    response.assert_status_bad_request();
}

#[tokio::test]
async fn test_shorten_generated_codes_are_distinct() {
    let state = common::create_test_state();
    let app = Router::new()
        .route("/shorturls", post(shorten_handler))
        .with_state(state);

    let server = TestServer::new(app).unwrap();

    let mut codes = std::collections::HashSet::new();

    for i in 0..20 {
        let response = server
            .post("/shorturls")
            .json(&json!({ "url": format!("https://example.com/{i}") }))
            .await;
        assert_eq!(response.status_code(), 201);

        let json = response.json::<serde_json::Value>();
        codes.insert(json["shortLink"].as_str().unwrap().to_string());
    }

    assert_eq!(codes.len(), 20);
}
