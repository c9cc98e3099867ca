mod common;

use axum::{Router, routing::get};
use axum_test::TestServer;
use chrono::{DateTime, Duration, Utc};
use shortreg::api::handlers::stats_handler;

fn parse_timestamp(value: &serde_json::Value) -> DateTime<Utc> {
    DateTime::parse_from_rfc3339(value.as_str().unwrap())
        .unwrap()
        .with_timezone(&Utc)
}

#[tokio::test]
async fn test_stats_success() {
    let state = common::create_test_state();
    let app = Router::new()
        .route("/shorturls/{code}", get(stats_handler))
        .with_state(state.clone());

    let server = TestServer::new(app).unwrap();

    common::create_test_record(&state, "testcode", "https://example.com").await;

    state
        .registry
        .resolve("testcode", Some("https://google.com"), "10.0.0.1".to_string())
        .await
        .unwrap();
    state
        .registry
        .resolve("testcode", None, "10.0.0.2".to_string())
        .await
        .unwrap();

    let response = server.get("/shorturls/testcode").await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["longUrl"], "https://example.com");
    assert!(json["createdAt"].is_string());
    assert!(json["expiry"].is_string());
    assert_eq!(json["clickCount"], 2);

    let clicks = json["clicks"].as_array().unwrap();
    assert_eq!(clicks.len(), 2);
    assert_eq!(clicks[0]["referrer"], "https://google.com");
    assert_eq!(clicks[0]["origin"], "10.0.0.1");
    assert_eq!(clicks[1]["referrer"], "direct");
    assert_eq!(clicks[1]["origin"], "10.0.0.2");
    assert!(clicks[0]["timestamp"].is_string());
}

#[tokio::test]
async fn test_stats_not_found() {
    let state = common::create_test_state();
    let app = Router::new()
        .route("/shorturls/{code}", get(stats_handler))
        .with_state(state);

    let server = TestServer::new(app).unwrap();
    let response = server.get("/shorturls/notfound").await;

    response.assert_status_not_found();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["code"], "not_found");
}

#[tokio::test]
async fn test_stats_fresh_record_has_no_clicks() {
    let state = common::create_test_state();
    let app = Router::new()
        .route("/shorturls/{code}", get(stats_handler))
        .with_state(state.clone());

    let server = TestServer::new(app).unwrap();

    common::create_test_record(&state, "untouched", "https://example.com").await;

    let response = server.get("/shorturls/untouched").await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["clickCount"], 0);
    assert!(json["clicks"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_stats_expired_record_still_inspectable() {
    let state = common::create_test_state();
    let app = Router::new()
        .route("/shorturls/{code}", get(stats_handler))
        .with_state(state.clone());

    let server = TestServer::new(app).unwrap();

    common::create_expired_record(&state, "bygone", "https://example.com/archived").await;

    let response = server.get("/shorturls/bygone").await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["longUrl"], "https://example.com/archived");

    let expiry = parse_timestamp(&json["expiry"]);
    assert!(expiry < Utc::now());
}

#[tokio::test]
async fn test_stats_click_count_matches_clicks_array() {
    let state = common::create_test_state();
    let app = Router::new()
        .route("/shorturls/{code}", get(stats_handler))
        .with_state(state.clone());

    let server = TestServer::new(app).unwrap();

    common::create_test_record(&state, "counted", "https://example.com").await;

    for i in 0..5 {
        state
            .registry
            .resolve("counted", None, format!("192.168.1.{i}"))
            .await
            .unwrap();
    }

    let response = server.get("/shorturls/counted").await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    let clicks = json["clicks"].as_array().unwrap();
    assert_eq!(json["clickCount"], 5);
    assert_eq!(clicks.len(), 5);
}

#[tokio::test]
async fn test_stats_expiry_reflects_validity() {
    let state = common::create_test_state();
    let app = Router::new()
        .route("/shorturls/{code}", get(stats_handler))
        .with_state(state.clone());

    let server = TestServer::new(app).unwrap();

    common::create_record_with_validity(&state, "timed", "https://example.com", 45).await;

    let response = server.get("/shorturls/timed").await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    let created_at = parse_timestamp(&json["createdAt"]);
    let expiry = parse_timestamp(&json["expiry"]);
    assert_eq!(expiry - created_at, Duration::minutes(45));
}
