//! Integration Tests for API Endpoints
//!
//! Tests full request/response cycle for each endpoint.

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use serde_json::Value;
use simple_cache::{api::create_router, AppState, CacheProvider};
use tower::ServiceExt;

// == Helper Functions ==

fn create_test_app() -> (Router, AppState) {
    let state = AppState::default();
    (create_router(state.clone()), state)
}

async fn body_to_json(body: Body) -> Value {
    let bytes = axum::body::to_bytes(body, usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

async fn send(app: &Router, method: &str, uri: &str, body: Option<&str>) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(json) => {
            builder = builder.header("content-type", "application/json");
            Body::from(json.to_string())
        }
        None => Body::empty(),
    };

    let response = app
        .clone()
        .oneshot(builder.body(body).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::Null)
    };
    (status, json)
}

// == SET Endpoint Tests ==

#[tokio::test]
async fn test_set_endpoint_success() {
    let (app, _) = create_test_app();

    let response = app
        .oneshot(
            Request::builder()
                .method("PUT")
                .uri("/cache")
                .header("content-type", "application/json")
                .body(Body::from(r#"{"key":"greeting","content":"hello"}"#))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let json = body_to_json(response.into_body()).await;
    assert_eq!(json["stored"], true);
    assert!(json["message"].as_str().unwrap().contains("greeting"));
}

#[tokio::test]
async fn test_set_endpoint_with_minutes() {
    let (app, state) = create_test_app();

    let (status, json) = send(
        &app,
        "PUT",
        "/cache",
        Some(r#"{"key":"ttl_key","content":"v","minutes":30}"#),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["stored"], true);
    assert!(state.provider.has("simple-cache--ttl_key").unwrap());
}

#[tokio::test]
async fn test_set_endpoint_zero_minutes_not_stored() {
    let (app, state) = create_test_app();

    let (status, json) = send(
        &app,
        "PUT",
        "/cache",
        Some(r#"{"key":"ttl_key","content":"v","minutes":0}"#),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["stored"], false);
    assert!(state.provider.is_empty());
}

// == GET Endpoint Tests ==

#[tokio::test]
async fn test_get_endpoint_tagged_and_untagged() {
    let (app, _) = create_test_app();

    send(
        &app,
        "PUT",
        "/cache",
        Some(r#"{"key":"greeting","content":"hello","minutes":-1}"#),
    )
    .await;

    let (status, json) = send(&app, "GET", "/cache/greeting?tag=false", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["key"], "greeting");
    assert_eq!(json["cache_key"], "simple-cache--greeting");
    assert_eq!(json["content"], "hello");

    let (status, json) = send(&app, "GET", "/cache/greeting", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["content"], "hello<!-- cache -->");
}

#[tokio::test]
async fn test_get_endpoint_not_found() {
    let (app, _) = create_test_app();

    let (status, json) = send(&app, "GET", "/cache/nonexistent_key", None).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(json["error"].as_str().unwrap().contains("nonexistent_key"));
}

#[tokio::test]
async fn test_get_endpoint_disabled() {
    let (app, _) = create_test_app();
    send(
        &app,
        "PUT",
        "/cache",
        Some(r#"{"key":"greeting","content":"hello"}"#),
    )
    .await;

    let (status, json) = send(&app, "PUT", "/settings/disabled", Some(r#"{"disabled":true}"#)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["cache_disabled"], true);

    let (status, _) = send(&app, "GET", "/cache/greeting", None).await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);

    send(&app, "PUT", "/settings/disabled", Some(r#"{"disabled":false}"#)).await;
    let (status, _) = send(&app, "GET", "/cache/greeting", None).await;
    assert_eq!(status, StatusCode::OK);
}

// == Settings Endpoint Tests ==

#[tokio::test]
async fn test_custom_tag_scenario() {
    let (app, _) = create_test_app();
    send(
        &app,
        "PUT",
        "/cache",
        Some(r#"{"key":"greeting","content":"hello"}"#),
    )
    .await;

    let (status, json) = send(&app, "PUT", "/settings/tag", Some(r#"{"value":"[CACHED]"}"#)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["cache_tag"], "[CACHED]");

    let (_, json) = send(&app, "GET", "/cache/greeting", None).await;
    assert_eq!(json["content"], "hello[CACHED]");
}

#[tokio::test]
async fn test_prefix_change_strands_old_entries() {
    let (app, state) = create_test_app();
    send(
        &app,
        "PUT",
        "/cache",
        Some(r#"{"key":"greeting","content":"hello"}"#),
    )
    .await;

    let (_, json) = send(&app, "PUT", "/settings/prefix", Some(r#"{"value":"v2"}"#)).await;
    assert_eq!(json["key_prefix"], "v2");

    let (status, _) = send(&app, "GET", "/cache/greeting", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(state.provider.has("simple-cache--greeting").unwrap());

    let (_, json) = send(&app, "GET", "/settings", None).await;
    assert_eq!(json["key_prefix"], "v2");
    assert_eq!(json["cache_tag"], "<!-- cache -->");
    assert_eq!(json["cache_disabled"], false);
}

// == DELETE Endpoint Tests ==

#[tokio::test]
async fn test_delete_endpoint() {
    let (app, _) = create_test_app();
    send(
        &app,
        "PUT",
        "/cache",
        Some(r#"{"key":"to_delete","content":"v"}"#),
    )
    .await;

    let (status, json) = send(&app, "DELETE", "/cache/to_delete", None).await;
    assert_eq!(status, StatusCode::OK);
    assert!(json["message"].as_str().unwrap().contains("deleted"));

    let (status, _) = send(&app, "DELETE", "/cache/to_delete", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_flush_removes_foreign_entries() {
    let (app, state) = create_test_app();
    send(&app, "PUT", "/cache", Some(r#"{"key":"a","content":"1"}"#)).await;
    state
        .provider
        .forever("someone-else", "x".to_string())
        .unwrap();

    let (status, _) = send(&app, "DELETE", "/cache", None).await;
    assert_eq!(status, StatusCode::OK);
    assert!(state.provider.is_empty());
}

#[tokio::test]
async fn test_namespace_clear_keeps_foreign_entries() {
    let (app, state) = create_test_app();
    send(&app, "PUT", "/cache", Some(r#"{"key":"a","content":"1"}"#)).await;
    send(&app, "PUT", "/cache", Some(r#"{"key":"b","content":"2"}"#)).await;
    state
        .provider
        .forever("someone-else", "x".to_string())
        .unwrap();

    let (status, json) = send(&app, "DELETE", "/namespace", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["removed"], 2);
    assert!(state.provider.has("someone-else").unwrap());
}

// == STATS / HEALTH Endpoint Tests ==

#[tokio::test]
async fn test_stats_endpoint() {
    let (app, _) = create_test_app();
    send(&app, "PUT", "/cache", Some(r#"{"key":"k","content":"v"}"#)).await;
    send(&app, "GET", "/cache/k", None).await;
    send(&app, "GET", "/cache/missing", None).await;

    let (status, json) = send(&app, "GET", "/stats", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["hits"], 1);
    assert_eq!(json["misses"], 1);
    assert_eq!(json["writes"], 1);
    assert_eq!(json["total_entries"], 1);
    assert!((json["hit_rate"].as_f64().unwrap() - 0.5).abs() < 0.001);
}

#[tokio::test]
async fn test_health_endpoint() {
    let (app, _) = create_test_app();

    let (status, json) = send(&app, "GET", "/health", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["status"], "healthy");
    assert!(json.get("timestamp").is_some());
}

// == Error Response Tests ==

#[tokio::test]
async fn test_invalid_json_request() {
    let (app, _) = create_test_app();

    let (status, _) = send(&app, "PUT", "/cache", Some("not json")).await;

    // Axum rejects malformed JSON bodies with 400
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_empty_key_request() {
    let (app, _) = create_test_app();

    let (status, json) = send(&app, "PUT", "/cache", Some(r#"{"key":"","content":"v"}"#)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(json["error"].as_str().unwrap().contains("empty"));
}
