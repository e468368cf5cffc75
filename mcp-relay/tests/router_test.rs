//! Router-level tests that run without binding a socket.

mod common;

use axum::{
    body::Body,
    http::{Request, StatusCode},
    routing::get,
    Router,
};
use http_body_util::BodyExt;
use mcp_relay::error::GENERIC_ERROR_MESSAGE;
use mcp_relay::startup::{apply_middleware, build_router};
use mcp_relay::AppState;
use serde_json::{json, Value};
use tower::util::ServiceExt;

async fn send(request: Request<Body>) -> (StatusCode, Value) {
    send_to(build_router(AppState::new(common::test_config())), request).await
}

async fn send_to(app: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&bytes).unwrap())
}

#[tokio::test]
async fn supabase_body_is_parsed_without_content_type() {
    let (status, body) = send(
        Request::builder()
            .method("POST")
            .uri("/supabase")
            .body(Body::from(r#"{"action":"read_records","parameters":{"table":"users"}}"#))
            .unwrap(),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn supabase_missing_parameters_reports_missing_table() {
    let (status, body) = send(
        Request::builder()
            .method("POST")
            .uri("/supabase")
            .header("content-type", "application/json")
            .body(Body::from(r#"{"action":"delete_record"}"#))
            .unwrap(),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({ "error": "Table name is required" }));
}

#[tokio::test]
async fn specific_routes_win_over_service_wildcard() {
    let (status, body) = send(
        Request::builder()
            .method("POST")
            .uri("/youtube")
            .body(Body::from(r#"{"action":"get_transcript","parameters":{"url":"u"}}"#))
            .unwrap(),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["transcript"], "Mock transcript for u");
}

#[tokio::test]
async fn health_route_works_without_listener() {
    let (status, body) = send(
        Request::builder()
            .uri("/health")
            .body(Body::empty())
            .unwrap(),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn supabase_create_spreads_string_data() {
    let (status, body) = send(
        Request::builder()
            .method("POST")
            .uri("/supabase")
            .body(Body::from(
                r#"{"action":"create_record","parameters":{"table":"t","data":"abc"}}"#,
            ))
            .unwrap(),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let record = &body["data"][0];
    assert_eq!(record["0"], "a");
    assert_eq!(record["1"], "b");
    assert_eq!(record["2"], "c");
    assert_eq!(record["id"], 999);
}

async fn explode() -> &'static str {
    panic!("upstream exploded")
}

async fn explode_opaque() -> &'static str {
    std::panic::panic_any(42_u32)
}

fn panicking_app() -> Router {
    let router = Router::new()
        .route("/explode", get(explode))
        .route("/explode-opaque", get(explode_opaque));
    apply_middleware(router, &common::test_config())
}

#[tokio::test]
async fn handler_panic_becomes_internal_error() {
    let (status, body) = send_to(
        panicking_app(),
        Request::builder()
            .uri("/explode")
            .body(Body::empty())
            .unwrap(),
    )
    .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({ "error": "upstream exploded" }));
}

#[tokio::test]
async fn panic_without_message_uses_fallback() {
    let (status, body) = send_to(
        panicking_app(),
        Request::builder()
            .uri("/explode-opaque")
            .body(Body::empty())
            .unwrap(),
    )
    .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({ "error": GENERIC_ERROR_MESSAGE }));
}
