mod common;

use common::TestApp;
use serde_json::{json, Value};

#[tokio::test]
async fn get_transcript_templates_url() {
    let app = TestApp::spawn().await;

    let body = app
        .relay_client()
        .get_transcript("https://www.youtube.com/watch?v=dQw4w9WgXcQ", Some("de"))
        .await
        .unwrap();

    assert_eq!(
        body,
        json!({
            "transcript": "Mock transcript for https://www.youtube.com/watch?v=dQw4w9WgXcQ",
            "language": "de"
        })
    );
}

#[tokio::test]
async fn get_transcript_defaults_language_and_url() {
    let app = TestApp::spawn().await;

    let response = app
        .post_json("/youtube", &json!({ "action": "get_transcript" }))
        .await;

    assert_eq!(response.status().as_u16(), 200);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["transcript"], "Mock transcript for ");
    assert_eq!(body["language"], "en");
}

#[tokio::test]
async fn unsupported_youtube_action_is_rejected() {
    let app = TestApp::spawn().await;

    let response = app
        .post_json(
            "/youtube",
            &json!({ "action": "search", "parameters": { "q": "rust" } }),
        )
        .await;

    assert_eq!(response.status().as_u16(), 400);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body, json!({ "error": "Unsupported YouTube action: search" }));
}
