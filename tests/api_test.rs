use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use tower::ServiceExt;
use vetdir_sanitizer::{
    api::{handlers::AppState, routes::create_router},
    config::{FieldLimits, ServerConfig, Settings},
};

fn test_app() -> Router {
    let settings = Settings {
        server: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 3000,
            api_rate_limit: 100,
            max_request_body_size: 1048576,
        },
        limits: FieldLimits {
            max_input_bytes: 4096,
            ..FieldLimits::default()
        },
    };
    create_router(AppState { settings })
}

async fn post_json(app: Router, uri: &str, body: Value) -> (StatusCode, Value) {
    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, value)
}

#[tokio::test]
async fn test_sanitize_plain_text() {
    let (status, body) = post_json(
        test_app(),
        "/api/sanitize",
        json!({ "text": "<script>bad</script><img src=x onerror=alert(1)>" }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["sanitized"], "&lt;img src=x &gt;");
    assert_eq!(body["context"], "plain_text");
    assert_eq!(body["modified"], true);
}

#[tokio::test]
async fn test_sanitize_null_text() {
    let (status, body) = post_json(test_app(), "/api/sanitize", json!({ "text": null })).await;

    assert_eq!(status, StatusCode::OK);
    assert!(body["sanitized"].is_null());
    assert_eq!(body["modified"], false);
}

#[tokio::test]
async fn test_sanitize_markup_context() {
    let (status, body) = post_json(
        test_app(),
        "/api/sanitize",
        json!({ "text": "<b>Bold</b><script>x</script>", "context": "markup" }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["sanitized"], "<b>Bold</b>");
}

#[tokio::test]
async fn test_sanitize_with_max_length() {
    let (status, body) = post_json(
        test_app(),
        "/api/sanitize",
        json!({ "text": "A".repeat(200), "max_length": 100 }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["sanitized"].as_str().unwrap().len(), 100);
}

#[tokio::test]
async fn test_sanitize_max_length_rejected_for_markup() {
    let (status, body) = post_json(
        test_app(),
        "/api/sanitize",
        json!({ "text": "<b>x</b>", "context": "markup", "max_length": 3 }),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("max_length"));
}

#[tokio::test]
async fn test_sanitize_oversized_input_rejected() {
    let (status, _) = post_json(
        test_app(),
        "/api/sanitize",
        json!({ "text": "x".repeat(5000) }),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_scan() {
    let (status, body) = post_json(
        test_app(),
        "/api/scan",
        json!({ "text": "<a href=javascript:go() onclick=x>" }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["dangerous"], true);
    assert_eq!(body["findings"], json!(["event_handler", "url_scheme"]));
}

#[tokio::test]
async fn test_profile_form() {
    let (status, body) = post_json(
        test_app(),
        "/api/forms/profile",
        json!({
            "first_name": "<b>Dana</b>",
            "last_name": "O'Neil",
            "city": "Austin"
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["first_name"], "&lt;b&gt;Dana&lt;&#x2F;b&gt;");
    assert_eq!(body["last_name"], "O&#x27;Neil");
    assert_eq!(body["city"], "Austin");
    assert!(body["address"].is_null());
}

#[tokio::test]
async fn test_saved_resource_form_rejects_script_link() {
    let (status, _) = post_json(
        test_app(),
        "/api/forms/saved-resource",
        json!({ "resource_id": 12, "link": "javascript:alert(1)" }),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_saved_resource_form() {
    let (status, body) = post_json(
        test_app(),
        "/api/forms/saved-resource",
        json!({ "resource_id": 12, "notes": "Ask about <iframe src=x>PTSD program" }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["resource_id"], 12);
    assert_eq!(body["notes"], "Ask about PTSD program");
}

#[tokio::test]
async fn test_readiness() {
    let response = test_app()
        .oneshot(Request::builder().uri("/ready").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body["ready"], true);
}
