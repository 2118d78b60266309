use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Request, StatusCode, header},
};
use quiz_server::{AppState, create_router};
use serde_json::{Value, json};
use tower::ServiceExt;

async fn post_json(router: &Router, body: Value) -> (StatusCode, Value) {
    let request = Request::builder()
        .method("POST")
        .uri("/mcp")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();

    let response = router.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::Null)
    };
    (status, value)
}

#[tokio::test]
async fn test_health() {
    let router = create_router(AppState::in_memory());
    let request = Request::builder()
        .uri("/health")
        .body(Body::empty())
        .unwrap();

    let response = router.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body, json!({"status": "healthy"}));
}

#[tokio::test]
async fn test_welcome_without_context() {
    let router = create_router(AppState::in_memory());
    let (status, body) = post_json(&router, json!({"query": "hello"})).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({
            "response": "Welcome to the Personality Test. Type 'start test' to begin.",
            "context": {"session_id": "default"}
        })
    );
}

#[tokio::test]
async fn test_full_test_over_http() {
    let router = create_router(AppState::in_memory());
    let context = json!({"session_id": "http-session"});

    let (_, start) = post_json(&router, json!({"query": "start test", "context": context})).await;
    assert_eq!(start["context"]["current_question"], 1);
    assert_eq!(start["context"]["total_questions"], 20);

    let mut last = Value::Null;
    for _ in 0..20 {
        let (status, body) =
            post_json(&router, json!({"query": "answer: 1", "context": context})).await;
        assert_eq!(status, StatusCode::OK);
        last = body;
    }
    assert_eq!(
        last["context"],
        json!({"session_id": "http-session", "completed": true})
    );

    let (_, results) = post_json(&router, json!({"query": "results", "context": context})).await;
    assert_eq!(results["context"]["personality_type"], "INFP");
    assert!(results["response"]
        .as_str()
        .unwrap()
        .starts_with("Your personality type is: INFP"));
}

#[tokio::test]
async fn test_null_context_is_accepted() {
    let router = create_router(AppState::in_memory());
    let (status, body) = post_json(&router, json!({"query": "start test", "context": null})).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["context"]["session_id"], "default");
}

#[tokio::test]
async fn test_missing_query_is_rejected() {
    let router = create_router(AppState::in_memory());
    let (status, _) = post_json(&router, json!({"context": {"session_id": "x"}})).await;
    assert!(status.is_client_error());
}
