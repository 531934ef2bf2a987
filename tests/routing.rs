mod common;

use axum::body::{Body, to_bytes};
use axum::http::{Request, StatusCode, header};
use axum::response::Response;
use serde_json::{Value, json};
use snaplink::routes::app_router;
use snaplink::state::AppState;
use tower::ServiceExt;

async fn send(state: &AppState, request: Request<Body>) -> Response {
    app_router(state.clone()).oneshot(request).await.unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

async fn body_json(response: Response) -> Value {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn test_trailing_slash_reaches_static_route() {
    let state = common::create_test_state();

    let response = send(&state, get("/stats/")).await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["total_urls"], 0);
}

#[tokio::test]
async fn test_trailing_slash_on_shorten_and_redirect() {
    let state = common::create_test_state();

    let request = Request::builder()
        .method("POST")
        .uri("/shorten/")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(
            json!({ "url": "https://example.com/x", "custom_code": "x1" }).to_string(),
        ))
        .unwrap();
    let response = send(&state, request).await;
    assert_eq!(response.status(), StatusCode::OK);

    let response = send(&state, get("/x1/")).await;

    assert_eq!(response.status(), StatusCode::MOVED_PERMANENTLY);
    assert_eq!(
        response.headers()[header::LOCATION],
        "https://example.com/x"
    );
}

#[tokio::test]
async fn test_metrics_route_served_by_app_router() {
    let state = common::create_test_state();

    let response = send(&state, get("/metrics")).await;

    assert_eq!(response.status(), StatusCode::OK);
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    assert!(String::from_utf8_lossy(&bytes).contains("urls_created_total 0"));
}

#[tokio::test]
async fn test_unknown_code_through_app_router() {
    let state = common::create_test_state();

    let response = send(&state, get("/nope/")).await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let json = body_json(response).await;
    assert_eq!(json["detail"], "Short code not found");
}
