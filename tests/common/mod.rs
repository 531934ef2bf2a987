#![allow(dead_code)]

use axum_test::TestServer;
use serde_json::{Value, json};
use snaplink::application::services::CodeOptions;
use snaplink::routes::router;
use snaplink::state::AppState;

pub fn create_test_state() -> AppState {
    AppState::new(CodeOptions::default(), None).unwrap()
}

pub fn create_test_state_with_base(base_url: &str) -> AppState {
    AppState::new(CodeOptions::default(), Some(base_url.to_string())).unwrap()
}

pub fn create_test_server(state: AppState) -> TestServer {
    TestServer::new(router(state)).unwrap()
}

pub async fn shorten(server: &TestServer, url: &str, custom_code: Option<&str>) -> Value {
    let body = match custom_code {
        Some(code) => json!({ "url": url, "custom_code": code }),
        None => json!({ "url": url }),
    };

    let response = server.post("/shorten").json(&body).await;
    response.assert_status_ok();
    response.json::<Value>()
}

pub async fn stats(server: &TestServer) -> Value {
    let response = server.get("/stats").await;
    response.assert_status_ok();
    response.json::<Value>()
}
