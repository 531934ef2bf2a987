mod common;

use serde_json::Value;

#[tokio::test]
async fn test_health_endpoint_success() {
    let server = common::create_test_server(common::create_test_state());

    let response = server.get("/health").await;

    response.assert_status_ok();
    let json = response.json::<Value>();
    assert_eq!(json["status"], "healthy");
    assert_eq!(json["checks"]["registry"]["status"], "ok");
}

#[tokio::test]
async fn test_health_reports_link_count() {
    let server = common::create_test_server(common::create_test_state());

    common::shorten(&server, "https://example.com", None).await;

    let json = server.get("/health").await.json::<Value>();
    assert_eq!(json["checks"]["registry"]["message"], "1 links");
}

#[tokio::test]
async fn test_health_reports_version() {
    let server = common::create_test_server(common::create_test_state());

    let json = server.get("/health").await.json::<Value>();
    assert_eq!(json["version"], env!("CARGO_PKG_VERSION"));
}
