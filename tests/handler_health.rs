mod common;

#[tokio::test]
async fn test_health_endpoint_success() {
    let server = common::make_server(common::create_test_state().await);

    let response = server.get("/health").await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["status"], "healthy");
    assert_eq!(json["checks"]["storage"]["status"], "ok");
    assert_eq!(json["checks"]["config_store"]["message"], "2 domains configured");
    assert_eq!(json["checks"]["link_store"]["message"], "0 links");
}

#[tokio::test]
async fn test_health_endpoint_is_public() {
    let server = common::make_server(common::create_test_state().await);

    let response = server.get("/health").await;

    assert_ne!(response.status_code(), 401);
    assert!(response.json::<serde_json::Value>().get("version").is_some());
}
