//! Health endpoint integration tests.

mod common;

use common::TestHarness;

#[tokio::test]
async fn health_check_returns_ok() {
    let harness = TestHarness::new().await;

    let response = harness.server.get("/health").await;

    response.assert_status_ok();
}

#[tokio::test]
async fn health_check_returns_json() {
    let harness = TestHarness::new().await;

    let response = harness.server.get("/health").await;

    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    assert_eq!(body["status"], "ok");
    assert_eq!(body["service"], "checkout-service");
    assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
    assert_eq!(body["paypal_environment"], "sandbox");
}

#[tokio::test]
async fn responses_allow_any_origin_by_default() {
    let harness = TestHarness::new().await;

    let response = harness
        .server
        .get("/health")
        .add_header("origin", "https://tutor.example")
        .await;

    response.assert_status_ok();
    assert_eq!(response.header("access-control-allow-origin"), "*");
}

#[tokio::test]
async fn health_check_does_not_touch_paypal() {
    let harness = TestHarness::new().await;

    harness.server.get("/health").await.assert_status_ok();

    let requests = harness.paypal.received_requests().await.unwrap_or_default();
    assert!(requests.is_empty());
}
