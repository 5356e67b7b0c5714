//! Checkout page settings endpoint tests.

mod common;

use checkout_service::PayPalEnvironment;
use common::TestHarness;

#[tokio::test]
async fn config_exposes_client_id_and_currency() {
    let harness = TestHarness::new().await;

    let response = harness.server.get("/api/config").await;

    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    assert_eq!(body["client_id"], "test-client-id");
    assert_eq!(body["environment"], "sandbox");
    assert_eq!(body["currency"], "USD");
}

#[tokio::test]
async fn config_never_exposes_client_secret() {
    let harness = TestHarness::new().await;

    let response = harness.server.get("/api/config").await;

    response.assert_status_ok();
    assert!(!response.text().contains("test-client-secret"));
}

#[tokio::test]
async fn config_reports_live_environment() {
    let harness = TestHarness::with_config(true, |config| {
        config.paypal.environment = PayPalEnvironment::Live;
    })
    .await;

    let body: serde_json::Value = harness.server.get("/api/config").await.json();
    assert_eq!(body["environment"], "live");
}
