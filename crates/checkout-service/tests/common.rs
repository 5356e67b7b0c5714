//! Common test utilities for checkout integration tests.

#![allow(dead_code)] // Some utilities are used by different test files

use axum::Router;
use axum_test::TestServer;
use serde_json::json;
use tempfile::TempDir;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use checkout_service::{create_router, AppState, PayPalConfig, ServiceConfig};

/// Contents of the index document in the test content root.
pub const INDEX_HTML: &str =
    "<!DOCTYPE html>\n<html><head><title>PromptTutor</title></head><body>plans</body></html>\n";

/// Contents of a stylesheet in the test content root.
pub const APP_CSS: &str = "body { margin: 0; }\n";

/// Contents of a file placed outside the content root.
pub const SECRET: &str = "top-secret-do-not-serve";

/// Access token handed out by the mock token endpoint.
pub const ACCESS_TOKEN: &str = "A21AAtest-access-token";

/// Test harness containing everything needed for integration tests.
pub struct TestHarness {
    /// The test server for making HTTP requests.
    pub server: TestServer,
    /// Stand-in for the PayPal REST API.
    pub paypal: MockServer,
    /// Temporary directory holding the content root (kept alive for test duration).
    pub temp_dir: TempDir,
}

impl TestHarness {
    /// Create a harness whose PayPal mock hands out access tokens.
    pub async fn new() -> Self {
        Self::with_config(true, |_| {}).await
    }

    /// Create a harness whose PayPal mock has no token endpoint mounted.
    pub async fn without_token() -> Self {
        Self::with_config(false, |_| {}).await
    }

    /// Create a harness, adjusting the service configuration before startup.
    pub async fn with_config(mount_token: bool, configure: impl FnOnce(&mut ServiceConfig)) -> Self {
        let paypal = MockServer::start().await;
        if mount_token {
            mount_token_endpoint(&paypal).await;
        }

        let temp_dir = write_content_root();

        let mut paypal_config = PayPalConfig::new("test-client-id", "test-client-secret");
        paypal_config.api_base = Some(paypal.uri());

        let mut config = ServiceConfig::new(paypal_config);
        config.listen_host = "127.0.0.1".into();
        config.listen_port = 0;
        config.static_dir = temp_dir.path().join("public");
        configure(&mut config);

        let state = AppState::new(config).expect("Failed to create app state");
        let router: Router = create_router(state);
        let server = TestServer::new(router).expect("Failed to create test server");

        Self {
            server,
            paypal,
            temp_dir,
        }
    }

    /// Requests the PayPal mock received on a given path.
    pub async fn paypal_requests_to(&self, request_path: &str) -> Vec<wiremock::Request> {
        self.paypal
            .received_requests()
            .await
            .unwrap_or_default()
            .into_iter()
            .filter(|r| r.url.path() == request_path)
            .collect()
    }
}

/// Mount a token endpoint that accepts the test credentials.
pub async fn mount_token_endpoint(paypal: &MockServer) {
    Mock::given(method("POST"))
        .and(path("/v1/oauth2/token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(token_body(32_400)))
        .mount(paypal)
        .await;
}

/// Body of a successful token response.
pub fn token_body(expires_in: i64) -> serde_json::Value {
    json!({
        "scope": "https://uri.paypal.com/services/payments/payment",
        "access_token": ACCESS_TOKEN,
        "token_type": "Bearer",
        "app_id": "APP-80W284485P519543T",
        "expires_in": expires_in,
        "nonce": "2024-01-01T00:00:00ZnonceValue"
    })
}

/// A created order as PayPal represents it.
pub fn created_order(id: &str) -> serde_json::Value {
    json!({
        "id": id,
        "status": "CREATED",
        "intent": "CAPTURE",
        "links": [
            { "href": format!("https://api.sandbox.paypal.com/v2/checkout/orders/{id}"), "rel": "self", "method": "GET" },
            { "href": format!("https://www.sandbox.paypal.com/checkoutnow?token={id}"), "rel": "approve", "method": "GET" }
        ]
    })
}

/// A capture response as PayPal represents it.
pub fn captured_order(id: &str, capture_status: &str) -> serde_json::Value {
    json!({
        "id": id,
        "status": "COMPLETED",
        "purchase_units": [{
            "reference_id": "default",
            "payments": {
                "captures": [{
                    "id": "3C679366HH908993F",
                    "status": capture_status,
                    "amount": { "currency_code": "USD", "value": "9.99" }
                }]
            }
        }],
        "payer": { "payer_id": "QYR5Z8XDVJNXQ" }
    })
}

/// Lay out a content root with a sibling file that must never be served.
fn write_content_root() -> TempDir {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let public = temp_dir.path().join("public");
    std::fs::create_dir_all(public.join("css")).expect("Failed to create content root");
    std::fs::write(public.join("index.html"), INDEX_HTML).expect("Failed to write index");
    std::fs::write(public.join("css").join("app.css"), APP_CSS).expect("Failed to write css");
    std::fs::write(public.join("home.html"), "<p>home</p>").expect("Failed to write home");
    std::fs::write(temp_dir.path().join("secret.txt"), SECRET).expect("Failed to write secret");
    temp_dir
}
