//! PayPal API client implementation.

use std::time::Duration;

use async_trait::async_trait;
use chrono::Utc;
use reqwest::header::{HeaderValue, CONTENT_TYPE};
use reqwest::{Client, Response, StatusCode, Url};
use tokio::sync::RwLock;

use checkout_core::OrderRequest;

use super::types::{CachedToken, OAuthErrorResponse, PayPalErrorResponse, TokenResponse};
use super::OrdersApi;

/// Header asking PayPal to return the full resource in the response body.
const PREFER_REPRESENTATION: &str = "return=representation";

/// Error type for PayPal operations.
#[derive(Debug, thiserror::Error)]
pub enum PayPalError {
    /// HTTP request failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// PayPal API returned an error.
    #[error("PayPal API error: {status} {name} - {message}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Error name.
        name: String,
        /// Error message.
        message: String,
        /// PayPal debug ID.
        debug_id: Option<String>,
    },

    /// Obtaining an access token failed.
    #[error("PayPal authentication failed: {0}")]
    Auth(String),

    /// Serialization error.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Configuration(String),
}

/// PayPal REST API client.
///
/// Authenticates with OAuth2 client credentials. The access token is fetched on first
/// use and reused until it is about to expire.
pub struct PayPalClient {
    client: Client,
    base_url: Url,
    client_id: String,
    client_secret: String,
    token: RwLock<Option<CachedToken>>,
}

impl PayPalClient {
    /// Create a new PayPal client.
    ///
    /// # Arguments
    ///
    /// * `base_url` - REST API base URL (e.g. `"https://api-m.sandbox.paypal.com"`)
    /// * `client_id` - OAuth client ID
    /// * `client_secret` - OAuth client secret
    ///
    /// # Errors
    ///
    /// Returns an error if the base URL is invalid or the HTTP client cannot be built.
    pub fn new(
        base_url: &str,
        client_id: impl Into<String>,
        client_secret: impl Into<String>,
    ) -> Result<Self, PayPalError> {
        let base_url = Url::parse(base_url.trim_end_matches('/'))
            .map_err(|e| PayPalError::Configuration(format!("invalid base URL {base_url}: {e}")))?;

        if base_url.cannot_be_a_base() {
            return Err(PayPalError::Configuration(format!(
                "base URL {base_url} cannot carry a path"
            )));
        }

        let client = Client::builder().timeout(Duration::from_secs(30)).build()?;

        Ok(Self {
            client,
            base_url,
            client_id: client_id.into(),
            client_secret: client_secret.into(),
            token: RwLock::new(None),
        })
    }

    /// Base URL this client talks to.
    #[must_use]
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Create an order.
    ///
    /// Returns the order representation exactly as PayPal sent it.
    pub async fn create_order(
        &self,
        request: &OrderRequest,
    ) -> Result<serde_json::Value, PayPalError> {
        let url = self.endpoint(&["v2", "checkout", "orders"]);
        let token = self.access_token().await?;

        tracing::debug!(
            purchase_units = request.purchase_units.len(),
            "Creating PayPal order"
        );

        let response = self
            .client
            .post(url)
            .bearer_auth(&token)
            .header("Prefer", PREFER_REPRESENTATION)
            .header("PayPal-Request-Id", uuid::Uuid::new_v4().to_string())
            .json(request)
            .send()
            .await?;

        self.handle_response(response).await
    }

    /// Capture payment for a previously created order.
    ///
    /// The order ID is forwarded unchanged as a single path segment. A declined
    /// capture reported inside a successful response is returned as-is.
    pub async fn capture_order(&self, order_id: &str) -> Result<serde_json::Value, PayPalError> {
        let url = self.endpoint(&["v2", "checkout", "orders", order_id, "capture"]);
        let token = self.access_token().await?;

        tracing::debug!(order_id = %order_id, "Capturing PayPal order");

        let response = self
            .client
            .post(url)
            .bearer_auth(&token)
            .header(CONTENT_TYPE, HeaderValue::from_static("application/json"))
            .header("Prefer", PREFER_REPRESENTATION)
            .header("PayPal-Request-Id", uuid::Uuid::new_v4().to_string())
            .send()
            .await?;

        self.handle_response(response).await
    }

    /// Get a valid access token, fetching a new one if the cached token is stale.
    async fn access_token(&self) -> Result<String, PayPalError> {
        {
            let cached = self.token.read().await;
            if let Some(token) = cached.as_ref().filter(|t| t.is_fresh(Utc::now())) {
                return Ok(token.access_token.clone());
            }
        }

        let mut cached = self.token.write().await;

        // Another request may have refreshed while we waited for the lock
        if let Some(token) = cached.as_ref().filter(|t| t.is_fresh(Utc::now())) {
            return Ok(token.access_token.clone());
        }

        let token = self.fetch_token().await?;
        let access_token = token.access_token.clone();
        *cached = Some(token);

        Ok(access_token)
    }

    /// Request a new token with the client-credentials grant.
    async fn fetch_token(&self) -> Result<CachedToken, PayPalError> {
        let url = self.endpoint(&["v1", "oauth2", "token"]);

        tracing::debug!("Requesting PayPal access token");

        let response = self
            .client
            .post(url)
            .basic_auth(&self.client_id, Some(&self.client_secret))
            .form(&[("grant_type", "client_credentials")])
            .send()
            .await?;

        let status = response.status();
        let body = response.bytes().await?;

        if !status.is_success() {
            let message = match serde_json::from_slice::<OAuthErrorResponse>(&body) {
                Ok(err) => match err.error_description {
                    Some(description) => format!("{} ({description})", err.error),
                    None => err.error,
                },
                Err(_) => format!("HTTP {status}"),
            };
            tracing::warn!(status = %status, error = %message, "PayPal token request rejected");
            return Err(PayPalError::Auth(message));
        }

        let token: TokenResponse = serde_json::from_slice(&body)?;
        tracing::debug!(expires_in = token.expires_in, "Obtained PayPal access token");

        Ok(CachedToken::from_response(token, Utc::now()))
    }

    /// Drop the cached token so the next call authenticates again.
    async fn invalidate_token(&self) {
        *self.token.write().await = None;
    }

    /// Build an API URL from path segments, percent-encoding each one.
    fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    /// Handle API response and convert errors.
    async fn handle_response<T: serde::de::DeserializeOwned>(
        &self,
        response: Response,
    ) -> Result<T, PayPalError> {
        let status = response.status();
        let header_debug_id = response
            .headers()
            .get("paypal-debug-id")
            .and_then(|v| v.to_str().ok())
            .map(String::from);
        let body = response.bytes().await?;

        tracing::debug!(
            status = %status,
            debug_id = ?header_debug_id,
            bytes = body.len(),
            "PayPal response received"
        );

        if status.is_success() {
            return Ok(serde_json::from_slice(&body)?);
        }

        if status == StatusCode::UNAUTHORIZED {
            self.invalidate_token().await;
        }

        let error = match serde_json::from_slice::<PayPalErrorResponse>(&body) {
            Ok(paypal_error) => {
                let issues: Vec<_> = paypal_error
                    .details
                    .iter()
                    .map(|d| d.issue.as_str())
                    .collect();
                tracing::warn!(
                    status = %status,
                    name = %paypal_error.name,
                    issues = ?issues,
                    debug_id = ?paypal_error.debug_id,
                    "PayPal API error"
                );
                PayPalError::Api {
                    status: status.as_u16(),
                    name: paypal_error.name,
                    message: paypal_error.message,
                    debug_id: paypal_error.debug_id.or(header_debug_id),
                }
            }
            Err(_) => PayPalError::Api {
                status: status.as_u16(),
                name: "UNKNOWN".to_string(),
                message: format!("HTTP {status}"),
                debug_id: header_debug_id,
            },
        };

        Err(error)
    }
}

impl std::fmt::Debug for PayPalClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PayPalClient")
            .field("base_url", &self.base_url.as_str())
            .field("client_id", &self.client_id)
            .field("client_secret", &"[redacted]")
            .finish_non_exhaustive()
    }
}

#[async_trait]
impl OrdersApi for PayPalClient {
    async fn create_order(&self, request: &OrderRequest) -> Result<serde_json::Value, PayPalError> {
        PayPalClient::create_order(self, request).await
    }

    async fn capture_order(&self, order_id: &str) -> Result<serde_json::Value, PayPalError> {
        PayPalClient::capture_order(self, order_id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client(base: &str) -> PayPalClient {
        PayPalClient::new(base, "client-id", "client-secret").unwrap()
    }

    #[test]
    fn endpoint_joins_segments() {
        let client = client("https://api-m.sandbox.paypal.com/");
        let url = client.endpoint(&["v2", "checkout", "orders"]);
        assert_eq!(
            url.as_str(),
            "https://api-m.sandbox.paypal.com/v2/checkout/orders"
        );
    }

    #[test]
    fn endpoint_keeps_base_path_prefix() {
        let client = client("http://localhost:9000/paypal");
        let url = client.endpoint(&["v1", "oauth2", "token"]);
        assert_eq!(url.as_str(), "http://localhost:9000/paypal/v1/oauth2/token");
    }

    #[test]
    fn order_id_is_a_single_segment() {
        let client = client("https://api-m.sandbox.paypal.com");
        let url = client.endpoint(&["v2", "checkout", "orders", "5O1/../x", "capture"]);
        assert_eq!(
            url.path(),
            "/v2/checkout/orders/5O1%2F..%2Fx/capture"
        );
    }

    #[test]
    fn rejects_invalid_base_url() {
        let err = PayPalClient::new("not a url", "id", "secret").unwrap_err();
        assert!(matches!(err, PayPalError::Configuration(_)));
    }

    #[test]
    fn debug_output_redacts_secret() {
        let client = client("https://api-m.sandbox.paypal.com");
        let debug = format!("{client:?}");
        assert!(debug.contains("client-id"));
        assert!(!debug.contains("client-secret"));
    }
}
