//! PayPal API types.

use std::str::FromStr;

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// Seconds before expiry at which a cached token is considered stale.
const TOKEN_REFRESH_MARGIN_SECS: i64 = 60;

/// Longest token lifetime honoured; PayPal issues tokens valid for hours.
const MAX_TOKEN_LIFETIME_SECS: i64 = 24 * 60 * 60;

/// PayPal deployment the credentials belong to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PayPalEnvironment {
    /// Sandbox (test) environment.
    #[default]
    Sandbox,
    /// Live (production) environment.
    Live,
}

impl PayPalEnvironment {
    /// Base URL of the REST API for this environment.
    #[must_use]
    pub const fn api_base_url(self) -> &'static str {
        match self {
            Self::Sandbox => "https://api-m.sandbox.paypal.com",
            Self::Live => "https://api-m.paypal.com",
        }
    }

    /// Lowercase name of the environment.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Sandbox => "sandbox",
            Self::Live => "live",
        }
    }
}

impl FromStr for PayPalEnvironment {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sandbox" => Ok(Self::Sandbox),
            "live" | "production" => Ok(Self::Live),
            other => Err(format!("unknown PayPal environment: {other}")),
        }
    }
}

/// OAuth2 client-credentials token response.
#[derive(Debug, Clone, Deserialize)]
pub struct TokenResponse {
    /// Bearer token for subsequent API calls.
    pub access_token: String,
    /// Token type (always `Bearer`).
    #[serde(default)]
    pub token_type: String,
    /// Lifetime of the token in seconds.
    pub expires_in: i64,
}

/// Access token held by the client between calls.
#[derive(Clone)]
pub(crate) struct CachedToken {
    pub(crate) access_token: String,
    pub(crate) expires_at: DateTime<Utc>,
}

impl CachedToken {
    pub(crate) fn from_response(response: TokenResponse, now: DateTime<Utc>) -> Self {
        Self {
            access_token: response.access_token,
            expires_at: now
                + Duration::seconds(response.expires_in.clamp(0, MAX_TOKEN_LIFETIME_SECS)),
        }
    }

    /// Whether the token can still be used at `now`.
    pub(crate) fn is_fresh(&self, now: DateTime<Utc>) -> bool {
        now + Duration::seconds(TOKEN_REFRESH_MARGIN_SECS) < self.expires_at
    }
}

impl std::fmt::Debug for CachedToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CachedToken")
            .field("access_token", &"[redacted]")
            .field("expires_at", &self.expires_at)
            .finish()
    }
}

/// OAuth error body returned by the token endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct OAuthErrorResponse {
    /// Error code (e.g. `invalid_client`).
    pub error: String,
    /// Error description.
    #[serde(default)]
    pub error_description: Option<String>,
}

/// Error body returned by the REST API.
#[derive(Debug, Clone, Deserialize)]
pub struct PayPalErrorResponse {
    /// Error name (e.g. `UNPROCESSABLE_ENTITY`).
    pub name: String,
    /// Error message.
    #[serde(default)]
    pub message: String,
    /// PayPal debug ID for support requests.
    #[serde(default)]
    pub debug_id: Option<String>,
    /// Issue details.
    #[serde(default)]
    pub details: Vec<PayPalErrorDetail>,
}

/// A single issue inside a PayPal error body.
#[derive(Debug, Clone, Deserialize)]
pub struct PayPalErrorDetail {
    /// Issue code (e.g. `INSTRUMENT_DECLINED`).
    pub issue: String,
    /// Issue description.
    #[serde(default)]
    pub description: Option<String>,
}
