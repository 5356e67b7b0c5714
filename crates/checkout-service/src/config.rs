//! Service configuration.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::paypal::PayPalEnvironment;

/// Errors raised while loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// A required setting is missing.
    #[error("missing required setting: {0}")]
    Missing(&'static str),

    /// A setting has an unusable value.
    #[error("invalid value for {name}: {reason}")]
    Invalid {
        /// Setting name.
        name: &'static str,
        /// Why the value was rejected.
        reason: String,
    },
}

/// PayPal credentials and endpoint selection.
#[derive(Clone)]
pub struct PayPalConfig {
    /// OAuth client ID.
    pub client_id: String,

    /// OAuth client secret.
    pub client_secret: String,

    /// Sandbox or live (default: sandbox).
    pub environment: PayPalEnvironment,

    /// Explicit API base URL, overriding the environment's default.
    pub api_base: Option<String>,
}

impl PayPalConfig {
    /// Create a sandbox configuration for the given credentials.
    #[must_use]
    pub fn new(client_id: impl Into<String>, client_secret: impl Into<String>) -> Self {
        Self {
            client_id: client_id.into(),
            client_secret: client_secret.into(),
            environment: PayPalEnvironment::default(),
            api_base: None,
        }
    }

    /// API base URL to send requests to.
    #[must_use]
    pub fn api_base_url(&self) -> &str {
        self.api_base
            .as_deref()
            .unwrap_or_else(|| self.environment.api_base_url())
    }
}

impl std::fmt::Debug for PayPalConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PayPalConfig")
            .field("client_id", &self.client_id)
            .field("client_secret", &"[redacted]")
            .field("environment", &self.environment)
            .field("api_base", &self.api_base)
            .finish()
    }
}

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct ServiceConfig {
    /// Host to bind (default: "0.0.0.0").
    pub listen_host: String,

    /// Port to listen on (default: 8080).
    pub listen_port: u16,

    /// Directory served as static content (default: "public").
    pub static_dir: PathBuf,

    /// Document served at `/` (default: "index.html").
    pub index_file: String,

    /// PayPal settings.
    pub paypal: PayPalConfig,

    /// CORS allowed origins.
    pub cors_origins: Vec<String>,

    /// Maximum request body size in bytes.
    pub max_body_bytes: usize,

    /// Request timeout in seconds.
    pub request_timeout_seconds: u64,
}

/// PayPal secrets file structure.
#[derive(Debug, Deserialize)]
pub struct PayPalSecrets {
    client_id: String,
    client_secret: String,
    #[serde(default)]
    environment: Option<String>,
}

impl ServiceConfig {
    /// Create a configuration with default settings around the given PayPal config.
    #[must_use]
    pub fn new(paypal: PayPalConfig) -> Self {
        Self {
            listen_host: "0.0.0.0".into(),
            listen_port: 8080,
            static_dir: PathBuf::from("public"),
            index_file: "index.html".into(),
            paypal,
            cors_origins: vec!["*".into()],
            max_body_bytes: 1024 * 1024, // 1MB
            request_timeout_seconds: 30,
        }
    }

    /// Load configuration from environment variables and secrets files.
    ///
    /// # Errors
    ///
    /// Returns an error if PayPal credentials are missing or a setting cannot be parsed.
    pub fn from_env() -> Result<Self, ConfigError> {
        let secrets = load_paypal_secrets();
        Self::from_sources(|name| std::env::var(name).ok(), secrets)
    }

    /// Build configuration from a variable lookup and optional secrets file contents.
    ///
    /// Secrets file values take precedence over `PAYPAL_CLIENT_ID` and
    /// `PAYPAL_CLIENT_SECRET`. There are no default credentials.
    ///
    /// # Errors
    ///
    /// Returns an error if PayPal credentials are missing or a setting cannot be parsed.
    pub fn from_sources<F>(var: F, secrets: Option<PayPalSecrets>) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |name: &str| var(name).and_then(present);

        let (client_id, client_secret, secrets_environment) = match secrets {
            Some(secrets) => (
                present(secrets.client_id),
                present(secrets.client_secret),
                secrets.environment.and_then(present),
            ),
            None => (
                non_empty("PAYPAL_CLIENT_ID"),
                non_empty("PAYPAL_CLIENT_SECRET"),
                None,
            ),
        };

        let client_id = client_id.ok_or(ConfigError::Missing("PAYPAL_CLIENT_ID"))?;
        let client_secret = client_secret.ok_or(ConfigError::Missing("PAYPAL_CLIENT_SECRET"))?;

        let environment = match secrets_environment.or_else(|| non_empty("PAYPAL_ENVIRONMENT")) {
            Some(value) => value
                .parse::<PayPalEnvironment>()
                .map_err(|reason| ConfigError::Invalid {
                    name: "PAYPAL_ENVIRONMENT",
                    reason,
                })?,
            None => PayPalEnvironment::default(),
        };

        let mut config = Self::new(PayPalConfig {
            client_id,
            client_secret,
            environment,
            api_base: non_empty("PAYPAL_API_BASE"),
        });

        if let Some(host) = non_empty("LISTEN_HOST") {
            config.listen_host = host;
        }
        if let Some(port) = non_empty("LISTEN_PORT").or_else(|| non_empty("PORT")) {
            config.listen_port = parse_setting("LISTEN_PORT", &port)?;
        }
        if let Some(dir) = non_empty("STATIC_DIR") {
            config.static_dir = PathBuf::from(dir);
        }
        if let Some(index) = non_empty("INDEX_FILE") {
            config.index_file = index;
        }
        if let Some(origins) = non_empty("CORS_ORIGINS") {
            config.cors_origins = origins
                .split(',')
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect();
        }
        if let Some(bytes) = non_empty("MAX_BODY_BYTES") {
            config.max_body_bytes = parse_setting("MAX_BODY_BYTES", &bytes)?;
        }
        if let Some(seconds) = non_empty("REQUEST_TIMEOUT_SECONDS") {
            config.request_timeout_seconds = parse_setting("REQUEST_TIMEOUT_SECONDS", &seconds)?;
        }

        Ok(config)
    }

    /// Socket address string to bind.
    #[must_use]
    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.listen_host, self.listen_port)
    }

    /// Path of the document served at `/`.
    #[must_use]
    pub fn index_path(&self) -> PathBuf {
        self.static_dir.join(&self.index_file)
    }
}

/// Treat blank values as absent.
fn present(value: String) -> Option<String> {
    if value.trim().is_empty() {
        None
    } else {
        Some(value)
    }
}

fn parse_setting<T>(name: &'static str, value: &str) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    value.trim().parse().map_err(|e: T::Err| ConfigError::Invalid {
        name,
        reason: format!("{value:?}: {e}"),
    })
}

/// Load PayPal secrets from the first secrets file found.
fn load_paypal_secrets() -> Option<PayPalSecrets> {
    let secret_paths = [".secrets/paypal.json", "../.secrets/paypal.json"];

    for path in &secret_paths {
        match load_secrets_file::<PayPalSecrets>(Path::new(path)) {
            Ok(secrets) => {
                tracing::info!(path = %path, "Loaded PayPal secrets from file");
                return Some(secrets);
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
            Err(e) => tracing::warn!(path = %path, error = %e, "Ignoring unreadable secrets file"),
        }
    }

    tracing::debug!("PayPal secrets file not found, using environment variables");
    None
}

/// Load secrets from a JSON file.
pub fn load_secrets_file<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T, std::io::Error> {
    let contents = std::fs::read_to_string(path)?;
    serde_json::from_str(&contents)
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))
}
