//! Application state.

use std::sync::Arc;

use crate::config::ServiceConfig;
use crate::paypal::{OrdersApi, PayPalClient, PayPalError};

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    /// Service configuration.
    pub config: ServiceConfig,

    /// Payment provider used for order creation and capture.
    pub orders: Arc<dyn OrdersApi>,
}

impl AppState {
    /// Create a new application state backed by PayPal.
    ///
    /// # Errors
    ///
    /// Returns an error if the PayPal client cannot be created from the configuration.
    pub fn new(config: ServiceConfig) -> Result<Self, PayPalError> {
        let paypal = &config.paypal;
        let client = PayPalClient::new(
            paypal.api_base_url(),
            paypal.client_id.clone(),
            paypal.client_secret.clone(),
        )?;

        tracing::info!(
            environment = paypal.environment.as_str(),
            api_base = %client.base_url(),
            "PayPal integration enabled"
        );

        Ok(Self::with_orders(config, Arc::new(client)))
    }

    /// Create application state around an existing orders provider.
    #[must_use]
    pub fn with_orders(config: ServiceConfig, orders: Arc<dyn OrdersApi>) -> Self {
        Self { config, orders }
    }
}
