//! PayPal integration for order creation and capture.
//!
//! PayPal handles:
//! - Buyer approval of orders
//! - Authorization and capture of funds
//! - Fraud checks and settlement
//!
//! This service never stores orders; PayPal's representation is relayed to the caller.

pub mod client;
pub mod types;

use async_trait::async_trait;
use checkout_core::OrderRequest;

pub use client::{PayPalClient, PayPalError};
pub use types::*;

/// The order operations the HTTP handlers depend on.
///
/// Implemented by [`PayPalClient`]; tests can substitute their own implementation.
#[async_trait]
pub trait OrdersApi: Send + Sync {
    /// Submit a new order and return the provider's order representation.
    async fn create_order(&self, request: &OrderRequest) -> Result<serde_json::Value, PayPalError>;

    /// Capture funds for an existing order and return the provider's capture representation.
    async fn capture_order(&self, order_id: &str) -> Result<serde_json::Value, PayPalError>;
}
