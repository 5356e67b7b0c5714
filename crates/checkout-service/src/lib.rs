//! Checkout HTTP Service.
//!
//! This crate serves the subscription page and brokers plan purchases through PayPal:
//!
//! - Static content (index page and assets)
//! - Order creation for the basic and pro plans
//! - Order capture once the buyer has approved payment
//!
//! # Payment flow
//!
//! The browser creates an order, the buyer approves it with PayPal, and the browser then
//! asks this service to capture it. PayPal owns every order; responses are relayed
//! without interpretation, so a declined capture still arrives with status 200 and the
//! client inspects the body.

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
// Allow some pedantic lints that are noisy for Axum handler functions
#![allow(clippy::missing_errors_doc)] // Axum handlers all return Result
#![allow(clippy::unused_async)] // Health handler needs async for routing

pub mod config;
pub mod error;
pub mod handlers;
pub mod paypal;
pub mod routes;
pub mod state;

pub use config::{ConfigError, PayPalConfig, ServiceConfig};
pub use error::ApiError;
pub use paypal::{OrdersApi, PayPalClient, PayPalEnvironment, PayPalError};
pub use routes::create_router;
pub use state::AppState;
