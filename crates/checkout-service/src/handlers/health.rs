//! Liveness endpoint.

use std::sync::Arc;

use axum::extract::State;
use axum::Json;
use serde::Serialize;

use crate::paypal::PayPalEnvironment;
use crate::state::AppState;

/// Body of `GET /health`.
#[derive(Debug, Serialize)]
pub struct HealthStatus {
    /// Always `"ok"` while the process serves requests.
    pub status: &'static str,
    /// Crate name of the running binary.
    pub service: &'static str,
    /// Crate version of the running binary.
    pub version: &'static str,
    /// PayPal deployment the service is configured against.
    pub paypal_environment: PayPalEnvironment,
}

/// Report liveness without calling PayPal.
pub async fn health(State(state): State<Arc<AppState>>) -> Json<HealthStatus> {
    Json(HealthStatus {
        status: "ok",
        service: env!("CARGO_PKG_NAME"),
        version: env!("CARGO_PKG_VERSION"),
        paypal_environment: state.config.paypal.environment,
    })
}
