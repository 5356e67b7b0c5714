//! Public settings the checkout page needs to load the PayPal JS SDK.

use std::sync::Arc;

use axum::extract::State;
use axum::Json;
use serde::Serialize;

use checkout_core::CURRENCY_CODE;

use crate::paypal::PayPalEnvironment;
use crate::state::AppState;

/// Body of `GET /api/config`.
///
/// Only the client ID is exposed; PayPal publishes it in every SDK script URL anyway.
#[derive(Debug, Serialize)]
pub struct ClientConfig {
    /// OAuth client ID used as the SDK's `client-id` parameter.
    pub client_id: String,
    /// Sandbox or live.
    pub environment: PayPalEnvironment,
    /// Currency every plan is priced in.
    pub currency: &'static str,
}

/// Settings for the SDK script tag.
pub async fn client_config(State(state): State<Arc<AppState>>) -> Json<ClientConfig> {
    let paypal = &state.config.paypal;
    Json(ClientConfig {
        client_id: paypal.client_id.clone(),
        environment: paypal.environment,
        currency: CURRENCY_CODE,
    })
}
