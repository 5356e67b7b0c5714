//! Order creation and capture handlers.

use std::sync::Arc;

use axum::body::Bytes;
use axum::extract::{Path, State};
use axum::Json;
use serde::Deserialize;

use checkout_core::{OrderRequest, Plan};

use crate::error::ApiError;
use crate::state::AppState;

/// Create order request body.
#[derive(Debug, Default, Deserialize)]
pub struct CreateOrderBody {
    /// Requested plan (`"basic"` or `"pro"`, default: basic).
    #[serde(default)]
    pub plan_type: Option<String>,
}

impl CreateOrderBody {
    /// Parse a request body leniently.
    ///
    /// An empty or unparseable body (including a non-string `plan_type`) yields the
    /// default selection rather than an error.
    #[must_use]
    pub fn from_bytes(body: &[u8]) -> Self {
        if body.iter().all(u8::is_ascii_whitespace) {
            return Self::default();
        }

        serde_json::from_slice(body).unwrap_or_else(|e| {
            tracing::debug!(error = %e, "Unreadable order body, using default plan");
            Self::default()
        })
    }

    /// The plan this body selects.
    #[must_use]
    pub fn plan(&self) -> Plan {
        Plan::from_selection(self.plan_type.as_deref())
    }
}

/// Create a PayPal order for the selected plan.
///
/// Responds with PayPal's order representation unchanged.
pub async fn create_order(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> Result<Json<serde_json::Value>, ApiError> {
    let plan = CreateOrderBody::from_bytes(&body).plan();
    let request = OrderRequest::for_plan(plan);

    tracing::info!(plan = %plan, amount = plan.pricing().amount, "Creating order");

    let order = state.orders.create_order(&request).await?;

    tracing::info!(
        plan = %plan,
        order_id = ?order.get("id").and_then(serde_json::Value::as_str),
        "Order created"
    );

    Ok(Json(order))
}

/// Capture payment for an order.
///
/// Responds with PayPal's capture representation unchanged, whether or not the
/// capture itself was completed.
pub async fn capture_order(
    State(state): State<Arc<AppState>>,
    Path(order_id): Path<String>,
) -> Result<Json<serde_json::Value>, ApiError> {
    tracing::info!(order_id = %order_id, "Capturing order");

    let capture = state.orders.capture_order(&order_id).await?;

    tracing::info!(
        order_id = %order_id,
        status = ?capture.get("status").and_then(serde_json::Value::as_str),
        "Order capture relayed"
    );

    Ok(Json(capture))
}
