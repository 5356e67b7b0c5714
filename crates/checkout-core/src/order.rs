//! Order creation requests.
//!
//! These types mirror the request body of the provider's create-order call. The
//! resulting order itself is owned by the provider and never modeled here.

use serde::{Deserialize, Serialize};

use crate::plan::{Plan, PlanPricing};

/// How the provider should treat funds once the buyer approves the order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderIntent {
    /// Funds are captured in a separate, later call.
    Capture,
}

/// Monetary amount of a purchase unit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Amount {
    /// ISO 4217 currency code.
    pub currency_code: String,
    /// Decimal value as a string (e.g. `"19.99"`).
    pub value: String,
}

/// A priced line item attached to an order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PurchaseUnit {
    /// Amount to charge.
    pub amount: Amount,
    /// Purchase description shown to the buyer.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl From<PlanPricing> for PurchaseUnit {
    fn from(pricing: PlanPricing) -> Self {
        Self {
            amount: Amount {
                currency_code: pricing.currency_code.to_string(),
                value: pricing.amount.to_string(),
            },
            description: Some(pricing.description.to_string()),
        }
    }
}

/// Body of a create-order request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderRequest {
    /// Payment intent.
    pub intent: OrderIntent,
    /// Purchase units (always exactly one for plan purchases).
    pub purchase_units: Vec<PurchaseUnit>,
}

impl OrderRequest {
    /// Build a capture-intent order for a single plan purchase.
    #[must_use]
    pub fn for_plan(plan: Plan) -> Self {
        Self {
            intent: OrderIntent::Capture,
            purchase_units: vec![plan.pricing().into()],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn basic_order_has_single_capture_unit() {
        let request = OrderRequest::for_plan(Plan::Basic);
        assert_eq!(request.intent, OrderIntent::Capture);
        assert_eq!(request.purchase_units.len(), 1);

        let unit = &request.purchase_units[0];
        assert_eq!(unit.amount.value, "9.99");
        assert_eq!(unit.amount.currency_code, "USD");
        assert_eq!(
            unit.description.as_deref(),
            Some("Basic Plan Monthly Subscription")
        );
    }

    #[test]
    fn pro_order_serializes_to_provider_shape() {
        let value = serde_json::to_value(OrderRequest::for_plan(Plan::Pro)).unwrap();
        assert_eq!(
            value,
            json!({
                "intent": "CAPTURE",
                "purchase_units": [{
                    "amount": { "currency_code": "USD", "value": "19.99" },
                    "description": "Pro Plan Monthly Subscription"
                }]
            })
        );
    }

    #[test]
    fn description_is_omitted_when_absent() {
        let unit = PurchaseUnit {
            amount: Amount {
                currency_code: "USD".into(),
                value: "1.00".into(),
            },
            description: None,
        };
        let value = serde_json::to_value(unit).unwrap();
        assert!(value.get("description").is_none());
    }
}
