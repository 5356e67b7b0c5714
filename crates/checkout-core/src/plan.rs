//! Subscription plans and their prices.
//!
//! There are two plans. Selection is lenient: the literal `"pro"` picks the pro tier
//! and every other input, including no input at all, picks the basic tier.

use serde::{Deserialize, Serialize};

// ============================================================================
// Constants
// ============================================================================

/// Currency used for every purchase unit.
pub const CURRENCY_CODE: &str = "USD";

/// Basic plan monthly price.
pub const BASIC_PLAN_PRICE: &str = "9.99";

/// Pro plan monthly price.
pub const PRO_PLAN_PRICE: &str = "19.99";

/// Basic plan purchase description.
pub const BASIC_PLAN_DESCRIPTION: &str = "Basic Plan Monthly Subscription";

/// Pro plan purchase description.
pub const PRO_PLAN_DESCRIPTION: &str = "Pro Plan Monthly Subscription";

/// A subscription plan.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Plan {
    /// Basic tier, also the fallback for unknown selections.
    #[default]
    Basic,
    /// Pro tier.
    Pro,
}

impl Plan {
    /// Resolve a client-supplied plan selection.
    ///
    /// Only the exact string `"pro"` selects [`Plan::Pro`]. Anything else (absent,
    /// empty, differently cased, unknown) resolves to [`Plan::Basic`].
    #[must_use]
    pub fn from_selection(selection: Option<&str>) -> Self {
        match selection {
            Some("pro") => Self::Pro,
            _ => Self::Basic,
        }
    }

    /// Get the wire name of the plan.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Basic => "basic",
            Self::Pro => "pro",
        }
    }

    /// Get the price and description for this plan.
    #[must_use]
    pub const fn pricing(self) -> PlanPricing {
        match self {
            Self::Basic => PlanPricing {
                amount: BASIC_PLAN_PRICE,
                currency_code: CURRENCY_CODE,
                description: BASIC_PLAN_DESCRIPTION,
            },
            Self::Pro => PlanPricing {
                amount: PRO_PLAN_PRICE,
                currency_code: CURRENCY_CODE,
                description: PRO_PLAN_DESCRIPTION,
            },
        }
    }
}

impl std::fmt::Display for Plan {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Price of a plan as it is submitted to the payment provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PlanPricing {
    /// Decimal amount (e.g. `"9.99"`).
    pub amount: &'static str,
    /// ISO 4217 currency code, always `USD`.
    pub currency_code: &'static str,
    /// Human-readable purchase description.
    pub description: &'static str,
}

/// Resolve a plan selection straight to its pricing.
#[must_use]
pub fn resolve_plan_pricing(selection: Option<&str>) -> PlanPricing {
    Plan::from_selection(selection).pricing()
}
