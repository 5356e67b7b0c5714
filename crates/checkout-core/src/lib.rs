//! Core types for the checkout service.
//!
//! This crate provides the pieces of the checkout flow that do not touch the network:
//!
//! - **Plans**: `Plan`, `PlanPricing` and the plan-selection fallback policy
//! - **Orders**: `OrderRequest`, `PurchaseUnit`, `Amount` as sent to the payment provider
//!
//! # Pricing
//!
//! Prices are carried as decimal strings (`"9.99"`), exactly as the provider expects
//! them on the wire. No arithmetic is ever performed on them.

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod order;
pub mod plan;

pub use order::{Amount, OrderIntent, OrderRequest, PurchaseUnit};
pub use plan::{
    resolve_plan_pricing, Plan, PlanPricing, BASIC_PLAN_DESCRIPTION, BASIC_PLAN_PRICE,
    CURRENCY_CODE, PRO_PLAN_DESCRIPTION, PRO_PLAN_PRICE,
};
