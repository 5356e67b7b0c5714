//! API handlers.

pub mod client_config;
pub mod health;
pub mod orders;
