//! Business services built on the stores.
//!
//! - [`availability`] - Recipe-driven ingredient availability checks
//! - [`production`] - The production-day workflow for a store
//! - [`orders`] - Ingredient orders from headquarters
//! - [`low_stock`] - Low-stock report for the dashboard

pub mod availability;
pub mod low_stock;
pub mod orders;
pub mod production;
