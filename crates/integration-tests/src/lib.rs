//! Integration tests for Bakehouse.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p bakehouse-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `production_day` - Store production days against the sample inventory
//! - `ingredient_orders` - Orders shipped from headquarters
//! - `seed_data` - Sample data set and low-stock figures
//!
//! Fixtures here build everything from the bundled sample data, so tests
//! need no files or environment.

#![cfg_attr(not(test), forbid(unsafe_code))]

use chrono::NaiveDate;

use bakehouse_core::{LocationId, Quantity};
use bakehouse_planner::{Catalog, InMemoryLedger, ProductionPlanner, SeedData, SeedError};

/// Store whose inventory the production tests use.
pub const STORE_ID: &str = "st-001";

/// Headquarters, the source of ingredient orders.
pub const HQ_ID: &str = "hq-001";

/// A planner for the sample store and the one fixed date the tests use.
pub type SamplePlanner = ProductionPlanner<InMemoryLedger, Catalog>;

/// The bundled sample data.
///
/// # Errors
///
/// Returns [`SeedError`] if the bundled data fails to load.
pub fn sample_seed() -> Result<SeedData, SeedError> {
    SeedData::sample()
}

/// Production date used throughout the tests.
#[must_use]
pub fn production_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 10, 14).expect("valid date")
}

/// A planner over the sample store's inventory with a fresh draft day.
///
/// # Errors
///
/// Returns [`SeedError`] if the bundled data fails to load.
pub fn sample_planner() -> Result<SamplePlanner, SeedError> {
    let seed = sample_seed()?;
    let ledger = seed.ledger_for(&LocationId::new(STORE_ID))?;
    Ok(ProductionPlanner::new(ledger, seed.catalog(), production_date()))
}

/// Parse a quantity literal.
///
/// # Panics
///
/// Panics if `s` is not a valid non-negative decimal.
#[must_use]
pub fn qty(s: &str) -> Quantity {
    s.parse().expect("valid quantity literal")
}
