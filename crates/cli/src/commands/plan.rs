//! Run a whole production day from a YAML script.
//!
//! ```yaml
//! date: 2026-10-14
//! items:
//!   - { product_id: prod-001, quantity: 20 }
//!   - { product_id: prod-006, quantity: "30" }
//! remaining:
//!   prod-001: 2
//!   prod-006: "5"
//! ```
//!
//! Items are added in order, the day is started, then finished with the
//! remaining quantities. The first rejected step aborts the run.

use std::collections::HashMap;
use std::path::Path;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::info;

use bakehouse_core::{LocationId, ProductId, Quantity};
use bakehouse_planner::models::{Ingredient, ProductionDay, ProductionSummary, Requirement};
use bakehouse_planner::{PlannerConfig, ProductionError, ProductionPlanner, SeedData, SeedError};

use super::print_json;

/// Errors from running a day script.
#[derive(Debug, Error)]
pub enum PlanError {
    #[error("invalid day script: {0}")]
    Script(#[from] serde_yaml::Error),

    #[error(transparent)]
    Seed(#[from] SeedError),

    #[error("production day rejected: {0}")]
    Rejected(#[from] ProductionError),
}

#[derive(Debug, Deserialize)]
struct DayScript {
    date: NaiveDate,
    items: Vec<ScriptItem>,
    #[serde(default)]
    remaining: HashMap<ProductId, Decimal>,
}

/// Quantities may be written as YAML numbers or quoted strings.
#[derive(Debug, Deserialize)]
struct ScriptItem {
    product_id: ProductId,
    quantity: Decimal,
}

/// Outcome of a completed day.
#[derive(Debug, Serialize)]
pub struct DayReport {
    pub day: ProductionDay,
    pub consumed: Vec<Requirement>,
    pub summary: ProductionSummary,
    pub inventory_after: Vec<Ingredient>,
}

/// Run a day script against `store_id`'s inventory in `seed`.
///
/// # Errors
///
/// Returns [`PlanError::Script`] if the script does not parse,
/// [`PlanError::Seed`] if the store is unknown, and [`PlanError::Rejected`]
/// for the first step of the day that is refused.
pub fn plan_day(
    seed: &SeedData,
    store_id: &LocationId,
    script: &str,
) -> Result<DayReport, PlanError> {
    let script: DayScript = serde_yaml::from_str(script)?;

    let mut planner =
        ProductionPlanner::new(seed.ledger_for(store_id)?, seed.catalog(), script.date);
    info!(date = %script.date, store = %store_id, items = script.items.len(), "Running production day");

    for item in &script.items {
        let quantity = Quantity::positive(item.quantity).map_err(ProductionError::from)?;
        planner.add_item(&item.product_id, quantity)?;
    }
    let consumed = planner.start()?;
    planner.finish(&script.remaining)?;

    let summary = planner.summary();
    let (ledger, _, day) = planner.into_parts();
    Ok(DayReport {
        day,
        consumed,
        summary,
        inventory_after: ledger.ingredients().into_iter().cloned().collect(),
    })
}

/// Run the day described by the script at `path` against the configured store.
///
/// # Errors
///
/// Returns an error if the script or seed data cannot be loaded, or if any
/// step of the day is rejected.
pub fn run_day(config: &PlannerConfig, path: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let content = std::fs::read_to_string(path)?;
    let seed = config.load_seed()?;
    print_json(&plan_day(&seed, &config.store_id, &content)?)
}
