//! Inventory listing and low-stock report.

use serde::Serialize;
use tracing::info;

use bakehouse_core::LocationId;
use bakehouse_planner::models::Ingredient;
use bakehouse_planner::{LowStockItem, PlannerConfig, SeedData, SeedError, low_stock_report};

use super::print_json;

#[derive(Debug, Serialize)]
pub struct InventoryView {
    pub location_id: LocationId,
    pub location_name: String,
    pub ingredients: Vec<Ingredient>,
}

/// All ingredients stocked at a location, ordered by ID.
///
/// # Errors
///
/// Returns `SeedError` if the location has no inventory in `seed`.
pub fn inventory_view(seed: &SeedData, location_id: &LocationId) -> Result<InventoryView, SeedError> {
    let ledger = seed.ledger_for(location_id)?;
    Ok(InventoryView {
        location_id: location_id.clone(),
        location_name: seed.directory().name_of(location_id).to_string(),
        ingredients: ledger.ingredients().into_iter().cloned().collect(),
    })
}

/// Ingredients at a location that are below their low-stock threshold.
///
/// # Errors
///
/// Returns `SeedError` if the location has no inventory in `seed`.
pub fn low_stock(seed: &SeedData, location_id: &LocationId) -> Result<Vec<LowStockItem>, SeedError> {
    let ledger = seed.ledger_for(location_id)?;
    let thresholds = seed.thresholds_for(location_id)?;
    let directory = seed.directory();
    let report = low_stock_report(&ledger, &thresholds, directory.name_of(location_id));
    info!(location = %location_id, items = report.len(), "Built low-stock report");
    Ok(report)
}

/// Print a location's ingredients, or only those below threshold.
///
/// # Errors
///
/// Returns an error if the seed data cannot be loaded or the location is unknown.
pub fn show(
    config: &PlannerConfig,
    location: Option<&str>,
    low_stock_only: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let seed = config.load_seed()?;
    let location_id = location.map_or_else(|| config.store_id.clone(), LocationId::new);

    if low_stock_only {
        return print_json(&low_stock(&seed, &location_id)?);
    }
    print_json(&inventory_view(&seed, &location_id)?)
}
