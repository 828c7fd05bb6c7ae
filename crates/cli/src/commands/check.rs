//! Availability check for a single product.

use chrono::Utc;
use serde::Serialize;

use bakehouse_core::{LocationId, ProductId, Quantity};
use bakehouse_planner::models::Requirement;
use bakehouse_planner::{
    PlannerConfig, ProductionError, ProductionPlanner, Rejection, SeedData, SeedError,
};

use super::print_json;

#[derive(Debug, Serialize)]
pub struct CheckResult {
    pub product_id: ProductId,
    pub quantity: String,
    pub available: bool,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub requirements: Vec<Requirement>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rejection: Option<Rejection>,
}

/// Check `quantity` of a product against `store_id`'s inventory.
///
/// A shortage or bad quantity is a normal result, carried in
/// [`CheckResult::rejection`].
///
/// # Errors
///
/// Returns `SeedError` if the store is unknown.
pub fn check_product(
    seed: &SeedData,
    store_id: &LocationId,
    product: &str,
    quantity: &str,
) -> Result<CheckResult, SeedError> {
    let planner = ProductionPlanner::new(
        seed.ledger_for(store_id)?,
        seed.catalog(),
        Utc::now().date_naive(),
    );
    let product_id = ProductId::new(product);

    let outcome = Quantity::parse_positive(quantity)
        .map_err(ProductionError::from)
        .and_then(|quantity| planner.check(&product_id, quantity));

    let (requirements, rejection) = match outcome {
        Ok(requirements) => (requirements, None),
        Err(e) => (Vec::new(), Some(Rejection::from(&e))),
    };
    Ok(CheckResult {
        product_id,
        quantity: quantity.to_string(),
        available: rejection.is_none(),
        requirements,
        rejection,
    })
}

/// Check whether the configured store can make `quantity` of a product.
///
/// # Errors
///
/// Returns an error if the seed data cannot be loaded or the store is unknown.
pub fn availability(
    config: &PlannerConfig,
    product: &str,
    quantity: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    let seed = config.load_seed()?;
    print_json(&check_product(&seed, &config.store_id, product, quantity)?)
}
