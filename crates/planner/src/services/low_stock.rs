//! Low-stock report for the dashboard.

use std::collections::HashMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use bakehouse_core::{IngredientId, Quantity, Unit};

use crate::store::InventoryLedger;

/// An ingredient below its low-stock threshold.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LowStockItem {
    /// Ingredient code.
    pub ingredient_id: IngredientId,
    /// Ingredient name.
    pub name: String,
    /// Location the stock is held at.
    pub location: String,
    /// Quantity on hand.
    pub quantity: Quantity,
    /// Threshold it fell below.
    pub threshold: Quantity,
    /// Unit of both quantities.
    pub unit: Unit,
    /// On-hand as a percentage of the threshold, one decimal place.
    pub percentage: Decimal,
}

/// Ingredients whose stock is below their threshold, lowest percentage first.
///
/// Thresholds of zero and thresholds for ingredients the ledger does not
/// hold are skipped.
pub fn low_stock_report<L: InventoryLedger + ?Sized>(
    ledger: &L,
    thresholds: &HashMap<IngredientId, Quantity>,
    location: &str,
) -> Vec<LowStockItem> {
    let mut items: Vec<LowStockItem> = thresholds
        .iter()
        .filter(|(_, threshold)| !threshold.is_zero())
        .filter_map(|(id, threshold)| {
            let ingredient = ledger.get_ingredient(id)?;
            if ingredient.quantity >= *threshold {
                return None;
            }
            let percentage = ingredient
                .quantity
                .value()
                .checked_div(threshold.value())?
                .saturating_mul(Decimal::ONE_HUNDRED)
                .round_dp(1)
                .normalize();
            Some(LowStockItem {
                ingredient_id: id.clone(),
                name: ingredient.name.clone(),
                location: location.to_owned(),
                quantity: ingredient.quantity,
                threshold: *threshold,
                unit: ingredient.unit,
                percentage,
            })
        })
        .collect();

    items.sort_by(|a, b| {
        a.percentage
            .cmp(&b.percentage)
            .then_with(|| a.ingredient_id.cmp(&b.ingredient_id))
    });
    items
}
