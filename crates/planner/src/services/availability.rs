//! Ingredient availability checks.

use tracing::debug;

use bakehouse_core::{ProductId, Quantity};

use crate::error::ProductionError;
use crate::models::Requirement;
use crate::store::{InventoryLedger, RecipeBook};

/// Check that `quantity` units of a product can be made from current stock.
///
/// On success returns what the run would consume, one requirement per
/// recipe line. A product with no recipe on file is treated as
/// unconstrained and returns no requirements.
///
/// # Errors
///
/// Fails fast on the first recipe line that cannot be satisfied:
/// - [`ProductionError::MissingIngredientRecord`] if the ingredient has no
///   ledger record (not treated as zero stock)
/// - [`ProductionError::InsufficientStock`] if on-hand stock is short
pub fn check_availability<R, L>(
    recipes: &R,
    ledger: &L,
    product_id: &ProductId,
    quantity: Quantity,
) -> Result<Vec<Requirement>, ProductionError>
where
    R: RecipeBook + ?Sized,
    L: InventoryLedger + ?Sized,
{
    let Some(recipe) = recipes.get_recipe(product_id) else {
        debug!(product = %product_id, "No recipe on file, treating as unconstrained");
        return Ok(Vec::new());
    };

    recipe
        .lines
        .iter()
        .map(|line| -> Result<Requirement, ProductionError> {
            let required = line.quantity_per_unit.times(quantity);
            ledger.ensure_available(&line.ingredient_id, required)?;
            Ok(Requirement::new(line.ingredient_id.clone(), required))
        })
        .collect()
}
