//! In-memory stores for inventory, catalog and locations.
//!
//! Each store sits behind a small trait so the planner can be pointed at a
//! different backing store without changing its rules:
//!
//! - [`InventoryLedger`] - on-hand ingredient quantities, with `deduct`/`restock`
//! - [`ProductCatalog`] and [`RecipeBook`] - read-only product and recipe lookup
//! - [`LocationDirectory`] - headquarters, central kitchen and stores
//!
//! All lookups are keyed by ID in a `HashMap`.

pub mod catalog;
pub mod ledger;
pub mod locations;

use thiserror::Error;

use bakehouse_core::{IngredientId, Quantity, Unit};

pub use catalog::{Catalog, ProductCatalog, RecipeBook};
pub use ledger::{InMemoryLedger, InventoryLedger};
pub use locations::LocationDirectory;

/// Errors that can occur during ledger operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StockError {
    /// No record exists for the ingredient.
    #[error("missing ingredient in inventory: {0}")]
    MissingIngredient(IngredientId),

    /// The ingredient is on record but there is not enough of it.
    #[error("need {required} {unit} of {ingredient}, but only have {available}")]
    Insufficient {
        /// Ingredient that ran short.
        ingredient_id: IngredientId,
        /// Ingredient display name.
        ingredient: String,
        /// Amount needed.
        required: Quantity,
        /// Amount on hand.
        available: Quantity,
        /// Unit of both amounts.
        unit: Unit,
    },
}
