//! Ingredient, product and recipe records.

use serde::{Deserialize, Serialize};

use bakehouse_core::{IngredientId, ProductId, Quantity, Unit};

/// An ingredient stocked at a location.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ingredient {
    /// Ingredient code (e.g. `ing-001`).
    pub id: IngredientId,
    /// Display name.
    pub name: String,
    /// Unit the stock is counted in.
    pub unit: Unit,
    /// Quantity on hand.
    pub quantity: Quantity,
}

/// A product a store can bake.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    /// Product code (e.g. `prod-001`).
    pub id: ProductId,
    /// Display name.
    pub name: String,
    /// Category used to group production (e.g. "Breads").
    pub category: String,
    /// Unit the product is made in.
    pub unit: Unit,
}

/// One ingredient of a recipe.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecipeLine {
    /// Ingredient consumed.
    pub ingredient_id: IngredientId,
    /// Amount consumed per unit of product, in the ingredient's unit.
    pub quantity_per_unit: Quantity,
}

/// The ingredients needed to make one unit of a product, in order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recipe {
    /// Product this recipe makes.
    pub product_id: ProductId,
    /// Ingredient lines in the order they are checked.
    pub lines: Vec<RecipeLine>,
}

/// An amount of one ingredient that an operation needs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Requirement {
    /// Ingredient needed.
    pub ingredient_id: IngredientId,
    /// Total amount needed.
    pub required: Quantity,
}

impl Requirement {
    /// Create a requirement.
    #[must_use]
    pub const fn new(ingredient_id: IngredientId, required: Quantity) -> Self {
        Self {
            ingredient_id,
            required,
        }
    }

    /// Merge requirements for the same ingredient by summing them.
    ///
    /// The result keeps the order in which each ingredient was first seen.
    #[must_use]
    pub fn aggregate(requirements: impl IntoIterator<Item = Self>) -> Vec<Self> {
        let mut merged: Vec<Self> = Vec::new();
        for requirement in requirements {
            match merged
                .iter_mut()
                .find(|r| r.ingredient_id == requirement.ingredient_id)
            {
                Some(existing) => existing.required += requirement.required,
                None => merged.push(requirement),
            }
        }
        merged
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn req(id: &str, qty: &str) -> Requirement {
        Requirement::new(IngredientId::new(id), qty.parse().unwrap())
    }

    #[test]
    fn test_aggregate_sums_per_ingredient() {
        let merged = Requirement::aggregate([
            req("ing-001", "25"),
            req("ing-003", "0.5"),
            req("ing-001", "4"),
        ]);

        assert_eq!(merged, vec![req("ing-001", "29"), req("ing-003", "0.5")]);
    }

    #[test]
    fn test_aggregate_empty() {
        assert!(Requirement::aggregate(Vec::new()).is_empty());
    }
}
