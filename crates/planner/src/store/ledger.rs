//! Inventory ledger: on-hand ingredient quantities for one location.

use std::collections::HashMap;

use tracing::debug;

use bakehouse_core::{IngredientId, Quantity};

use super::StockError;
use crate::models::{Ingredient, Requirement};

/// Mutable store of on-hand ingredient quantities.
///
/// Quantities never go negative: a deduction larger than the stock on hand
/// is refused, not clamped.
pub trait InventoryLedger {
    /// Look up an ingredient record.
    fn get_ingredient(&self, id: &IngredientId) -> Option<&Ingredient>;

    /// Remove `quantity` from an ingredient's stock, returning the new level.
    ///
    /// # Errors
    ///
    /// Returns [`StockError`] if the record is missing or stock is short.
    fn deduct(&mut self, id: &IngredientId, quantity: Quantity) -> Result<Quantity, StockError>;

    /// Add `quantity` to an ingredient's stock, returning the new level.
    ///
    /// # Errors
    ///
    /// Returns [`StockError::MissingIngredient`] if the record is missing.
    fn restock(&mut self, id: &IngredientId, quantity: Quantity) -> Result<Quantity, StockError>;

    /// Check that `required` of an ingredient is on hand.
    ///
    /// # Errors
    ///
    /// Returns [`StockError`] if the record is missing or stock is short.
    fn ensure_available(
        &self,
        id: &IngredientId,
        required: Quantity,
    ) -> Result<&Ingredient, StockError> {
        let ingredient = self
            .get_ingredient(id)
            .ok_or_else(|| StockError::MissingIngredient(id.clone()))?;
        if ingredient.quantity < required {
            return Err(StockError::Insufficient {
                ingredient_id: id.clone(),
                ingredient: ingredient.name.clone(),
                required,
                available: ingredient.quantity,
                unit: ingredient.unit,
            });
        }
        Ok(ingredient)
    }

    /// Deduct every requirement, or none of them.
    ///
    /// Requirements for the same ingredient are summed before checking, so
    /// the whole batch is validated against current stock first.
    ///
    /// # Errors
    ///
    /// Returns the first [`StockError`] found; the ledger is unchanged.
    fn deduct_all(&mut self, requirements: &[Requirement]) -> Result<(), StockError> {
        let merged = Requirement::aggregate(requirements.iter().cloned());
        for requirement in &merged {
            self.ensure_available(&requirement.ingredient_id, requirement.required)?;
        }
        for requirement in &merged {
            self.deduct(&requirement.ingredient_id, requirement.required)?;
        }
        Ok(())
    }
}

/// [`InventoryLedger`] backed by a `HashMap`.
#[derive(Debug, Clone, Default)]
pub struct InMemoryLedger {
    ingredients: HashMap<IngredientId, Ingredient>,
}

impl InMemoryLedger {
    /// Create an empty ledger.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace an ingredient record.
    pub fn insert(&mut self, ingredient: Ingredient) {
        self.ingredients.insert(ingredient.id.clone(), ingredient);
    }

    /// All records, sorted by ID.
    #[must_use]
    pub fn ingredients(&self) -> Vec<&Ingredient> {
        let mut all: Vec<&Ingredient> = self.ingredients.values().collect();
        all.sort_by(|a, b| a.id.cmp(&b.id));
        all
    }

    /// Number of ingredient records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.ingredients.len()
    }

    /// Whether the ledger has no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ingredients.is_empty()
    }
}

impl FromIterator<Ingredient> for InMemoryLedger {
    fn from_iter<I: IntoIterator<Item = Ingredient>>(iter: I) -> Self {
        let mut ledger = Self::new();
        for ingredient in iter {
            ledger.insert(ingredient);
        }
        ledger
    }
}

impl InventoryLedger for InMemoryLedger {
    fn get_ingredient(&self, id: &IngredientId) -> Option<&Ingredient> {
        self.ingredients.get(id)
    }

    fn deduct(&mut self, id: &IngredientId, quantity: Quantity) -> Result<Quantity, StockError> {
        let ingredient = self
            .ingredients
            .get_mut(id)
            .ok_or_else(|| StockError::MissingIngredient(id.clone()))?;
        let remaining =
            ingredient
                .quantity
                .checked_sub(quantity)
                .ok_or_else(|| StockError::Insufficient {
                    ingredient_id: id.clone(),
                    ingredient: ingredient.name.clone(),
                    required: quantity,
                    available: ingredient.quantity,
                    unit: ingredient.unit,
                })?;
        ingredient.quantity = remaining;
        debug!(ingredient = %id, deducted = %quantity, remaining = %remaining, "Deducted stock");
        Ok(remaining)
    }

    fn restock(&mut self, id: &IngredientId, quantity: Quantity) -> Result<Quantity, StockError> {
        let ingredient = self
            .ingredients
            .get_mut(id)
            .ok_or_else(|| StockError::MissingIngredient(id.clone()))?;
        ingredient.quantity += quantity;
        debug!(ingredient = %id, added = %quantity, on_hand = %ingredient.quantity, "Restocked");
        Ok(ingredient.quantity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bakehouse_core::Unit;

    fn qty(s: &str) -> Quantity {
        s.parse().unwrap()
    }

    fn ledger() -> InMemoryLedger {
        [
            Ingredient {
                id: IngredientId::new("ing-001"),
                name: "Flour".to_string(),
                unit: Unit::Kilogram,
                quantity: qty("45"),
            },
            Ingredient {
                id: IngredientId::new("ing-007"),
                name: "Yeast".to_string(),
                unit: Unit::Kilogram,
                quantity: qty("2"),
            },
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn test_deduct_and_restock() {
        let mut ledger = ledger();
        let flour = IngredientId::new("ing-001");

        assert_eq!(ledger.deduct(&flour, qty("25")).unwrap(), qty("20"));
        assert_eq!(ledger.restock(&flour, qty("5")).unwrap(), qty("25"));
        assert_eq!(ledger.get_ingredient(&flour).unwrap().quantity, qty("25"));
    }

    #[test]
    fn test_deduct_refuses_overdraw() {
        let mut ledger = ledger();
        let flour = IngredientId::new("ing-001");

        let err = ledger.deduct(&flour, qty("50")).unwrap_err();
        assert!(matches!(err, StockError::Insufficient { .. }));
        assert_eq!(ledger.get_ingredient(&flour).unwrap().quantity, qty("45"));
    }

    #[test]
    fn test_deduct_missing_record() {
        let mut ledger = ledger();
        let err = ledger
            .deduct(&IngredientId::new("ing-404"), qty("1"))
            .unwrap_err();
        assert_eq!(err, StockError::MissingIngredient(IngredientId::new("ing-404")));
    }

    #[test]
    fn test_deduct_all_is_all_or_nothing() {
        let mut ledger = ledger();
        let flour = IngredientId::new("ing-001");
        let yeast = IngredientId::new("ing-007");

        let err = ledger
            .deduct_all(&[
                Requirement::new(flour.clone(), qty("10")),
                Requirement::new(yeast.clone(), qty("3")),
            ])
            .unwrap_err();

        assert!(matches!(err, StockError::Insufficient { ref ingredient, .. } if ingredient == "Yeast"));
        assert_eq!(ledger.get_ingredient(&flour).unwrap().quantity, qty("45"));
        assert_eq!(ledger.get_ingredient(&yeast).unwrap().quantity, qty("2"));
    }

    #[test]
    fn test_deduct_all_checks_summed_requirements() {
        let mut ledger = ledger();
        let flour = IngredientId::new("ing-001");

        // Each line fits on its own; together they do not.
        let result = ledger.deduct_all(&[
            Requirement::new(flour.clone(), qty("25")),
            Requirement::new(flour.clone(), qty("25")),
        ]);
        assert!(result.is_err());
        assert_eq!(ledger.get_ingredient(&flour).unwrap().quantity, qty("45"));

        ledger
            .deduct_all(&[
                Requirement::new(flour.clone(), qty("20")),
                Requirement::new(flour.clone(), qty("25")),
            ])
            .unwrap();
        assert!(ledger.get_ingredient(&flour).unwrap().quantity.is_zero());
    }

    #[test]
    fn test_ingredients_sorted() {
        let ledger = ledger();
        let ids: Vec<&str> = ledger.ingredients().iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, ["ing-001", "ing-007"]);
        assert_eq!(ledger.len(), 2);
        assert!(!ledger.is_empty());
    }
}
