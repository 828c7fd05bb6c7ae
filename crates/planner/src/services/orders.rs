//! Ingredient orders from headquarters to stores and the central kitchen.
//!
//! An [`IngredientOrderDraft`] collects lines and a destination, reports
//! every form problem at once, and on submit deducts the shipped quantities
//! from the headquarters ledger.

use chrono::Utc;
use thiserror::Error;
use tracing::{info, instrument};
use uuid::Uuid;

use bakehouse_core::{IngredientId, LocationId, Quantity, QuantityError};

use crate::models::{IngredientOrder, OrderLine, Requirement};
use crate::store::{InventoryLedger, LocationDirectory, StockError};

/// A problem with the order form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OrderProblem {
    /// No destination chosen.
    MissingDestination,
    /// Destination is not in the directory.
    UnknownDestination(LocationId),
    /// Destination does not receive ingredient orders (e.g. headquarters).
    DestinationNotServed(LocationId),
    /// Destination is the location the order ships from.
    SameAsSource(LocationId),
    /// No lines added.
    EmptyOrder,
}

impl std::fmt::Display for OrderProblem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingDestination => write!(f, "please select a destination"),
            Self::UnknownDestination(id) => write!(f, "unknown destination: {id}"),
            Self::DestinationNotServed(id) => {
                write!(f, "destination {id} does not receive ingredient orders")
            }
            Self::SameAsSource(id) => write!(f, "cannot ship from {id} to itself"),
            Self::EmptyOrder => write!(f, "please add at least one ingredient"),
        }
    }
}

fn join_problems(problems: &[OrderProblem]) -> String {
    problems
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// Errors returned by ingredient order operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OrderError {
    /// Quantity input was empty, non-numeric or not above zero.
    #[error("invalid quantity: {0}")]
    InvalidQuantity(#[from] QuantityError),

    /// Ingredient is not stocked at the source location.
    #[error("unknown ingredient: {0}")]
    UnknownIngredient(IngredientId),

    /// The form is incomplete.
    #[error("order is incomplete: {}", join_problems(.0))]
    Invalid(Vec<OrderProblem>),

    /// The source location cannot cover the order.
    #[error("cannot ship order: {0}")]
    Stock(#[from] StockError),
}

/// An ingredient order being filled in.
#[derive(Debug, Clone, Default)]
pub struct IngredientOrderDraft {
    destination: Option<LocationId>,
    lines: Vec<OrderLine>,
    notes: String,
}

impl IngredientOrderDraft {
    /// Create an empty draft.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Choose the destination.
    pub fn set_destination(&mut self, destination: LocationId) {
        self.destination = Some(destination);
    }

    /// The chosen destination, if any.
    #[must_use]
    pub const fn destination(&self) -> Option<&LocationId> {
        self.destination.as_ref()
    }

    /// Set free-form notes for the receiving location.
    pub fn set_notes(&mut self, notes: impl Into<String>) {
        self.notes = notes.into();
    }

    /// Lines in insertion order.
    #[must_use]
    pub fn lines(&self) -> &[OrderLine] {
        &self.lines
    }

    /// Sum of all line quantities.
    #[must_use]
    pub fn total_quantity(&self) -> Quantity {
        self.lines.iter().map(|line| line.quantity).sum()
    }

    /// Add `quantity` of an ingredient stocked at `source`.
    ///
    /// Repeated ingredients merge into one line. Returns the line's new total.
    /// Stock is not checked until [`Self::submit`].
    ///
    /// # Errors
    ///
    /// Returns [`OrderError::InvalidQuantity`] for a zero quantity, or
    /// [`OrderError::UnknownIngredient`] if `source` has no such record.
    pub fn add_item<L: InventoryLedger + ?Sized>(
        &mut self,
        source: &L,
        ingredient_id: &IngredientId,
        quantity: Quantity,
    ) -> Result<Quantity, OrderError> {
        if quantity.is_zero() {
            return Err(QuantityError::NonPositive.into());
        }
        let ingredient = source
            .get_ingredient(ingredient_id)
            .ok_or_else(|| OrderError::UnknownIngredient(ingredient_id.clone()))?;

        if let Some(line) = self
            .lines
            .iter_mut()
            .find(|line| &line.ingredient_id == ingredient_id)
        {
            line.quantity += quantity;
            return Ok(line.quantity);
        }

        self.lines.push(OrderLine {
            ingredient_id: ingredient.id.clone(),
            ingredient_name: ingredient.name.clone(),
            quantity,
            unit: ingredient.unit,
        });
        Ok(quantity)
    }

    /// Add an ingredient using raw form input for the quantity.
    ///
    /// # Errors
    ///
    /// Returns [`OrderError::InvalidQuantity`] for malformed input, otherwise
    /// as [`Self::add_item`].
    pub fn add_item_input<L: InventoryLedger + ?Sized>(
        &mut self,
        source: &L,
        ingredient_id: &IngredientId,
        raw_quantity: &str,
    ) -> Result<Quantity, OrderError> {
        let quantity = Quantity::parse_positive(raw_quantity)?;
        self.add_item(source, ingredient_id, quantity)
    }

    /// Remove an ingredient's line. Removing an absent line is a no-op.
    pub fn remove_item(&mut self, ingredient_id: &IngredientId) -> bool {
        let before = self.lines.len();
        self.lines.retain(|line| &line.ingredient_id != ingredient_id);
        self.lines.len() != before
    }

    /// Every problem with the form, in display order. Empty means valid.
    #[must_use]
    pub fn validate(&self, directory: &LocationDirectory) -> Vec<OrderProblem> {
        let mut problems = Vec::new();
        match &self.destination {
            None => problems.push(OrderProblem::MissingDestination),
            Some(id) => match directory.get(id) {
                None => problems.push(OrderProblem::UnknownDestination(id.clone())),
                Some(location) if !location.kind.accepts_ingredient_orders() => {
                    problems.push(OrderProblem::DestinationNotServed(id.clone()));
                }
                Some(_) => {}
            },
        }
        if self.lines.is_empty() {
            problems.push(OrderProblem::EmptyOrder);
        }
        problems
    }

    /// Submit the order, deducting every line from the `source` ledger.
    ///
    /// The draft is reset on success.
    ///
    /// # Errors
    ///
    /// - [`OrderError::Invalid`] with every form problem found, including a
    ///   destination equal to `source_id`
    /// - [`OrderError::Stock`] if `source` cannot cover all lines
    ///
    /// The ledger and the draft are unchanged on error.
    #[instrument(skip_all, fields(source = %source_id))]
    pub fn submit<L: InventoryLedger + ?Sized>(
        &mut self,
        source_id: &LocationId,
        source: &mut L,
        directory: &LocationDirectory,
    ) -> Result<IngredientOrder, OrderError> {
        let mut problems = self.validate(directory);
        if let Some(destination_id) = self.destination.as_ref().filter(|id| *id == source_id) {
            if !problems.contains(&OrderProblem::DestinationNotServed(destination_id.clone())) {
                problems.insert(0, OrderProblem::SameAsSource(destination_id.clone()));
            }
        }
        let Some(destination_id) = self.destination.clone().filter(|_| problems.is_empty()) else {
            return Err(OrderError::Invalid(problems));
        };

        let requirements: Vec<Requirement> = self
            .lines
            .iter()
            .map(|line| Requirement::new(line.ingredient_id.clone(), line.quantity))
            .collect();
        source.deduct_all(&requirements)?;

        let draft = std::mem::take(self);
        let notes = draft.notes.trim();
        let order = IngredientOrder {
            id: Uuid::new_v4(),
            source_id: source_id.clone(),
            destination_name: directory.name_of(&destination_id).to_owned(),
            destination_id,
            notes: (!notes.is_empty()).then(|| notes.to_owned()),
            lines: draft.lines,
            created_at: Utc::now(),
        };

        info!(
            order_id = %order.id,
            destination = %order.destination_id,
            lines = order.lines.len(),
            "Ingredient order submitted"
        );
        Ok(order)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bakehouse_core::{LocationKind, Unit};

    use crate::models::{Ingredient, Location};
    use crate::store::InMemoryLedger;

    fn qty(s: &str) -> Quantity {
        s.parse().unwrap()
    }

    fn hq_id() -> LocationId {
        LocationId::new("hq-001")
    }

    fn hq_ledger() -> InMemoryLedger {
        [
            Ingredient {
                id: IngredientId::new("ing-001"),
                name: "Flour".to_string(),
                unit: Unit::Kilogram,
                quantity: qty("500"),
            },
            Ingredient {
                id: IngredientId::new("ing-009"),
                name: "Vanilla Extract".to_string(),
                unit: Unit::Liter,
                quantity: qty("10"),
            },
        ]
        .into_iter()
        .collect()
    }

    fn directory() -> LocationDirectory {
        [
            Location {
                id: hq_id(),
                name: "Headquarters".to_string(),
                kind: LocationKind::Headquarters,
            },
            Location {
                id: LocationId::new("st-001"),
                name: "Store #1 - Downtown".to_string(),
                kind: LocationKind::Store,
            },
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn test_add_item_merges_lines() {
        let ledger = hq_ledger();
        let flour = IngredientId::new("ing-001");
        let mut draft = IngredientOrderDraft::new();

        draft.add_item(&ledger, &flour, qty("20")).unwrap();
        assert_eq!(draft.add_item_input(&ledger, &flour, "5").unwrap(), qty("25"));
        assert_eq!(draft.lines().len(), 1);
        assert_eq!(draft.lines()[0].ingredient_name, "Flour");
        assert_eq!(draft.total_quantity(), qty("25"));
    }

    #[test]
    fn test_add_item_rejects_unknown_and_invalid() {
        let ledger = hq_ledger();
        let mut draft = IngredientOrderDraft::new();

        assert!(matches!(
            draft.add_item(&ledger, &IngredientId::new("ing-404"), qty("1")),
            Err(OrderError::UnknownIngredient(_))
        ));
        assert!(matches!(
            draft.add_item_input(&ledger, &IngredientId::new("ing-001"), "lots"),
            Err(OrderError::InvalidQuantity(_))
        ));
        assert!(draft.lines().is_empty());
    }

    #[test]
    fn test_validate_reports_all_problems() {
        let draft = IngredientOrderDraft::new();
        assert_eq!(
            draft.validate(&directory()),
            vec![OrderProblem::MissingDestination, OrderProblem::EmptyOrder]
        );
    }

    #[test]
    fn test_validate_rejects_headquarters_destination() {
        let ledger = hq_ledger();
        let mut draft = IngredientOrderDraft::new();
        draft.set_destination(hq_id());
        draft
            .add_item(&ledger, &IngredientId::new("ing-001"), qty("1"))
            .unwrap();
        assert_eq!(
            draft.validate(&directory()),
            vec![OrderProblem::DestinationNotServed(hq_id())]
        );
    }

    #[test]
    fn test_submit_deducts_and_resets() {
        let mut ledger = hq_ledger();
        let flour = IngredientId::new("ing-001");
        let mut draft = IngredientOrderDraft::new();
        draft.set_destination(LocationId::new("st-001"));
        draft.add_item(&ledger, &flour, qty("120")).unwrap();
        draft.set_notes("  Deliver before 6am ");

        let order = draft.submit(&hq_id(), &mut ledger, &directory()).unwrap();
        assert_eq!(order.destination_name, "Store #1 - Downtown");
        assert_eq!(order.notes.as_deref(), Some("Deliver before 6am"));
        assert_eq!(order.total_quantity(), qty("120"));
        assert_eq!(ledger.get_ingredient(&flour).unwrap().quantity, qty("380"));

        assert!(draft.lines().is_empty());
        assert!(draft.destination().is_none());
    }

    #[test]
    fn test_submit_short_stock_keeps_draft() {
        let mut ledger = hq_ledger();
        let vanilla = IngredientId::new("ing-009");
        let flour = IngredientId::new("ing-001");
        let mut draft = IngredientOrderDraft::new();
        draft.set_destination(LocationId::new("st-001"));
        draft.add_item(&ledger, &flour, qty("100")).unwrap();
        draft.add_item(&ledger, &vanilla, qty("12")).unwrap();

        let err = draft.submit(&hq_id(), &mut ledger, &directory()).unwrap_err();
        assert!(matches!(err, OrderError::Stock(StockError::Insufficient { .. })));
        assert_eq!(ledger.get_ingredient(&flour).unwrap().quantity, qty("500"));
        assert_eq!(draft.lines().len(), 2);
    }

    #[test]
    fn test_submit_rejects_shipping_to_source() {
        let store = LocationId::new("st-001");
        let mut ledger = hq_ledger();
        let flour = IngredientId::new("ing-001");
        let mut draft = IngredientOrderDraft::new();
        draft.set_destination(store.clone());
        draft.add_item(&ledger, &flour, qty("5")).unwrap();

        let err = draft.submit(&store, &mut ledger, &directory()).unwrap_err();
        assert_eq!(
            err,
            OrderError::Invalid(vec![OrderProblem::SameAsSource(store)])
        );
        assert_eq!(
            err.to_string(),
            "order is incomplete: cannot ship from st-001 to itself"
        );
        assert_eq!(ledger.get_ingredient(&flour).unwrap().quantity, qty("500"));
        assert_eq!(draft.lines().len(), 1);
    }

    #[test]
    fn test_submit_invalid_message() {
        let mut ledger = hq_ledger();
        let mut draft = IngredientOrderDraft::new();
        let err = draft.submit(&hq_id(), &mut ledger, &directory()).unwrap_err();
        assert_eq!(
            err.to_string(),
            "order is incomplete: please select a destination; please add at least one ingredient"
        );
    }

    #[test]
    fn test_remove_item_idempotent() {
        let ledger = hq_ledger();
        let flour = IngredientId::new("ing-001");
        let mut draft = IngredientOrderDraft::new();
        draft.add_item(&ledger, &flour, qty("1")).unwrap();
        assert!(draft.remove_item(&flour));
        assert!(!draft.remove_item(&flour));
    }
}
