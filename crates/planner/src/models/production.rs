//! Production day domain models.
//!
//! A [`ProductionDay`] owns the lifecycle rules that depend only on the day
//! itself: which status allows which operation, merging of repeated
//! products, and clamping of remaining quantities. Stock checks live in
//! [`crate::services::production::ProductionPlanner`].

use std::collections::HashMap;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use bakehouse_core::{ProductId, ProductionStatus, Quantity, QuantityError, Unit};

use super::catalog::Product;
use crate::error::{DayOperation, ProductionError, TransitionBlock};

/// A product scheduled for production.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductionItem {
    /// Product to make.
    pub product_id: ProductId,
    /// Product name at the time it was added.
    pub product_name: String,
    /// Total quantity for the day (or remaining, in a remaining snapshot).
    pub quantity: Quantity,
    /// Unit of the quantity.
    pub unit: Unit,
    /// Product category.
    pub category: String,
}

/// One planning and execution cycle for a single calendar date.
///
/// A day only changes through its own operations, so it serializes for
/// output but cannot be deserialized:
///
/// ```compile_fail
/// use bakehouse_planner::models::ProductionDay;
///
/// let day: ProductionDay =
///     serde_json::from_str(r#"{"date":"2026-10-14","status":"completed","items":[]}"#).unwrap();
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProductionDay {
    /// Date being planned.
    pub date: NaiveDate,
    /// Lifecycle status.
    status: ProductionStatus,
    /// Items in insertion order, one row per product.
    items: Vec<ProductionItem>,
    /// Leftover quantities captured when the day was finished.
    #[serde(skip_serializing_if = "Option::is_none")]
    remaining_items: Option<Vec<ProductionItem>>,
}

impl ProductionDay {
    /// Create an empty draft day.
    #[must_use]
    pub const fn new(date: NaiveDate) -> Self {
        Self {
            date,
            status: ProductionStatus::Draft,
            items: Vec::new(),
            remaining_items: None,
        }
    }

    /// Current status.
    #[must_use]
    pub const fn status(&self) -> ProductionStatus {
        self.status
    }

    /// Items in insertion order.
    #[must_use]
    pub fn items(&self) -> &[ProductionItem] {
        &self.items
    }

    /// Remaining snapshot, present once the day is completed.
    #[must_use]
    pub fn remaining_items(&self) -> Option<&[ProductionItem]> {
        self.remaining_items.as_deref()
    }

    /// The row for a product, if scheduled.
    #[must_use]
    pub fn item(&self, product_id: &ProductId) -> Option<&ProductionItem> {
        self.items.iter().find(|item| &item.product_id == product_id)
    }

    /// Scheduled quantity for a product (zero if absent).
    #[must_use]
    pub fn quantity_of(&self, product_id: &ProductId) -> Quantity {
        self.item(product_id)
            .map_or(Quantity::ZERO, |item| item.quantity)
    }

    /// Sum of all scheduled quantities.
    #[must_use]
    pub fn total_quantity(&self) -> Quantity {
        self.items.iter().map(|item| item.quantity).sum()
    }

    /// Fail unless the day is in `expected` status.
    ///
    /// # Errors
    ///
    /// Returns [`ProductionError::InvalidTransition`] on a status mismatch.
    pub fn ensure_status(
        &self,
        operation: DayOperation,
        expected: ProductionStatus,
    ) -> Result<(), ProductionError> {
        if self.status != expected {
            return Err(ProductionError::wrong_status(operation, self.status));
        }
        Ok(())
    }

    /// Fail unless `start` would be accepted.
    ///
    /// # Errors
    ///
    /// Returns [`ProductionError::InvalidTransition`] if the day is not a
    /// draft or has no items.
    pub fn ensure_startable(&self) -> Result<(), ProductionError> {
        self.ensure_status(DayOperation::Start, ProductionStatus::Draft)?;
        if self.items.is_empty() {
            return Err(ProductionError::InvalidTransition {
                operation: DayOperation::Start,
                reason: TransitionBlock::NoItems,
            });
        }
        Ok(())
    }

    /// Schedule `quantity` more of `product`.
    ///
    /// Repeated products are merged into their existing row. Returns the
    /// product's new total for the day.
    ///
    /// # Errors
    ///
    /// Returns an error if the day is not a draft or `quantity` is zero.
    pub fn add_item(
        &mut self,
        product: &Product,
        quantity: Quantity,
    ) -> Result<Quantity, ProductionError> {
        self.ensure_status(DayOperation::AddItem, ProductionStatus::Draft)?;
        if quantity.is_zero() {
            return Err(QuantityError::NonPositive.into());
        }

        if let Some(item) = self
            .items
            .iter_mut()
            .find(|item| item.product_id == product.id)
        {
            item.quantity += quantity;
            return Ok(item.quantity);
        }

        self.items.push(ProductionItem {
            product_id: product.id.clone(),
            product_name: product.name.clone(),
            quantity,
            unit: product.unit,
            category: product.category.clone(),
        });
        Ok(quantity)
    }

    /// Remove a product's row.
    ///
    /// Returns whether a row was removed; removing an absent product is a no-op.
    ///
    /// # Errors
    ///
    /// Returns [`ProductionError::InvalidTransition`] if the day is not a draft.
    pub fn remove_item(&mut self, product_id: &ProductId) -> Result<bool, ProductionError> {
        self.ensure_status(DayOperation::RemoveItem, ProductionStatus::Draft)?;
        let before = self.items.len();
        self.items.retain(|item| &item.product_id != product_id);
        Ok(self.items.len() != before)
    }

    pub(crate) fn mark_started(&mut self) -> Result<(), ProductionError> {
        self.ensure_startable()?;
        self.status = ProductionStatus::InProgress;
        Ok(())
    }

    /// Record remaining quantities and close the day.
    ///
    /// Each supplied value is clamped to `[0, produced]`. Items missing from
    /// `remaining_by_product` are recorded as zero remaining.
    ///
    /// # Errors
    ///
    /// Returns [`ProductionError::InvalidTransition`] unless the day is in progress.
    pub fn finish(
        &mut self,
        remaining_by_product: &HashMap<ProductId, Decimal>,
    ) -> Result<&[ProductionItem], ProductionError> {
        self.ensure_status(DayOperation::Finish, ProductionStatus::InProgress)?;

        let snapshot = self
            .items
            .iter()
            .map(|item| {
                let supplied = remaining_by_product
                    .get(&item.product_id)
                    .copied()
                    .unwrap_or(Decimal::ZERO);
                ProductionItem {
                    quantity: Quantity::clamped(supplied, item.quantity),
                    ..item.clone()
                }
            })
            .collect();

        self.status = ProductionStatus::Completed;
        Ok(self.remaining_items.insert(snapshot).as_slice())
    }

    /// Totals and per-category groups for display.
    #[must_use]
    pub fn summary(&self) -> ProductionSummary {
        let mut categories: Vec<CategoryGroup> = Vec::new();
        for item in &self.items {
            if let Some(group) = categories.iter_mut().find(|g| g.category == item.category) {
                group.total_quantity += item.quantity;
                group.items.push(item.clone());
            } else {
                categories.push(CategoryGroup {
                    category: item.category.clone(),
                    items: vec![item.clone()],
                    total_quantity: item.quantity,
                });
            }
        }

        let total_remaining = self
            .remaining_items
            .as_ref()
            .map(|items| items.iter().map(|item| item.quantity).sum());
        let total_produced = self.total_quantity();

        ProductionSummary {
            date: self.date,
            status: self.status,
            total_produced,
            total_remaining,
            total_used: total_remaining.map(|remaining| total_produced.saturating_sub(remaining)),
            categories,
        }
    }
}

/// Items of one category with their subtotal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryGroup {
    /// Category name.
    pub category: String,
    /// Items in insertion order.
    pub items: Vec<ProductionItem>,
    /// Sum of item quantities.
    pub total_quantity: Quantity,
}

/// Overview of a production day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductionSummary {
    /// Date of the day.
    pub date: NaiveDate,
    /// Status of the day.
    pub status: ProductionStatus,
    /// Total units scheduled.
    pub total_produced: Quantity,
    /// Total units left over (only once completed).
    pub total_remaining: Option<Quantity>,
    /// Units produced minus units left over (only once completed).
    pub total_used: Option<Quantity>,
    /// Groups in the order categories first appear.
    pub categories: Vec<CategoryGroup>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 14).unwrap()
    }

    fn product(id: &str, category: &str, unit: Unit) -> Product {
        Product {
            id: ProductId::new(id),
            name: format!("Product {id}"),
            category: category.to_string(),
            unit,
        }
    }

    fn qty(s: &str) -> Quantity {
        s.parse().unwrap()
    }

    #[test]
    fn test_new_day_is_empty_draft() {
        let day = ProductionDay::new(date());
        assert_eq!(day.status(), ProductionStatus::Draft);
        assert!(day.items().is_empty());
        assert!(day.remaining_items().is_none());
    }

    #[test]
    fn test_add_item_merges_repeated_product() {
        let bread = product("prod-001", "Breads", Unit::Loaf);
        let croissant = product("prod-005", "Pastries", Unit::Piece);
        let mut day = ProductionDay::new(date());

        day.add_item(&bread, qty("10")).unwrap();
        day.add_item(&croissant, qty("15")).unwrap();
        let total = day.add_item(&bread, qty("5")).unwrap();
        assert_eq!(total, qty("15"));

        let ids: Vec<&str> = day.items().iter().map(|i| i.product_id.as_str()).collect();
        assert_eq!(ids, ["prod-001", "prod-005"]);
        assert_eq!(day.total_quantity(), qty("30"));
    }

    #[test]
    fn test_add_item_rejects_zero() {
        let bread = product("prod-001", "Breads", Unit::Loaf);
        let mut day = ProductionDay::new(date());

        let err = day.add_item(&bread, Quantity::ZERO).unwrap_err();
        assert!(matches!(err, ProductionError::InvalidQuantity(_)));
        assert!(day.items().is_empty());
    }

    #[test]
    fn test_remove_item_is_idempotent() {
        let bread = product("prod-001", "Breads", Unit::Loaf);
        let mut day = ProductionDay::new(date());
        day.add_item(&bread, qty("10")).unwrap();

        assert!(day.remove_item(&bread.id).unwrap());
        assert!(!day.remove_item(&bread.id).unwrap());
        assert!(day.items().is_empty());
    }

    #[test]
    fn test_start_requires_items() {
        let mut day = ProductionDay::new(date());
        let err = day.mark_started().unwrap_err();
        assert!(matches!(
            err,
            ProductionError::InvalidTransition {
                operation: DayOperation::Start,
                reason: TransitionBlock::NoItems,
            }
        ));
        assert_eq!(day.status(), ProductionStatus::Draft);
    }

    #[test]
    fn test_in_progress_day_is_frozen() {
        let bread = product("prod-001", "Breads", Unit::Loaf);
        let mut day = ProductionDay::new(date());
        day.add_item(&bread, qty("10")).unwrap();
        day.mark_started().unwrap();

        assert!(matches!(
            day.add_item(&bread, qty("1")),
            Err(ProductionError::InvalidTransition { .. })
        ));
        assert!(matches!(
            day.remove_item(&bread.id),
            Err(ProductionError::InvalidTransition { .. })
        ));
        assert!(matches!(
            day.mark_started(),
            Err(ProductionError::InvalidTransition { .. })
        ));
        assert_eq!(day.quantity_of(&bread.id), qty("10"));
    }

    #[test]
    fn test_finish_requires_in_progress() {
        let mut day = ProductionDay::new(date());
        let err = day.finish(&HashMap::new()).unwrap_err();
        assert_eq!(
            err,
            ProductionError::wrong_status(DayOperation::Finish, ProductionStatus::Draft)
        );
    }

    #[test]
    fn test_finish_clamps_remaining() {
        let bread = product("prod-001", "Breads", Unit::Loaf);
        let roll = product("prod-007", "Pastries", Unit::Piece);
        let muffin = product("prod-009", "Muffins", Unit::Piece);
        let mut day = ProductionDay::new(date());
        day.add_item(&bread, qty("10")).unwrap();
        day.add_item(&roll, qty("10")).unwrap();
        day.add_item(&muffin, qty("12")).unwrap();
        day.mark_started().unwrap();

        let remaining = HashMap::from([
            (bread.id.clone(), Decimal::new(15, 0)),
            (roll.id.clone(), Decimal::new(-3, 0)),
        ]);
        let snapshot = day.finish(&remaining).unwrap().to_vec();

        assert_eq!(snapshot.len(), 3);
        assert_eq!(snapshot[0].quantity, qty("10"));
        assert_eq!(snapshot[1].quantity, Quantity::ZERO);
        assert_eq!(snapshot[2].quantity, Quantity::ZERO);
        assert_eq!(day.status(), ProductionStatus::Completed);

        // Completed is terminal.
        assert!(day.finish(&remaining).is_err());
        assert!(day.add_item(&bread, qty("1")).is_err());
    }

    #[test]
    fn test_summary_groups_by_category() {
        let white = product("prod-001", "Breads", Unit::Loaf);
        let croissant = product("prod-005", "Pastries", Unit::Piece);
        let sourdough = product("prod-003", "Breads", Unit::Loaf);
        let mut day = ProductionDay::new(date());
        day.add_item(&white, qty("10")).unwrap();
        day.add_item(&croissant, qty("15")).unwrap();
        day.add_item(&sourdough, qty("6")).unwrap();

        let summary = day.summary();
        assert_eq!(summary.total_produced, qty("31"));
        assert_eq!(summary.total_remaining, None);
        assert_eq!(summary.categories.len(), 2);
        assert_eq!(summary.categories[0].category, "Breads");
        assert_eq!(summary.categories[0].total_quantity, qty("16"));
        assert_eq!(summary.categories[0].items.len(), 2);
        assert_eq!(summary.categories[1].category, "Pastries");
    }

    #[test]
    fn test_summary_after_finish_reports_used() {
        let bread = product("prod-001", "Breads", Unit::Loaf);
        let mut day = ProductionDay::new(date());
        day.add_item(&bread, qty("10")).unwrap();
        day.mark_started().unwrap();
        day.finish(&HashMap::from([(bread.id.clone(), Decimal::new(3, 0))]))
            .unwrap();

        let summary = day.summary();
        assert_eq!(summary.total_remaining, Some(qty("3")));
        assert_eq!(summary.total_used, Some(qty("7")));
    }

    #[test]
    fn test_day_serializes_wire_status() {
        let day = ProductionDay::new(date());
        let json = serde_json::to_value(&day).unwrap();
        assert_eq!(json["status"], "draft");
        assert_eq!(json["date"], "2026-10-14");
        assert!(json.get("remaining_items").is_none());
    }
}
