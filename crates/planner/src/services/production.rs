//! Production-day workflow for a store.
//!
//! The planner owns the store's inventory ledger, the catalog and the
//! current [`ProductionDay`]:
//! 1. `add_item` / `remove_item` build the draft, checking each addition
//!    against the recipe and current stock
//! 2. `start` deducts the ingredients for the whole day and freezes the list
//! 3. `finish` records what is left over and closes the day

use std::collections::HashMap;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use tracing::{info, instrument, warn};

use bakehouse_core::{ProductId, ProductionStatus, Quantity, QuantityError};

use super::availability::check_availability;
use crate::error::{DayOperation, ProductionError};
use crate::models::{ProductionDay, ProductionItem, ProductionSummary, Requirement};
use crate::store::{InventoryLedger, ProductCatalog, RecipeBook};

/// Runs one store's production day against its inventory.
#[derive(Debug)]
pub struct ProductionPlanner<L, C> {
    ledger: L,
    catalog: C,
    day: ProductionDay,
}

impl<L, C> ProductionPlanner<L, C>
where
    L: InventoryLedger,
    C: ProductCatalog + RecipeBook,
{
    /// Create a planner with a fresh draft day for `date`.
    #[must_use]
    pub const fn new(ledger: L, catalog: C, date: NaiveDate) -> Self {
        Self {
            ledger,
            catalog,
            day: ProductionDay::new(date),
        }
    }

    /// The current day.
    #[must_use]
    pub const fn day(&self) -> &ProductionDay {
        &self.day
    }

    /// The store's inventory ledger.
    #[must_use]
    pub const fn ledger(&self) -> &L {
        &self.ledger
    }

    /// The product catalog and recipe book.
    #[must_use]
    pub const fn catalog(&self) -> &C {
        &self.catalog
    }

    /// Totals and per-category groups for the current day.
    #[must_use]
    pub fn summary(&self) -> ProductionSummary {
        self.day.summary()
    }

    /// Take the ledger, catalog and day apart, e.g. to archive a completed day.
    pub fn into_parts(self) -> (L, C, ProductionDay) {
        (self.ledger, self.catalog, self.day)
    }

    /// Check whether `quantity` of a product could be made right now.
    ///
    /// Does not change any state.
    ///
    /// # Errors
    ///
    /// Returns [`ProductionError`] if the quantity is zero, the product is
    /// unknown, or an ingredient is missing or short.
    pub fn check(
        &self,
        product_id: &ProductId,
        quantity: Quantity,
    ) -> Result<Vec<Requirement>, ProductionError> {
        if quantity.is_zero() {
            return Err(QuantityError::NonPositive.into());
        }
        if self.catalog.get_product(product_id).is_none() {
            return Err(ProductionError::UnknownProduct(product_id.clone()));
        }
        check_availability(&self.catalog, &self.ledger, product_id, quantity)
    }

    /// Add `quantity` of a product to the draft.
    ///
    /// Repeated products merge into one row. Returns the product's new total.
    ///
    /// # Errors
    ///
    /// Returns [`ProductionError`] if the day is not a draft or the check in
    /// [`Self::check`] fails. The day is unchanged on error.
    #[instrument(skip_all, fields(product = %product_id, quantity = %quantity))]
    pub fn add_item(
        &mut self,
        product_id: &ProductId,
        quantity: Quantity,
    ) -> Result<Quantity, ProductionError> {
        self.day
            .ensure_status(DayOperation::AddItem, ProductionStatus::Draft)?;
        self.check(product_id, quantity)?;

        let product = self
            .catalog
            .get_product(product_id)
            .ok_or_else(|| ProductionError::UnknownProduct(product_id.clone()))?;
        let total = self.day.add_item(product, quantity)?;

        info!(total = %total, "Added production item");
        Ok(total)
    }

    /// Add a product using raw form input for the quantity.
    ///
    /// # Errors
    ///
    /// Returns [`ProductionError::InvalidQuantity`] if `raw_quantity` is
    /// empty, non-numeric or not above zero, otherwise as [`Self::add_item`].
    pub fn add_item_input(
        &mut self,
        product_id: &ProductId,
        raw_quantity: &str,
    ) -> Result<Quantity, ProductionError> {
        let quantity = Quantity::parse_positive(raw_quantity)?;
        self.add_item(product_id, quantity)
    }

    /// Remove a product from the draft. Removing an absent product is a no-op.
    ///
    /// # Errors
    ///
    /// Returns [`ProductionError::InvalidTransition`] if the day is not a draft.
    #[instrument(skip_all, fields(product = %product_id))]
    pub fn remove_item(&mut self, product_id: &ProductId) -> Result<bool, ProductionError> {
        let removed = self.day.remove_item(product_id)?;
        if removed {
            info!("Removed production item");
        }
        Ok(removed)
    }

    /// Start production: deduct the day's ingredients and freeze the list.
    ///
    /// Requirements of every item are summed per ingredient and deducted in
    /// one all-or-nothing step. Returns what was deducted.
    ///
    /// # Errors
    ///
    /// - [`ProductionError::InvalidTransition`] if the day is not a draft or is empty
    /// - [`ProductionError::InsufficientStock`] if the combined items need more
    ///   than is on hand
    /// - [`ProductionError::MissingIngredientRecord`] if a recipe names an
    ///   ingredient with no ledger record
    ///
    /// Neither the ledger nor the day changes on error.
    #[instrument(skip_all, fields(date = %self.day.date))]
    pub fn start(&mut self) -> Result<Vec<Requirement>, ProductionError> {
        self.day.ensure_startable()?;

        let mut requirements = Vec::new();
        for item in self.day.items() {
            requirements.extend(check_availability(
                &self.catalog,
                &self.ledger,
                &item.product_id,
                item.quantity,
            )?);
        }
        let consumed = Requirement::aggregate(requirements);

        self.ledger.deduct_all(&consumed)?;
        self.day.mark_started()?;

        info!(
            items = self.day.items().len(),
            ingredients = consumed.len(),
            "Production started"
        );
        Ok(consumed)
    }

    /// Finish production, recording remaining quantities per product.
    ///
    /// Values are clamped to `[0, produced]`; products without an entry are
    /// recorded as zero remaining. Entries for products not in the day are
    /// ignored.
    ///
    /// # Errors
    ///
    /// Returns [`ProductionError::InvalidTransition`] unless the day is in progress.
    #[instrument(skip_all, fields(date = %self.day.date))]
    pub fn finish(
        &mut self,
        remaining_by_product: &HashMap<ProductId, Decimal>,
    ) -> Result<&[ProductionItem], ProductionError> {
        self.day
            .ensure_status(DayOperation::Finish, ProductionStatus::InProgress)?;

        for product_id in remaining_by_product.keys() {
            if self.day.item(product_id).is_none() {
                warn!(product = %product_id, "Ignoring remaining quantity for unscheduled product");
            }
        }

        let snapshot = self.day.finish(remaining_by_product)?;
        let remaining: Quantity = snapshot.iter().map(|item| item.quantity).sum();
        info!(remaining = %remaining, "Production completed");
        Ok(snapshot)
    }
}
