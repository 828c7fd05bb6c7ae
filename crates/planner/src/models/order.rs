//! Ingredient orders shipped from headquarters.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use bakehouse_core::{IngredientId, LocationId, Quantity, Unit};

/// One ingredient line of an order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderLine {
    /// Ingredient shipped.
    pub ingredient_id: IngredientId,
    /// Ingredient name at the time the line was added.
    pub ingredient_name: String,
    /// Quantity shipped.
    pub quantity: Quantity,
    /// Unit of the quantity.
    pub unit: Unit,
}

/// A submitted ingredient order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IngredientOrder {
    /// Unique order ID.
    pub id: Uuid,
    /// Location the ingredients leave from.
    pub source_id: LocationId,
    /// Location receiving the ingredients.
    pub destination_id: LocationId,
    /// Destination display name.
    pub destination_name: String,
    /// Ordered lines, one per ingredient.
    pub lines: Vec<OrderLine>,
    /// Optional notes for the receiving location.
    pub notes: Option<String>,
    /// When the order was submitted.
    pub created_at: DateTime<Utc>,
}

impl IngredientOrder {
    /// Sum of all line quantities.
    #[must_use]
    pub fn total_quantity(&self) -> Quantity {
        self.lines.iter().map(|line| line.quantity).sum()
    }
}
