//! Errors for the production-day workflow.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use bakehouse_core::{IngredientId, ProductId, ProductionStatus, Quantity, QuantityError, Unit};

use crate::store::StockError;

/// Operations on a production day, used in transition errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DayOperation {
    AddItem,
    RemoveItem,
    Start,
    Finish,
}

impl std::fmt::Display for DayOperation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::AddItem => write!(f, "add items to"),
            Self::RemoveItem => write!(f, "remove items from"),
            Self::Start => write!(f, "start"),
            Self::Finish => write!(f, "finish"),
        }
    }
}

/// Why a transition was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransitionBlock {
    /// The day is not in the status the operation needs.
    WrongStatus(ProductionStatus),
    /// The day has no items to produce.
    NoItems,
}

impl std::fmt::Display for TransitionBlock {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::WrongStatus(status) => write!(f, "it is {status}"),
            Self::NoItems => write!(f, "add at least one product first"),
        }
    }
}

/// Errors returned by production-day operations.
///
/// Every error is recoverable; the day and the ledger are left unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProductionError {
    /// Quantity input was empty, non-numeric or not above zero.
    #[error("invalid quantity: {0}")]
    InvalidQuantity(#[from] QuantityError),

    /// Product is not in the catalog.
    #[error("unknown product: {0}")]
    UnknownProduct(ProductId),

    /// Not enough of an ingredient on hand.
    #[error("not enough ingredients: need {required} {unit} of {ingredient}, but only have {available}")]
    InsufficientStock {
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

    /// A recipe references an ingredient with no inventory record.
    #[error("missing ingredient in inventory: {0}")]
    MissingIngredientRecord(IngredientId),

    /// Operation attempted outside its valid state.
    #[error("cannot {operation} production day: {reason}")]
    InvalidTransition {
        /// The refused operation.
        operation: DayOperation,
        /// Why it was refused.
        reason: TransitionBlock,
    },
}

impl ProductionError {
    /// The category of this error, for presentation layers.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidQuantity(_) => ErrorKind::InvalidQuantity,
            Self::UnknownProduct(_) => ErrorKind::UnknownProduct,
            Self::InsufficientStock { .. } => ErrorKind::InsufficientStock,
            Self::MissingIngredientRecord(_) => ErrorKind::MissingIngredientRecord,
            Self::InvalidTransition { .. } => ErrorKind::InvalidTransition,
        }
    }

    pub(crate) const fn wrong_status(operation: DayOperation, status: ProductionStatus) -> Self {
        Self::InvalidTransition {
            operation,
            reason: TransitionBlock::WrongStatus(status),
        }
    }
}

impl From<StockError> for ProductionError {
    fn from(err: StockError) -> Self {
        match err {
            StockError::MissingIngredient(id) => Self::MissingIngredientRecord(id),
            StockError::Insufficient {
                ingredient_id,
                ingredient,
                required,
                available,
                unit,
            } => Self::InsufficientStock {
                ingredient_id,
                ingredient,
                required,
                available,
                unit,
            },
        }
    }
}

/// Category of a [`ProductionError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    InvalidQuantity,
    UnknownProduct,
    InsufficientStock,
    MissingIngredientRecord,
    InvalidTransition,
}

/// A rejected operation as shown to a user: kind plus readable message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rejection {
    /// Error category.
    pub kind: ErrorKind,
    /// Human-readable message.
    pub message: String,
}

impl From<&ProductionError> for Rejection {
    fn from(err: &ProductionError) -> Self {
        Self {
            kind: err.kind(),
            message: err.to_string(),
        }
    }
}
