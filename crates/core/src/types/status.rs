//! Status enums for various entities.

use serde::{Deserialize, Serialize};

/// Lifecycle status of a production day.
///
/// Transitions are one-directional: `Draft -> InProgress -> Completed`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum ProductionStatus {
    /// Items may be added and removed.
    #[default]
    Draft,
    /// Production has started; the item list is frozen.
    InProgress,
    /// Remaining quantities have been recorded. Terminal.
    Completed,
}

impl ProductionStatus {
    /// Whether moving from `self` to `next` is a legal transition.
    #[must_use]
    pub const fn can_transition_to(self, next: Self) -> bool {
        matches!(
            (self, next),
            (Self::Draft, Self::InProgress) | (Self::InProgress, Self::Completed)
        )
    }

    /// Whether no further transitions are possible.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Completed)
    }
}

impl std::fmt::Display for ProductionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Draft => write!(f, "draft"),
            Self::InProgress => write!(f, "in-progress"),
            Self::Completed => write!(f, "completed"),
        }
    }
}

impl std::str::FromStr for ProductionStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "draft" => Ok(Self::Draft),
            "in-progress" => Ok(Self::InProgress),
            "completed" => Ok(Self::Completed),
            _ => Err(format!("invalid production status: {s}")),
        }
    }
}

/// Tier of a location in the supply chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LocationKind {
    /// Headquarters warehouse; source of ingredient orders.
    Headquarters,
    /// Central kitchen supplying the stores.
    CentralKitchen,
    /// Retail store with its own daily production.
    Store,
}

impl LocationKind {
    /// Whether ingredient orders can be sent to this kind of location.
    #[must_use]
    pub const fn accepts_ingredient_orders(self) -> bool {
        matches!(self, Self::CentralKitchen | Self::Store)
    }
}

impl std::fmt::Display for LocationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Headquarters => write!(f, "Headquarters"),
            Self::CentralKitchen => write!(f, "Central Kitchen"),
            Self::Store => write!(f, "Store"),
        }
    }
}
