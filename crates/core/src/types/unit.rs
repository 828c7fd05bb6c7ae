//! Units of measure for ingredients and products.

use serde::{Deserialize, Serialize};

/// Unit of measure.
///
/// Ingredients are stocked by weight, volume or count; products are made by
/// the loaf or by the piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Unit {
    #[serde(rename = "kg")]
    Kilogram,
    #[serde(rename = "liters")]
    Liter,
    #[serde(rename = "dozen")]
    Dozen,
    #[serde(rename = "loaf")]
    Loaf,
    #[serde(rename = "piece")]
    Piece,
}

impl Unit {
    /// Short label used in messages and tables.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Kilogram => "kg",
            Self::Liter => "liters",
            Self::Dozen => "dozen",
            Self::Loaf => "loaf",
            Self::Piece => "piece",
        }
    }
}

impl std::fmt::Display for Unit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl std::str::FromStr for Unit {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "kg" => Ok(Self::Kilogram),
            "liters" => Ok(Self::Liter),
            "dozen" => Ok(Self::Dozen),
            "loaf" => Ok(Self::Loaf),
            "piece" => Ok(Self::Piece),
            _ => Err(format!("invalid unit: {s}")),
        }
    }
}
