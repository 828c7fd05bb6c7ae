//! Supply-chain locations.

use serde::{Deserialize, Serialize};

use bakehouse_core::{LocationId, LocationKind};

/// A headquarters, central kitchen or store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    /// Location code (e.g. `st-001`).
    pub id: LocationId,
    /// Display name (e.g. "Store #1 - Downtown").
    pub name: String,
    /// Tier in the supply chain.
    pub kind: LocationKind,
}
