//! Seed data: the locations, catalog and stock levels the planner starts from.
//!
//! Seed files are YAML. The bundled sample (`data/sample.yaml`) describes a
//! headquarters, a central kitchen and five stores with ten products and four
//! recipes.
//!
//! # Example
//!
//! ```yaml
//! locations:
//!   - { id: st-001, name: "Store #1 - Downtown", kind: store }
//! products:
//!   - { id: prod-001, name: "Basic White Bread", category: "Breads", unit: loaf }
//! recipes:
//!   prod-001:
//!     - { ingredient_id: ing-001, quantity_per_unit: "0.5" }
//! inventories:
//!   st-001:
//!     - { id: ing-001, name: "Flour", unit: kg, quantity: "45" }
//! low_stock_thresholds:
//!   st-001: { ing-001: "10" }
//! ```

use std::collections::{BTreeMap, HashMap, HashSet};
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::info;

use bakehouse_core::{IngredientId, LocationId, ProductId, Quantity};

use crate::models::{Ingredient, Location, Product, Recipe, RecipeLine};
use crate::store::{Catalog, InMemoryLedger, LocationDirectory};

const SAMPLE_YAML: &str = include_str!("../data/sample.yaml");

/// Errors that can occur while loading seed data.
#[derive(Debug, Error)]
pub enum SeedError {
    /// The seed file could not be read.
    #[error("failed to read seed file: {0}")]
    Io(#[from] std::io::Error),

    /// The seed file is not valid YAML for [`SeedData`].
    #[error("invalid seed file: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// Two products share an ID.
    #[error("duplicate product id: {0}")]
    DuplicateProduct(ProductId),

    /// A recipe is filed under a product that does not exist.
    #[error("recipe for unknown product: {0}")]
    UnknownRecipeProduct(ProductId),

    /// Inventory or thresholds reference a location that does not exist.
    #[error("unknown location: {0}")]
    UnknownLocation(LocationId),
}

/// The whole sample world, as stored in a seed file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeedData {
    /// All locations.
    pub locations: Vec<Location>,
    /// Product catalog.
    pub products: Vec<Product>,
    /// Recipe lines keyed by product.
    #[serde(default)]
    pub recipes: BTreeMap<ProductId, Vec<RecipeLine>>,
    /// Ingredient stock keyed by location.
    #[serde(default)]
    pub inventories: BTreeMap<LocationId, Vec<Ingredient>>,
    /// Low-stock thresholds keyed by location, then ingredient.
    #[serde(default)]
    pub low_stock_thresholds: BTreeMap<LocationId, BTreeMap<IngredientId, Quantity>>,
}

impl SeedData {
    /// The bundled sample data set.
    ///
    /// # Errors
    ///
    /// Returns [`SeedError`] if the bundled file fails to parse or validate.
    pub fn sample() -> Result<Self, SeedError> {
        Self::from_yaml(SAMPLE_YAML)
    }

    /// Load and validate a seed file.
    ///
    /// # Errors
    ///
    /// Returns [`SeedError`] if the file cannot be read, parsed or validated.
    pub fn from_path(path: &Path) -> Result<Self, SeedError> {
        let content = std::fs::read_to_string(path)?;
        let seed = Self::from_yaml(&content)?;
        info!(path = %path.display(), products = seed.products.len(), "Loaded seed file");
        Ok(seed)
    }

    /// Parse and validate seed YAML.
    ///
    /// # Errors
    ///
    /// Returns [`SeedError`] if the YAML is malformed or fails validation.
    pub fn from_yaml(content: &str) -> Result<Self, SeedError> {
        let seed: Self = serde_yaml::from_str(content)?;
        seed.validate()?;
        Ok(seed)
    }

    /// Check cross-references between sections.
    ///
    /// Recipe lines naming unknown ingredients are allowed; they surface as
    /// missing-ingredient errors when checked against a ledger.
    ///
    /// # Errors
    ///
    /// Returns the first [`SeedError`] found.
    pub fn validate(&self) -> Result<(), SeedError> {
        let mut product_ids = HashSet::new();
        for product in &self.products {
            if !product_ids.insert(&product.id) {
                return Err(SeedError::DuplicateProduct(product.id.clone()));
            }
        }
        if let Some(product_id) = self.recipes.keys().find(|id| !product_ids.contains(id)) {
            return Err(SeedError::UnknownRecipeProduct(product_id.clone()));
        }

        let location_ids: HashSet<&LocationId> = self.locations.iter().map(|l| &l.id).collect();
        if let Some(location_id) = self
            .inventories
            .keys()
            .chain(self.low_stock_thresholds.keys())
            .find(|id| !location_ids.contains(id))
        {
            return Err(SeedError::UnknownLocation(location_id.clone()));
        }
        Ok(())
    }

    /// Build the product catalog and recipe book.
    #[must_use]
    pub fn catalog(&self) -> Catalog {
        let mut catalog = Catalog::new();
        for product in &self.products {
            catalog.insert_product(product.clone());
        }
        for (product_id, lines) in &self.recipes {
            catalog.insert_recipe(Recipe {
                product_id: product_id.clone(),
                lines: lines.clone(),
            });
        }
        catalog
    }

    /// Build the ledger for one location. A known location with no
    /// inventory section gets an empty ledger.
    ///
    /// # Errors
    ///
    /// Returns [`SeedError::UnknownLocation`] if the location does not exist.
    pub fn ledger_for(&self, location_id: &LocationId) -> Result<InMemoryLedger, SeedError> {
        self.ensure_location(location_id)?;
        Ok(self
            .inventories
            .get(location_id)
            .into_iter()
            .flatten()
            .cloned()
            .collect())
    }

    /// Low-stock thresholds for one location (empty if none configured).
    ///
    /// # Errors
    ///
    /// Returns [`SeedError::UnknownLocation`] if the location does not exist.
    pub fn thresholds_for(
        &self,
        location_id: &LocationId,
    ) -> Result<HashMap<IngredientId, Quantity>, SeedError> {
        self.ensure_location(location_id)?;
        Ok(self
            .low_stock_thresholds
            .get(location_id)
            .into_iter()
            .flatten()
            .map(|(id, threshold)| (id.clone(), *threshold))
            .collect())
    }

    /// Build the location directory.
    #[must_use]
    pub fn directory(&self) -> LocationDirectory {
        self.locations.iter().cloned().collect()
    }

    fn ensure_location(&self, location_id: &LocationId) -> Result<(), SeedError> {
        if self.locations.iter().any(|l| &l.id == location_id) {
            Ok(())
        } else {
            Err(SeedError::UnknownLocation(location_id.clone()))
        }
    }
}
