//! Product catalog and recipe book.

use std::collections::HashMap;

use bakehouse_core::ProductId;

use crate::models::{Product, Recipe};

/// Read-only product lookup.
pub trait ProductCatalog {
    /// Look up a product by ID.
    fn get_product(&self, id: &ProductId) -> Option<&Product>;
}

/// Read-only recipe lookup.
pub trait RecipeBook {
    /// Look up the recipe for a product. `None` means the product has no
    /// recipe on file.
    fn get_recipe(&self, product_id: &ProductId) -> Option<&Recipe>;
}

/// In-memory catalog implementing both [`ProductCatalog`] and [`RecipeBook`].
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    products: HashMap<ProductId, Product>,
    recipes: HashMap<ProductId, Recipe>,
}

impl Catalog {
    /// Create an empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a product. Returns the previous record, if any.
    pub fn insert_product(&mut self, product: Product) -> Option<Product> {
        self.products.insert(product.id.clone(), product)
    }

    /// Insert or replace a recipe. Returns the previous recipe, if any.
    pub fn insert_recipe(&mut self, recipe: Recipe) -> Option<Recipe> {
        self.recipes.insert(recipe.product_id.clone(), recipe)
    }

    /// All products, sorted by ID.
    #[must_use]
    pub fn products(&self) -> Vec<&Product> {
        let mut all: Vec<&Product> = self.products.values().collect();
        all.sort_by(|a, b| a.id.cmp(&b.id));
        all
    }

    /// Number of recipes on file.
    #[must_use]
    pub fn recipe_count(&self) -> usize {
        self.recipes.len()
    }
}

impl ProductCatalog for Catalog {
    fn get_product(&self, id: &ProductId) -> Option<&Product> {
        self.products.get(id)
    }
}

impl RecipeBook for Catalog {
    fn get_recipe(&self, product_id: &ProductId) -> Option<&Recipe> {
        self.recipes.get(product_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bakehouse_core::{IngredientId, Unit};

    use crate::models::RecipeLine;

    #[test]
    fn test_lookup_products_and_recipes() {
        let mut catalog = Catalog::new();
        let bread = ProductId::new("prod-001");
        catalog.insert_product(Product {
            id: bread.clone(),
            name: "Basic White Bread".to_string(),
            category: "Breads".to_string(),
            unit: Unit::Loaf,
        });
        catalog.insert_recipe(Recipe {
            product_id: bread.clone(),
            lines: vec![RecipeLine {
                ingredient_id: IngredientId::new("ing-001"),
                quantity_per_unit: "0.5".parse().unwrap(),
            }],
        });

        assert_eq!(
            catalog.get_product(&bread).map(|p| p.name.as_str()),
            Some("Basic White Bread")
        );
        assert_eq!(catalog.get_recipe(&bread).map(|r| r.lines.len()), Some(1));
        assert!(catalog.get_recipe(&ProductId::new("prod-004")).is_none());
        assert_eq!(catalog.recipe_count(), 1);
    }

    #[test]
    fn test_insert_product_replaces() {
        let mut catalog = Catalog::new();
        let product = Product {
            id: ProductId::new("prod-004"),
            name: "Baguette".to_string(),
            category: "Breads".to_string(),
            unit: Unit::Piece,
        };
        assert!(catalog.insert_product(product.clone()).is_none());
        assert_eq!(catalog.insert_product(product.clone()), Some(product));
        assert_eq!(catalog.products().len(), 1);
    }
}
