//! Domain models for the planner.

pub mod catalog;
pub mod location;
pub mod order;
pub mod production;

pub use catalog::{Ingredient, Product, Recipe, RecipeLine, Requirement};
pub use location::Location;
pub use order::{IngredientOrder, OrderLine};
pub use production::{CategoryGroup, ProductionDay, ProductionItem, ProductionSummary};
