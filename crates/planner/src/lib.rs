//! Bakehouse Planner library.
//!
//! Back-office logic for a bakery supply chain: headquarters ships
//! ingredients to the central kitchen and stores, and each store plans its
//! daily production against the ingredients it has on hand.
//!
//! # Architecture
//!
//! - [`models`] - Plain domain records (ingredients, recipes, production days, orders)
//! - [`store`] - In-memory ledgers and lookup tables behind small traits
//! - [`services`] - Availability checks, the production-day workflow,
//!   ingredient orders and the low-stock report
//! - [`seed`] - Sample data set and YAML seed files
//! - [`config`] - Environment configuration
//!
//! All operations are synchronous. Mutations take `&mut self`, and a
//! rejected operation leaves every ledger and every day untouched.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod config;
pub mod error;
pub mod models;
pub mod seed;
pub mod services;
pub mod store;

pub use config::{ConfigError, LogFormat, PlannerConfig};
pub use error::{DayOperation, ErrorKind, ProductionError, Rejection, TransitionBlock};
pub use seed::{SeedData, SeedError};
pub use services::availability::check_availability;
pub use services::low_stock::{LowStockItem, low_stock_report};
pub use services::orders::{IngredientOrderDraft, OrderError, OrderProblem};
pub use services::production::ProductionPlanner;
pub use store::{
    Catalog, InMemoryLedger, InventoryLedger, LocationDirectory, ProductCatalog, RecipeBook,
    StockError,
};
