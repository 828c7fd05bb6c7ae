//! Bakehouse Core - Shared types library.
//!
//! This crate provides common types used across all Bakehouse components:
//! - `planner` - Inventory ledger, recipes, production days and ingredient orders
//! - `cli` - Command-line front end for the planner
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no storage, no logging.
//! This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs, quantities, units and statuses

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
