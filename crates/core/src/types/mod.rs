//! Core types for Bakehouse.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod id;
pub mod quantity;
pub mod status;
pub mod unit;

pub use id::*;
pub use quantity::{Quantity, QuantityError};
pub use status::*;
pub use unit::Unit;
