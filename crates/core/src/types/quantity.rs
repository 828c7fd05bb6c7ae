//! Non-negative decimal quantities.
//!
//! Stock levels, recipe amounts and production counts all use [`Quantity`].
//! Decimal arithmetic keeps recipe math exact (`0.5 kg x 100 = 50 kg`).

use core::fmt;
use core::ops::{Add, AddAssign};
use core::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Errors that can occur when building a [`Quantity`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum QuantityError {
    /// The input string is empty or whitespace.
    #[error("quantity cannot be empty")]
    Empty,
    /// The input string is not a decimal number.
    #[error("quantity must be a number, got {0:?}")]
    NotANumber(String),
    /// The value is below zero.
    #[error("quantity cannot be negative, got {0}")]
    Negative(Decimal),
    /// The value is zero where a positive amount is required.
    #[error("quantity must be greater than zero")]
    NonPositive,
}

/// A quantity that is never negative.
///
/// ## Examples
///
/// ```
/// use bakehouse_core::Quantity;
///
/// let flour = Quantity::parse("45").unwrap();
/// let per_loaf = Quantity::parse("0.5").unwrap();
/// let loaves = Quantity::parse_positive("50").unwrap();
///
/// assert!(per_loaf.times(loaves) <= flour);
/// assert!(Quantity::parse("-3").is_err());
/// assert!(Quantity::parse_positive("0").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "Decimal", into = "Decimal")]
pub struct Quantity(Decimal);

impl Quantity {
    /// The zero quantity.
    pub const ZERO: Self = Self(Decimal::ZERO);

    /// Create a quantity from a decimal value.
    ///
    /// # Errors
    ///
    /// Returns [`QuantityError::Negative`] if `value` is below zero.
    pub fn new(value: Decimal) -> Result<Self, QuantityError> {
        if value.is_sign_negative() && !value.is_zero() {
            return Err(QuantityError::Negative(value));
        }
        Ok(Self(value))
    }

    /// Create a quantity that must be strictly positive.
    ///
    /// # Errors
    ///
    /// Returns [`QuantityError::Negative`] or [`QuantityError::NonPositive`].
    pub fn positive(value: Decimal) -> Result<Self, QuantityError> {
        let quantity = Self::new(value)?;
        if quantity.is_zero() {
            return Err(QuantityError::NonPositive);
        }
        Ok(quantity)
    }

    /// Parse a quantity from untrusted text input.
    ///
    /// Surrounding whitespace is ignored.
    ///
    /// # Errors
    ///
    /// Returns an error if the input is empty, not a number, or negative.
    pub fn parse(input: &str) -> Result<Self, QuantityError> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(QuantityError::Empty);
        }
        let value = Decimal::from_str(trimmed)
            .map_err(|_| QuantityError::NotANumber(trimmed.to_owned()))?;
        Self::new(value)
    }

    /// Parse a strictly positive quantity from untrusted text input.
    ///
    /// # Errors
    ///
    /// Returns an error if the input is empty, not a number, or not above zero.
    pub fn parse_positive(input: &str) -> Result<Self, QuantityError> {
        let quantity = Self::parse(input)?;
        if quantity.is_zero() {
            return Err(QuantityError::NonPositive);
        }
        Ok(quantity)
    }

    /// Coerce a signed value into `[0, max]`.
    #[must_use]
    pub fn clamped(value: Decimal, max: Self) -> Self {
        Self(value.clamp(Decimal::ZERO, max.0))
    }

    /// Get the underlying decimal value.
    #[must_use]
    pub const fn value(&self) -> Decimal {
        self.0
    }

    /// Whether this quantity is zero.
    #[must_use]
    pub const fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Multiply by a count (e.g. per-unit amount x units), saturating on overflow.
    #[must_use]
    pub fn times(self, count: Self) -> Self {
        Self(self.0.saturating_mul(count.0))
    }

    /// Subtract `other`, returning `None` if the result would be negative.
    #[must_use]
    pub fn checked_sub(self, other: Self) -> Option<Self> {
        if other.0 > self.0 {
            return None;
        }
        self.0.checked_sub(other.0).map(Self)
    }

    /// Subtract `other`, stopping at zero.
    #[must_use]
    pub fn saturating_sub(self, other: Self) -> Self {
        self.checked_sub(other).unwrap_or(Self::ZERO)
    }
}

impl Add for Quantity {
    type Output = Self;

    /// Saturates at the decimal maximum instead of overflowing.
    fn add(self, rhs: Self) -> Self {
        Self(self.0.saturating_add(rhs.0))
    }
}

impl AddAssign for Quantity {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl core::iter::Sum for Quantity {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Add::add)
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.normalize())
    }
}

impl FromStr for Quantity {
    type Err = QuantityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<Decimal> for Quantity {
    type Error = QuantityError;

    fn try_from(value: Decimal) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// Normalized, so the serialized form matches `Display` (`13`, not `13.0`).
impl From<Quantity> for Decimal {
    fn from(quantity: Quantity) -> Self {
        quantity.0.normalize()
    }
}
