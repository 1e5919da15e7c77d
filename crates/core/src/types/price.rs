//! Type-safe price representation using decimal arithmetic.
//!
//! Prices are USD-only: the catalog is a fixed single-currency list, so a
//! currency field would be dead weight. Amounts are decimal dollars, never
//! floats, so the 50% due-now split and line totals stay exact to the cent.

use core::fmt;
use core::iter::Sum;
use core::ops::Add;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Errors that can occur when constructing a [`Price`].
#[derive(thiserror::Error, Debug, Clone)]
pub enum PriceError {
    /// The amount is negative.
    #[error("price cannot be negative: {0}")]
    Negative(Decimal),
}

/// A non-negative USD amount.
///
/// ## Examples
///
/// ```
/// use servex_core::Price;
///
/// let price = Price::from_dollars(999);
/// assert_eq!(price.to_string(), "$999.00");
/// assert_eq!(price.mul_quantity(2).to_string(), "$1998.00");
/// assert_eq!(Price::from_dollars(1000).half().to_string(), "$500.00");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Price(Decimal);

impl Price {
    /// Zero dollars.
    pub const ZERO: Self = Self(Decimal::ZERO);

    /// Create a price from a decimal amount.
    ///
    /// # Errors
    ///
    /// Returns [`PriceError::Negative`] if the amount is below zero.
    pub fn new(amount: Decimal) -> Result<Self, PriceError> {
        if amount.is_sign_negative() && !amount.is_zero() {
            return Err(PriceError::Negative(amount));
        }
        Ok(Self(amount))
    }

    /// Create a price from a whole-dollar amount.
    #[must_use]
    pub fn from_dollars(dollars: u32) -> Self {
        Self(Decimal::from(dollars))
    }

    /// The underlying decimal amount.
    #[must_use]
    pub const fn amount(&self) -> Decimal {
        self.0
    }

    /// Whether this price is zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Multiply by a line quantity, saturating at `Decimal::MAX`.
    #[must_use]
    pub fn mul_quantity(&self, quantity: u32) -> Self {
        Self(self.0.saturating_mul(Decimal::from(quantity)))
    }

    /// Exactly half of this price (the 50% due-now split).
    #[must_use]
    pub fn half(&self) -> Self {
        Self(self.0 / Decimal::TWO)
    }
}

impl Add for Price {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self(self.0.saturating_add(rhs.0))
    }
}

impl Sum for Price {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Add::add)
    }
}

impl fmt::Display for Price {
    /// Fixed-point currency display, e.g. `$499.50`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "${:.2}", self.0)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_new_rejects_negative() {
        let amount = Decimal::from(-1);
        assert!(matches!(Price::new(amount), Err(PriceError::Negative(_))));
    }

    #[test]
    fn test_new_accepts_zero() {
        assert_eq!(Price::new(Decimal::ZERO).unwrap(), Price::ZERO);
    }

    #[test]
    fn test_mul_quantity() {
        let price = Price::from_dollars(799);
        assert_eq!(price.mul_quantity(3), Price::from_dollars(2397));
    }

    #[test]
    fn test_sum() {
        let total: Price = [Price::from_dollars(999), Price::from_dollars(2499)]
            .into_iter()
            .sum();
        assert_eq!(total, Price::from_dollars(3498));
    }

    #[test]
    fn test_half_is_exact() {
        assert_eq!(
            Price::from_dollars(1000).half(),
            Price::from_dollars(500)
        );
        // Odd totals split to an exact half-dollar, not a rounded value.
        let half = Price::from_dollars(999).half();
        assert_eq!(half.to_string(), "$499.50");
    }

    #[test]
    fn test_display_fixed_point() {
        assert_eq!(Price::ZERO.to_string(), "$0.00");
        assert_eq!(Price::from_dollars(3999).to_string(), "$3999.00");
    }
}
