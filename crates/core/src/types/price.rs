//! Type-safe price representation using decimal arithmetic.
//!
//! Prices use [`rust_decimal::Decimal`] rather than a float so that values
//! like `2.99` survive storage round-trips exactly. On the wire a price is a
//! decimal string (e.g. `"2.99"`).

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A product price in the store's single currency.
///
/// Amounts are in the currency's standard unit (e.g. dollars, not cents).
/// Negative amounts are representable but rejected at the catalog boundary.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Price(Decimal);

impl Price {
    /// A zero price, the default for products created without one.
    pub const ZERO: Self = Self(Decimal::ZERO);

    /// Create a price from a decimal amount.
    #[must_use]
    pub const fn new(amount: Decimal) -> Self {
        Self(amount)
    }

    /// Create a price from an amount in cents (e.g. `299` -> `2.99`).
    #[must_use]
    pub fn from_cents(cents: i64) -> Self {
        Self(Decimal::new(cents, 2))
    }

    /// Get the decimal amount.
    #[must_use]
    pub const fn amount(&self) -> Decimal {
        self.0
    }

    /// Whether this price is below zero.
    #[must_use]
    pub fn is_negative(&self) -> bool {
        self.0 < Decimal::ZERO
    }
}

impl core::fmt::Display for Price {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<Decimal> for Price {
    fn from(amount: Decimal) -> Self {
        Self(amount)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_cents() {
        assert_eq!(Price::from_cents(299).to_string(), "2.99");
        assert_eq!(Price::from_cents(0), Price::ZERO);
    }

    #[test]
    fn test_is_negative() {
        assert!(Price::from_cents(-1).is_negative());
        assert!(!Price::ZERO.is_negative());
        assert!(!Price::from_cents(100).is_negative());
    }

    #[test]
    fn test_serializes_as_decimal_string() {
        let json = serde_json::to_string(&Price::from_cents(349)).expect("serialize");
        assert_eq!(json, "\"3.49\"");

        let back: Price = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, Price::from_cents(349));
    }
}
