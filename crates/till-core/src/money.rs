//! # Money Module
//!
//! Provides the `Money` type for prices on the register.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  150 × 0.65 in floating point = 97.50000000000001                      │
//! │  150 × 0.35 in floating point = 52.49999999999999                      │
//! │                                                                         │
//! │  OUR SOLUTION: Integer smallest-unit amounts                           │
//! │    150 × 65 / 100 = 97   (truncated toward zero)                       │
//! │    150 × 35 / 100 = 52                                                 │
//! │    The result never depends on float representation                    │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! There is no currency here: a `Money` is an amount in the smallest unit of
//! whatever currency the store uses, and it prints as that bare integer.

use serde::{Deserialize, Serialize};
use std::fmt;

// =============================================================================
// Money Type
// =============================================================================

/// Represents a monetary value in the smallest currency unit.
///
/// ## Where Money is Used
/// ```text
/// Product.price ──► SalesRecord.sales_price ──► DiscountSchedule::price_for
///                                     │
///                                     └──► "Sales price: 97" on the receipt
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from the smallest currency unit.
    ///
    /// ## Example
    /// ```rust
    /// use till_core::money::Money;
    ///
    /// let price = Money::from_cents(250);
    /// assert_eq!(price.cents(), 250);
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Returns the value in the smallest currency unit.
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Checks if the value is negative (less than zero).
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Returns `percent`% of this amount, truncated toward zero.
    ///
    /// ## Example
    /// ```rust
    /// use till_core::money::Money;
    ///
    /// let list = Money::from_cents(150);
    /// assert_eq!(list.percent(65).cents(), 97);
    /// assert_eq!(list.percent(35).cents(), 52);
    /// assert_eq!(list.percent(100), list);
    /// assert_eq!(list.percent(0), Money::zero());
    /// ```
    ///
    /// ## Implementation
    /// Integer division truncates toward zero, which is exactly the rounding
    /// the price reduction wants. The product is taken in i128, and a result
    /// outside the i64 range (only possible above 100%) saturates.
    pub fn percent(&self, percent: u8) -> Money {
        let cents = i128::from(self.0) * i128::from(percent) / 100;
        let cents = i64::try_from(cents).unwrap_or(if cents < 0 { i64::MIN } else { i64::MAX });
        Money::from_cents(cents)
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Prints the bare smallest-unit amount, as it appears on the receipt.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Default money is zero.
impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_cents() {
        let money = Money::from_cents(1099);
        assert_eq!(money.cents(), 1099);
    }

    #[test]
    fn test_display_is_bare_integer() {
        assert_eq!(format!("{}", Money::from_cents(97)), "97");
        assert_eq!(format!("{}", Money::from_cents(0)), "0");
        assert_eq!(format!("{}", Money::from_cents(-5)), "-5");
    }

    #[test]
    fn test_percent_truncates() {
        let list = Money::from_cents(800);
        assert_eq!(list.percent(65).cents(), 520);
        assert_eq!(list.percent(35).cents(), 280);

        // 99 × 65 / 100 = 64.35 → 64
        assert_eq!(Money::from_cents(99).percent(65).cents(), 64);
        // 1 × 35 / 100 = 0.35 → 0
        assert_eq!(Money::from_cents(1).percent(35), Money::zero());
    }

    #[test]
    fn test_percent_truncates_toward_zero_for_negative() {
        // -150 × 65 / 100 = -97.5 → -97, not -98
        assert_eq!(Money::from_cents(-150).percent(65).cents(), -97);
    }

    #[test]
    fn test_percent_saturates_instead_of_wrapping() {
        assert_eq!(Money::from_cents(i64::MAX).percent(200).cents(), i64::MAX);
        assert_eq!(Money::from_cents(i64::MIN).percent(200).cents(), i64::MIN);
        assert_eq!(Money::from_cents(i64::MAX).percent(100).cents(), i64::MAX);
    }

    #[test]
    fn test_zero_and_checks() {
        assert_eq!(Money::zero().cents(), 0);
        assert_eq!(Money::default(), Money::zero());
        assert!(Money::from_cents(-1).is_negative());
        assert!(!Money::from_cents(1).is_negative());
    }
}
