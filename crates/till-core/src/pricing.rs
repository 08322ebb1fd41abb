//! # Best-Before Pricing
//!
//! Perishables are sold cheaper as their best-before date approaches.
//!
//! ## Default Schedule
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  days until best-before      price charged       list 150 →            │
//! │  ──────────────────────      ─────────────       ──────────            │
//! │        ≥ 2                    100%                 150                 │
//! │          1                     65%                  97                 │
//! │          0  (sold on the date) 35%                  52                 │
//! │        < 0  (expired)           0%                   0                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The schedule is data so a store can configure it; the default is the table
//! above.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::money::Money;

/// Whole days from `today` until `best_before`; negative once expired.
///
/// ## Example
/// ```rust
/// use chrono::NaiveDate;
/// use till_core::days_until;
///
/// let today = NaiveDate::from_ymd_opt(2024, 3, 14).unwrap();
/// let best_before = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
/// assert_eq!(days_until(today, best_before), 1);
/// assert_eq!(days_until(best_before, today), -1);
/// ```
pub fn days_until(today: NaiveDate, best_before: NaiveDate) -> i64 {
    best_before.signed_duration_since(today).num_days()
}

// =============================================================================
// Discount Tier
// =============================================================================

/// Charge `percent` of the list price from `min_days_remaining` days onward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiscountTier {
    pub min_days_remaining: i64,
    pub percent: u8,
}

impl DiscountTier {
    pub const fn new(min_days_remaining: i64, percent: u8) -> Self {
        DiscountTier {
            min_days_remaining,
            percent,
        }
    }
}

// =============================================================================
// Discount Schedule
// =============================================================================

/// Maps days-until-best-before to a percentage of the list price.
///
/// The tier with the highest `min_days_remaining` not exceeding the remaining
/// days wins. Below every tier, `expired_percent` applies.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiscountSchedule {
    pub tiers: Vec<DiscountTier>,

    #[serde(default)]
    pub expired_percent: u8,
}

impl Default for DiscountSchedule {
    fn default() -> Self {
        DiscountSchedule {
            tiers: vec![
                DiscountTier::new(2, 100),
                DiscountTier::new(1, 65),
                DiscountTier::new(0, 35),
            ],
            expired_percent: 0,
        }
    }
}

impl DiscountSchedule {
    /// Percentage of the list price charged with `days` days remaining.
    pub fn percent_for(&self, days: i64) -> u8 {
        self.tiers
            .iter()
            .filter(|tier| days >= tier.min_days_remaining)
            .max_by_key(|tier| tier.min_days_remaining)
            .map_or(self.expired_percent, |tier| tier.percent)
    }

    /// Price charged for `list_price` with `days` days remaining.
    pub fn price_for(&self, list_price: Money, days: i64) -> Money {
        list_price.percent(self.percent_for(days))
    }

    /// Checks the schedule is usable.
    ///
    /// ## Rules
    /// - At least one tier
    /// - Every percentage (tiers and expired) within 0..=100
    /// - No two tiers with the same threshold
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.tiers.is_empty() {
            return Err(ValidationError::Required {
                field: "pricing.tiers".to_string(),
            });
        }

        let percents = self
            .tiers
            .iter()
            .map(|tier| tier.percent)
            .chain(std::iter::once(self.expired_percent));
        for percent in percents {
            if percent > 100 {
                return Err(ValidationError::OutOfRange {
                    field: "pricing.percent".to_string(),
                    min: 0,
                    max: 100,
                });
            }
        }

        for (i, tier) in self.tiers.iter().enumerate() {
            if self.tiers[..i]
                .iter()
                .any(|other| other.min_days_remaining == tier.min_days_remaining)
            {
                return Err(ValidationError::Duplicate {
                    field: "pricing.min_days_remaining".to_string(),
                    value: tier.min_days_remaining.to_string(),
                });
            }
        }

        Ok(())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
