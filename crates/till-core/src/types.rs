//! # Domain Types
//!
//! Core domain types used by the register.
//!
//! ## Type Overview
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐        ┌──────────────────┐                        │
//! │  │    Product      │        │   SalesRecord    │                        │
//! │  │  ─────────────  │ scan   │  ──────────────  │                        │
//! │  │  barcode        │ ─────► │  barcode         │                        │
//! │  │  code           │        │  sold_on         │                        │
//! │  │  description    │        │  sales_price     │  ◄── best-before      │
//! │  │  price          │        │  quantity        │      correction       │
//! │  │  perishable     │        │  best_before     │                        │
//! │  └─────────────────┘        └──────────────────┘                        │
//! │     immutable                  mutable, one per product per sale        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::money::Money;

// =============================================================================
// Barcode
// =============================================================================

/// Numeric product identifier as read by the scanner.
///
/// Any value is accepted; whether it resolves to a product is up to the
/// catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Barcode(i64);

impl Barcode {
    #[inline]
    pub const fn new(value: i64) -> Self {
        Barcode(value)
    }
}

impl fmt::Display for Barcode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// =============================================================================
// Product
// =============================================================================

/// A product the catalog can resolve.
///
/// Two products with the same barcode are the same product as far as the
/// register ledgers are concerned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    /// Scanner identifier.
    pub barcode: Barcode,

    /// Short code, e.g. "banana".
    pub code: String,

    /// Description printed on the receipt, e.g. "Bananas Fyffes".
    pub description: String,

    /// Unit list price.
    pub price: Money,

    /// Perishable goods get a best-before price correction.
    #[serde(default)]
    pub perishable: bool,
}

impl Product {
    /// Creates a product.
    pub fn new(
        code: impl Into<String>,
        description: impl Into<String>,
        price: Money,
        barcode: Barcode,
        perishable: bool,
    ) -> Self {
        Product {
            barcode,
            code: code.into(),
            description: description.into(),
            price,
            perishable,
        }
    }
}

// =============================================================================
// Sales Record
// =============================================================================

/// One line of a sales transaction.
///
/// ## Snapshot Pattern
/// The list price is copied in at scan time. A later best-before correction
/// overwrites `sales_price`; the product itself is never touched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalesRecord {
    pub barcode: Barcode,

    /// Date of sale, taken from the register's clock.
    pub sold_on: NaiveDate,

    /// Price per piece, possibly reduced from the list price.
    pub sales_price: Money,

    /// Number of pieces, one per scan.
    pub quantity: u32,

    /// Best-before date the price was corrected against, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub best_before: Option<NaiveDate>,
}

impl SalesRecord {
    /// Creates a record for a first scan: quantity 1, no correction yet.
    pub fn new(barcode: Barcode, sold_on: NaiveDate, sales_price: Money) -> Self {
        SalesRecord {
            barcode,
            sold_on,
            sales_price,
            quantity: 1,
            best_before: None,
        }
    }

    /// Adds `amount` pieces.
    pub fn increase_quantity(&mut self, amount: u32) {
        self.quantity = self.quantity.saturating_add(amount);
    }

    /// Sets the corrected price together with the date it was derived from.
    pub fn correct_price(&mut self, sales_price: Money, best_before: NaiveDate) {
        self.sales_price = sales_price;
        self.best_before = Some(best_before);
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
