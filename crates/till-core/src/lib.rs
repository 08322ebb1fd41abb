//! # till-core: Pure Register Logic
//!
//! This crate drives one sales transaction at a cash register: barcode scan,
//! best-before price correction for perishables, finalization towards a sales
//! service, and receipt printing.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                          Till Architecture                              │
//! │                                                                         │
//! │   Scanner / Cashier input                                               │
//! │          │                                                              │
//! │          ▼                                                              │
//! │  ┌───────────────────────────────────────────────────────────────────┐ │
//! │  │                ★ till-core (THIS CRATE) ★                         │ │
//! │  │                                                                   │ │
//! │  │   Register ──► SalesLedger (perishable)                           │ │
//! │  │       │   └──► SalesLedger (non-perishable)                       │ │
//! │  │       │                                                           │ │
//! │  │       └──► DiscountSchedule (best-before pricing)                 │ │
//! │  │                                                                   │ │
//! │  │   NO I/O • every side effect goes through a collaborator trait    │ │
//! │  └───────┬──────────────┬───────────────┬───────────────┬────────────┘ │
//! │          ▼              ▼               ▼               ▼              │
//! │   ProductCatalog   SalesService   CashierDisplay   ReceiptPrinter      │
//! │   (lookup)         (sold)         (prompts)        (println)           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Barcode, Product, SalesRecord)
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`pricing`] - Best-before discount schedule
//! - [`ledger`] - Insertion-ordered Product → SalesRecord list
//! - [`ports`] - Collaborator traits and the injected clock
//! - [`register`] - The register session itself
//! - [`receipt`] - Receipt line formatting
//! - [`validation`] - Catalog data validation
//! - [`error`] - Domain error types
//!
//! ## Example Usage
//!
//! ```rust
//! use till_core::{DiscountSchedule, Money};
//!
//! let schedule = DiscountSchedule::default();
//! let list_price = Money::from_cents(150);
//!
//! // One day before best-before: 65% of list price, truncated
//! assert_eq!(schedule.price_for(list_price, 1).cents(), 97);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod ledger;
pub mod money;
pub mod ports;
pub mod pricing;
pub mod receipt;
pub mod register;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::{RegisterError, RegisterResult, ValidationError};
pub use ledger::SalesLedger;
pub use money::Money;
pub use ports::{CashierDisplay, Clock, FixedClock, ProductCatalog, ReceiptPrinter, SalesService};
pub use pricing::{days_until, DiscountSchedule, DiscountTier};
pub use receipt::ReceiptLine;
pub use register::Register;
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Message shown on the cashier display when a barcode cannot be resolved.
pub const NO_PRODUCT_FOUND_MESSAGE: &str = "No product found!";

/// Message carried by [`RegisterError::UnknownBestBeforeDate`].
pub const BEST_BEFORE_REQUIRED_MESSAGE: &str = "Best before date must not be null!";
