//! # Collaborator Ports
//!
//! Everything the register needs from the outside world, as traits.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Port              Called by                   Real adapter (app)      │
//! │  ────              ─────────                   ──────────────────      │
//! │  ProductCatalog    scan                        InMemoryCatalog          │
//! │  CashierDisplay    scan                        ConsoleDisplay           │
//! │  SalesService      finalize_sales_transaction  JournalSalesService      │
//! │  ReceiptPrinter    print_receipt               ConsolePrinter           │
//! │  Clock             scan, correct_sales_price   SystemClock              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! All calls are synchronous. Display and printer calls are one-way and
//! their adapters deal with their own failures; a sales service that cannot
//! record a sale says so, because the sale must not be dropped.

use chrono::NaiveDate;
#[cfg(test)]
use mockall::automock;

use crate::error::RegisterResult;
use crate::types::{Barcode, Product, SalesRecord};

/// Resolves scanned barcodes.
#[cfg_attr(test, automock)]
pub trait ProductCatalog {
    /// `None` when the barcode is unknown.
    fn lookup_product(&self, barcode: Barcode) -> Option<Product>;
}

/// Records finalized sales.
#[cfg_attr(test, automock)]
pub trait SalesService {
    /// `Err(SaleNotRecorded)` when the sale could not be stored.
    fn sold(&mut self, record: SalesRecord) -> RegisterResult<()>;
}

/// The cashier-facing screen.
#[cfg_attr(test, automock)]
pub trait CashierDisplay {
    fn display_product(&self, product: &Product);

    /// Asks the cashier to pick the best-before date of a perishable.
    fn display_calendar(&self);

    fn display_error_message(&self, message: &str);
}

/// Receipt output, one line per call.
#[cfg_attr(test, automock)]
pub trait ReceiptPrinter {
    fn println(&self, line: &str);
}

/// Source of "today".
pub trait Clock {
    fn today(&self) -> NaiveDate;
}

/// A clock stuck on one date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(NaiveDate);

impl FixedClock {
    pub const fn new(today: NaiveDate) -> Self {
        FixedClock(today)
    }
}

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}
