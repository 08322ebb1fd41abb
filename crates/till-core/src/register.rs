//! # Register
//!
//! One cash register session: scan, correct, finalize, print.
//!
//! ## Transaction Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  scan(barcode) ──► catalog lookup ──► None ──► display error            │
//! │       │                                          Err(UnknownProduct)    │
//! │       ▼                                                                 │
//! │  close previous item ──► ledger: new record or quantity + 1             │
//! │       │                                                                 │
//! │       ├── perishable ──► display calendar ──► correct_sales_price(date) │
//! │       │                                                                 │
//! │       └── non-perishable ──► list price, no discount                    │
//! │                                                                         │
//! │  print_receipt() ──► perishables (scan order), then the rest            │
//! │                                                                         │
//! │  finalize_sales_transaction() ──► sold(record) × N ──► empty session    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Current Item
//! Only the most recently scanned product is "current". Scanning the next
//! product closes the previous one: a perishable that was never corrected
//! stays at its list price. Nothing reaches the sales service before
//! [`Register::finalize_sales_transaction`].

use chrono::NaiveDate;
use tracing::{debug, info, warn};

use crate::error::{RegisterError, RegisterResult, ValidationError};
use crate::ledger::SalesLedger;
use crate::money::Money;
use crate::ports::{CashierDisplay, Clock, ProductCatalog, ReceiptPrinter, SalesService};
use crate::pricing::{days_until, DiscountSchedule};
use crate::receipt::ReceiptLine;
use crate::types::{Barcode, Product, SalesRecord};
use crate::NO_PRODUCT_FOUND_MESSAGE;

/// A cash register serving one transaction at a time.
pub struct Register {
    clock: Box<dyn Clock>,
    printer: Box<dyn ReceiptPrinter>,
    display: Box<dyn CashierDisplay>,
    sales_service: Box<dyn SalesService>,
    catalog: Box<dyn ProductCatalog>,
    schedule: DiscountSchedule,

    perishables: SalesLedger,
    non_perishables: SalesLedger,

    current_item: Option<Product>,
    /// `NaiveDate::MAX` for a non-perishable current item (no discount).
    pending_best_before: Option<NaiveDate>,
    pending_price: Money,
}

impl Register {
    /// Creates an empty register using the default discount schedule.
    pub fn new(
        clock: impl Clock + 'static,
        printer: impl ReceiptPrinter + 'static,
        display: impl CashierDisplay + 'static,
        sales_service: impl SalesService + 'static,
        catalog: impl ProductCatalog + 'static,
    ) -> Self {
        Register {
            clock: Box::new(clock),
            printer: Box::new(printer),
            display: Box::new(display),
            sales_service: Box::new(sales_service),
            catalog: Box::new(catalog),
            schedule: DiscountSchedule::default(),
            perishables: SalesLedger::new(),
            non_perishables: SalesLedger::new(),
            current_item: None,
            pending_best_before: None,
            pending_price: Money::zero(),
        }
    }

    /// Replaces the best-before discount schedule after validating it.
    pub fn with_discount_schedule(
        mut self,
        schedule: DiscountSchedule,
    ) -> Result<Self, ValidationError> {
        schedule.validate()?;
        self.schedule = schedule;
        Ok(self)
    }

    // =========================================================================
    // Operations
    // =========================================================================

    /// Handles a barcode coming from the scanner.
    ///
    /// An unknown barcode is reported on the display and leaves the session
    /// exactly as it was, including the current item.
    pub fn scan(&mut self, barcode: Barcode) -> RegisterResult<()> {
        let Some(product) = self.catalog.lookup_product(barcode) else {
            warn!(%barcode, "Scanned barcode is not in the catalog");
            self.display.display_error_message(NO_PRODUCT_FOUND_MESSAGE);
            return Err(RegisterError::UnknownProduct { barcode });
        };

        self.close_current_item();

        let ledger = if product.perishable {
            &mut self.perishables
        } else {
            &mut self.non_perishables
        };

        match ledger.get_mut(product.barcode) {
            Some(record) => {
                record.increase_quantity(1);
                debug!(barcode = %product.barcode, quantity = record.quantity, "Repeat scan");
            }
            None => {
                let record = SalesRecord::new(product.barcode, self.clock.today(), product.price);
                debug!(barcode = %product.barcode, price = %product.price, "New sales record");
                ledger.insert(product.clone(), record);
            }
        }

        self.display.display_product(&product);

        if product.perishable {
            self.display.display_calendar();
        } else {
            self.pending_price = product.price;
            self.pending_best_before = Some(NaiveDate::MAX);
        }

        self.current_item = Some(product);
        Ok(())
    }

    /// Applies the best-before discount to the current (perishable) item.
    ///
    /// The caller makes sure the current item is perishable. Without a
    /// current perishable record this only logs and resets the pending state.
    pub fn correct_sales_price(&mut self, best_before: Option<NaiveDate>) -> RegisterResult<()> {
        let best_before = best_before.ok_or(RegisterError::UnknownBestBeforeDate)?;

        match &self.current_item {
            Some(product) => match self.perishables.get_mut(product.barcode) {
                Some(record) => {
                    let days = days_until(self.clock.today(), best_before);
                    let price = self.schedule.price_for(product.price, days);
                    record.correct_price(price, best_before);
                    info!(
                        barcode = %product.barcode,
                        days_remaining = days,
                        list_price = %product.price,
                        sales_price = %price,
                        "Sales price corrected"
                    );
                }
                None => {
                    warn!(barcode = %product.barcode, "Current item is not perishable, price unchanged");
                }
            },
            None => warn!("No scanned item to correct"),
        }

        self.pending_best_before = None;
        self.pending_price = Money::zero();
        Ok(())
    }

    /// Hands every record to the sales service and starts a fresh session.
    ///
    /// If the sales service rejects a record, finalize stops there. Records
    /// already accepted are gone; the rejected one and the rest stay open so
    /// the transaction can be finalized again.
    pub fn finalize_sales_transaction(&mut self) -> RegisterResult<()> {
        let count = self.record_count();
        let sales_service = &mut self.sales_service;

        let submitted = self
            .perishables
            .submit_records(|record| sales_service.sold(record))
            .and_then(|()| {
                self.non_perishables
                    .submit_records(|record| sales_service.sold(record))
            });

        if let Err(err) = submitted {
            warn!(
                error = %err,
                remaining = self.record_count(),
                "Sales transaction not finalized"
            );
            return Err(err);
        }

        self.current_item = None;
        self.pending_best_before = None;
        self.pending_price = Money::zero();

        info!(records = count, "Sales transaction finalized");
        Ok(())
    }

    /// Prints one line per record, perishables first.
    pub fn print_receipt(&self) {
        for line in self.receipt_lines() {
            self.printer.println(&line.to_string());
        }
    }

    // =========================================================================
    // Read Accessors
    // =========================================================================

    /// The lines [`print_receipt`](Self::print_receipt) emits, in order.
    pub fn receipt_lines(&self) -> Vec<ReceiptLine> {
        self.perishables
            .iter()
            .chain(self.non_perishables.iter())
            .map(|(product, record)| ReceiptLine::new(product, record))
            .collect()
    }

    pub fn current_item(&self) -> Option<&Product> {
        self.current_item.as_ref()
    }

    pub fn pending_best_before(&self) -> Option<NaiveDate> {
        self.pending_best_before
    }

    pub fn pending_price(&self) -> Money {
        self.pending_price
    }

    /// Record for `barcode` in the open transaction.
    pub fn record_for(&self, barcode: Barcode) -> Option<&SalesRecord> {
        self.perishables
            .get(barcode)
            .or_else(|| self.non_perishables.get(barcode))
    }

    pub fn record_count(&self) -> usize {
        self.perishables.len() + self.non_perishables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.perishables.is_empty() && self.non_perishables.is_empty()
    }

    pub fn discount_schedule(&self) -> &DiscountSchedule {
        &self.schedule
    }

    fn close_current_item(&mut self) {
        if let Some(previous) = self.current_item.take() {
            debug!(barcode = %previous.barcode, "Closing previous item");
        }
        self.pending_best_before = None;
        self.pending_price = Money::zero();
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
