//! # Sales Ledger
//!
//! Insertion-ordered association list from product to sales record.
//!
//! The register keeps one ledger for perishables and one for everything
//! else. Scan order is receipt order, so the ledger is a plain `Vec` of
//! entries rather than a hash map with incidental iteration order.
//!
//! ## Invariants
//! - At most one entry per barcode (repeat scans bump the quantity)
//! - Entries stay in first-scan order

use crate::types::{Barcode, Product, SalesRecord};

/// Ordered Product → SalesRecord mapping.
#[derive(Debug, Clone, Default)]
pub struct SalesLedger {
    entries: Vec<(Product, SalesRecord)>,
}

impl SalesLedger {
    pub fn new() -> Self {
        SalesLedger::default()
    }

    /// Record for `barcode`, if the product was scanned in this transaction.
    pub fn get(&self, barcode: Barcode) -> Option<&SalesRecord> {
        self.entries
            .iter()
            .find(|(product, _)| product.barcode == barcode)
            .map(|(_, record)| record)
    }

    pub fn get_mut(&mut self, barcode: Barcode) -> Option<&mut SalesRecord> {
        self.entries
            .iter_mut()
            .find(|(product, _)| product.barcode == barcode)
            .map(|(_, record)| record)
    }

    /// Appends an entry for a barcode not yet in the ledger.
    pub fn insert(&mut self, product: Product, record: SalesRecord) {
        debug_assert!(
            self.get(product.barcode).is_none(),
            "ledger already holds barcode {}",
            product.barcode
        );
        self.entries.push((product, record));
    }

    /// Entries in scan order.
    pub fn iter(&self) -> impl Iterator<Item = (&Product, &SalesRecord)> {
        self.entries.iter().map(|(product, record)| (product, record))
    }

    /// Hands the records to `submit` in scan order, removing each accepted one.
    ///
    /// Stops at the first error. The failed record and everything after it
    /// stay in the ledger.
    pub fn submit_records<E>(
        &mut self,
        mut submit: impl FnMut(SalesRecord) -> Result<(), E>,
    ) -> Result<(), E> {
        let mut accepted = 0;
        let outcome: Result<(), E> = self.entries.iter().try_for_each(|(_, record)| {
            submit(record.clone())?;
            accepted += 1;
            Ok(())
        });
        self.entries.drain(..accepted);
        outcome
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
