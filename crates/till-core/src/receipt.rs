//! # Receipt Lines
//!
//! ```text
//! Product: Bananas Fyffes, Sales price: 52, Quantity: 1
//! Product: Gouda 48+, Sales price: 520, Quantity: 1
//! Product: Led Lamp, Sales price: 250, Quantity: 1
//! ```
//!
//! Ordering is the register's job; this module only formats a line.

use std::fmt;

use crate::money::Money;
use crate::types::{Product, SalesRecord};

/// One printable receipt line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReceiptLine {
    pub description: String,
    pub sales_price: Money,
    pub quantity: u32,
}

impl ReceiptLine {
    pub fn new(product: &Product, record: &SalesRecord) -> Self {
        ReceiptLine {
            description: product.description.clone(),
            sales_price: record.sales_price,
            quantity: record.quantity,
        }
    }
}

impl fmt::Display for ReceiptLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Product: {}, Sales price: {}, Quantity: {}",
            self.description, self.sales_price, self.quantity
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Barcode;
    use chrono::NaiveDate;

    #[test]
    fn test_line_format() {
        let lamp = Product::new("led lamp", "Led Lamp", Money::from_cents(250), Barcode::new(1234), false);
        let mut record = SalesRecord::new(
            lamp.barcode,
            NaiveDate::from_ymd_opt(2024, 3, 14).unwrap(),
            lamp.price,
        );
        record.increase_quantity(1);

        assert_eq!(
            ReceiptLine::new(&lamp, &record).to_string(),
            "Product: Led Lamp, Sales price: 250, Quantity: 2"
        );
    }
}
