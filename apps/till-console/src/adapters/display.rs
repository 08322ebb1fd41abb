//! Cashier display on a text stream.

use std::cell::RefCell;
use std::io::{self, Write};

use till_core::{CashierDisplay, Product};
use tracing::warn;

/// Writes cashier prompts as plain text lines.
///
/// ```text
/// > Bananas Fyffes (banana) 150
/// > Enter best-before date: bbd YYYY-MM-DD
/// ! No product found!
/// ```
#[derive(Debug)]
pub struct ConsoleDisplay<W: Write> {
    out: RefCell<W>,
}

impl ConsoleDisplay<io::Stderr> {
    pub fn stderr() -> Self {
        ConsoleDisplay::new(io::stderr())
    }
}

impl<W: Write> ConsoleDisplay<W> {
    pub fn new(out: W) -> Self {
        ConsoleDisplay {
            out: RefCell::new(out),
        }
    }

    fn show(&self, prefix: char, text: &str) {
        let mut out = self.out.borrow_mut();
        if let Err(e) = writeln!(out, "{prefix} {text}").and_then(|()| out.flush()) {
            warn!(error = %e, "Display write failed");
        }
    }
}

impl<W: Write> CashierDisplay for ConsoleDisplay<W> {
    fn display_product(&self, product: &Product) {
        self.show(
            '>',
            &format!("{} ({}) {}", product.description, product.code, product.price),
        );
    }

    fn display_calendar(&self) {
        self.show('>', "Enter best-before date: bbd YYYY-MM-DD");
    }

    fn display_error_message(&self, message: &str) {
        self.show('!', message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::testing::SharedBuffer;
    use till_core::{Barcode, Money};

    #[test]
    fn test_prompts() {
        let buffer = SharedBuffer::default();
        let display = ConsoleDisplay::new(buffer.clone());
        let banana = Product::new("banana", "Bananas Fyffes", Money::from_cents(150), Barcode::new(9234), true);

        display.display_product(&banana);
        display.display_calendar();
        display.display_error_message("No product found!");

        assert_eq!(
            buffer.lines(),
            [
                "> Bananas Fyffes (banana) 150",
                "> Enter best-before date: bbd YYYY-MM-DD",
                "! No product found!",
            ]
        );
    }
}
