//! Receipt printer on a text stream.

use std::cell::RefCell;
use std::io::{self, Write};

use till_core::ReceiptPrinter;
use tracing::warn;

/// Prints each receipt line verbatim.
#[derive(Debug)]
pub struct ConsolePrinter<W: Write> {
    out: RefCell<W>,
}

impl ConsolePrinter<io::Stdout> {
    pub fn stdout() -> Self {
        ConsolePrinter::new(io::stdout())
    }
}

impl<W: Write> ConsolePrinter<W> {
    pub fn new(out: W) -> Self {
        ConsolePrinter {
            out: RefCell::new(out),
        }
    }
}

impl<W: Write> ReceiptPrinter for ConsolePrinter<W> {
    fn println(&self, line: &str) {
        let mut out = self.out.borrow_mut();
        if let Err(e) = writeln!(out, "{line}").and_then(|()| out.flush()) {
            warn!(error = %e, "Receipt printer write failed");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::testing::SharedBuffer;

    #[test]
    fn test_prints_lines_verbatim() {
        let buffer = SharedBuffer::default();
        let printer = ConsolePrinter::new(buffer.clone());

        printer.println("Product: Led Lamp, Sales price: 250, Quantity: 2");
        printer.println("");

        assert_eq!(
            buffer.contents(),
            "Product: Led Lamp, Sales price: 250, Quantity: 2\n\n"
        );
    }
}
