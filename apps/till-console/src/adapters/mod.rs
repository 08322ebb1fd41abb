//! # Adapters
//!
//! Console implementations of the register's collaborator traits.
//!
//! ```text
//! ProductCatalog  ◄── InMemoryCatalog      (products from till.toml)
//! CashierDisplay  ◄── ConsoleDisplay       (prompts to a writer)
//! ReceiptPrinter  ◄── ConsolePrinter       (receipt lines to a writer)
//! SalesService    ◄── JournalSalesService  (JSON lines + logs)
//! Clock           ◄── SystemClock          (local date)
//! ```
//!
//! Display and printer take `&self`, so their writers sit in a `RefCell`.
//! Write failures are logged and swallowed: a broken terminal must not take
//! the open transaction down with it.

pub mod catalog;
pub mod clock;
pub mod display;
pub mod journal;
pub mod printer;

pub use catalog::InMemoryCatalog;
pub use clock::SystemClock;
pub use display::ConsoleDisplay;
pub use journal::{JournalEntry, JournalSalesService};
pub use printer::ConsolePrinter;

#[cfg(test)]
pub(crate) mod testing {
    use std::cell::RefCell;
    use std::io::{self, Write};
    use std::rc::Rc;

    /// Cloneable in-memory writer, so a test can read what an adapter owned
    /// by the register wrote.
    #[derive(Debug, Clone, Default)]
    pub struct SharedBuffer(Rc<RefCell<Vec<u8>>>);

    impl SharedBuffer {
        pub fn contents(&self) -> String {
            String::from_utf8_lossy(&self.0.borrow()).into_owned()
        }

        pub fn lines(&self) -> Vec<String> {
            self.contents().lines().map(str::to_string).collect()
        }
    }

    impl Write for SharedBuffer {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.borrow_mut().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }
}
