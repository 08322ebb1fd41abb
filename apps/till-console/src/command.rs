//! # Cashier Commands
//!
//! One command per input line:
//!
//! ```text
//! scan 9234          scan a barcode
//! bbd 2024-03-15     best-before date for the current perishable
//! bbd                (no date: rejected by the register)
//! print              print the receipt
//! finalize           submit the sale, start a new one
//! help               list commands
//! quit               leave the session
//! ```

use std::str::FromStr;

use chrono::NaiveDate;
use till_core::Barcode;

use crate::error::AppError;

/// A parsed cashier command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Scan(Barcode),
    BestBefore(Option<NaiveDate>),
    Print,
    Finalize,
    Help,
    Quit,
}

/// Text shown for `help`.
pub const HELP: &str = "\
scan <barcode>       scan a product
bbd <YYYY-MM-DD>     best-before date of the scanned perishable
print                print the receipt
finalize             submit the sale and start a new one
help                 show this help
quit                 leave";

impl FromStr for Command {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut words = s.split_whitespace();
        let verb = words.next().unwrap_or_default().to_lowercase();
        let arg = words.next();

        if words.next().is_some() {
            return Err(AppError::InvalidCommand(format!(
                "Too many arguments: '{}'",
                s.trim()
            )));
        }

        match (verb.as_str(), arg) {
            ("scan" | "s", Some(barcode)) => barcode
                .parse::<i64>()
                .map(|value| Command::Scan(Barcode::new(value)))
                .map_err(|_| AppError::InvalidCommand(format!("Invalid barcode: '{barcode}'"))),
            ("scan" | "s", None) => Err(AppError::InvalidCommand(
                "scan needs a barcode".to_string(),
            )),
            ("bbd" | "b", Some(date)) => NaiveDate::parse_from_str(date, "%Y-%m-%d")
                .map(|date| Command::BestBefore(Some(date)))
                .map_err(|_| {
                    AppError::InvalidCommand(format!("Invalid date: '{date}', expected YYYY-MM-DD"))
                }),
            ("bbd" | "b", None) => Ok(Command::BestBefore(None)),
            ("print" | "p", None) => Ok(Command::Print),
            ("finalize" | "f", None) => Ok(Command::Finalize),
            ("help" | "h" | "?", None) => Ok(Command::Help),
            ("quit" | "q" | "exit", None) => Ok(Command::Quit),
            (other, _) => Err(AppError::InvalidCommand(format!(
                "Unknown command: '{other}'. Type 'help' for a list"
            ))),
        }
    }
}
