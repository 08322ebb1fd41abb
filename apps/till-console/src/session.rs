//! # Cashier Session
//!
//! Drives a [`Register`] from a stream of command lines.
//!
//! ## Loop
//! ```text
//! read line ──► empty? skip
//!     │
//!     ▼
//! Command::from_str ──► Err ──► feedback "error: …", continue
//!     │
//!     ▼
//! Register op ──► Err(RegisterError) ──► feedback, continue
//!     │          (a rejected finalize keeps the open records)
//!     │
//!     ▼
//! quit / end of input ──► SessionSummary
//! ```
//!
//! Only reading input or writing feedback can end the session with an error.

use std::io::{BufRead, Write};

use till_core::Register;
use tracing::{debug, warn};

use crate::command::{Command, HELP};
use crate::error::AppResult;

/// What happened during a session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionSummary {
    pub commands: usize,
    pub rejected: usize,
    pub transactions: usize,
    /// Records still open when the session ended.
    pub left_open: usize,
}

/// Runs commands from `input` against `register`, writing feedback to
/// `feedback`.
pub fn run_session(
    register: &mut Register,
    input: impl BufRead,
    feedback: &mut impl Write,
) -> AppResult<SessionSummary> {
    let mut summary = SessionSummary::default();

    for line in input.lines() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        summary.commands += 1;

        let outcome = line.parse::<Command>().and_then(|command| {
            debug!(?command, "Cashier command");
            execute(register, command, feedback, &mut summary)
        });

        match outcome {
            Ok(Flow::Continue) => {}
            Ok(Flow::Quit) => break,
            Err(e) if e.is_recoverable() => {
                summary.rejected += 1;
                writeln!(feedback, "error: {e}")?;
            }
            Err(e) => return Err(e),
        }
    }

    summary.left_open = register.record_count();
    if summary.left_open > 0 {
        warn!(records = summary.left_open, "Session ended with an open transaction");
    }

    Ok(summary)
}

enum Flow {
    Continue,
    Quit,
}

fn execute(
    register: &mut Register,
    command: Command,
    feedback: &mut impl Write,
    summary: &mut SessionSummary,
) -> AppResult<Flow> {
    match command {
        Command::Scan(barcode) => register.scan(barcode)?,
        Command::BestBefore(date) => {
            register.correct_sales_price(date)?;
            if let Some(record) = register
                .current_item()
                .and_then(|product| register.record_for(product.barcode))
            {
                writeln!(feedback, "price: {}", record.sales_price)?;
            }
        }
        Command::Print => register.print_receipt(),
        Command::Finalize => {
            let records = register.record_count();
            register.finalize_sales_transaction()?;
            summary.transactions += 1;
            writeln!(feedback, "finalized {records} record(s)")?;
        }
        Command::Help => writeln!(feedback, "{HELP}")?,
        Command::Quit => return Ok(Flow::Quit),
    }
    Ok(Flow::Continue)
}
