//! # Sales Journal
//!
//! The console's sales service: every sold record becomes one JSON line.
//!
//! ```text
//! {"id":"6f1c…","register":"Register 1","record":{"barcode":9234,"sold_on":"2024-03-14",
//!  "sales_price":52,"quantity":1,"best_before":"2024-03-14"}}
//! ```
//!
//! The journal is append-only; a restart keeps the earlier lines. Without a
//! journal path the records are only logged. A line that cannot be written
//! is reported back to the register, which keeps the record open.

use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::Path;

use serde::{Deserialize, Serialize};
use till_core::{RegisterError, RegisterResult, SalesRecord, SalesService};
use tracing::{info, warn};
use uuid::Uuid;

use crate::error::AppResult;

/// One line of the journal file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JournalEntry {
    pub id: Uuid,
    pub register: String,
    pub record: SalesRecord,
}

/// Sales service writing a JSON-lines journal.
#[derive(Debug)]
pub struct JournalSalesService {
    register: String,
    file: Option<File>,
    written: usize,
}

impl JournalSalesService {
    /// Opens (or creates) the journal at `path` for appending.
    pub fn open(path: &Path, register: impl Into<String>) -> AppResult<Self> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        info!(?path, "Sales journal opened");

        Ok(JournalSalesService {
            register: register.into(),
            file: Some(file),
            written: 0,
        })
    }

    /// A journal that only logs.
    pub fn log_only(register: impl Into<String>) -> Self {
        JournalSalesService {
            register: register.into(),
            file: None,
            written: 0,
        }
    }

    /// Entries handled since start-up.
    pub fn written(&self) -> usize {
        self.written
    }

    /// Writes the entry as one line in a single write, so a failed append
    /// leaves nothing buffered to resurface on the next one.
    fn append(&mut self, entry: &JournalEntry) -> AppResult<()> {
        if let Some(file) = self.file.as_mut() {
            let mut line = serde_json::to_vec(entry)?;
            line.push(b'\n');
            file.write_all(&line)?;
            file.flush()?;
        }
        Ok(())
    }
}

impl SalesService for JournalSalesService {
    fn sold(&mut self, record: SalesRecord) -> RegisterResult<()> {
        let entry = JournalEntry {
            id: Uuid::new_v4(),
            register: self.register.clone(),
            record,
        };

        info!(
            id = %entry.id,
            barcode = %entry.record.barcode,
            sales_price = %entry.record.sales_price,
            quantity = entry.record.quantity,
            "Sold"
        );

        match self.append(&entry) {
            Ok(()) => {
                self.written += 1;
                Ok(())
            }
            Err(e) => {
                warn!(id = %entry.id, error = %e, "Journal append failed");
                Err(RegisterError::SaleNotRecorded {
                    barcode: entry.record.barcode,
                    reason: e.to_string(),
                })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use till_core::{Barcode, Money};

    fn record(barcode: i64, price: i64) -> SalesRecord {
        SalesRecord::new(
            Barcode::new(barcode),
            NaiveDate::from_ymd_opt(2024, 3, 14).unwrap(),
            Money::from_cents(price),
        )
    }

    fn read_entries(path: &Path) -> Vec<JournalEntry> {
        std::fs::read_to_string(path)
            .unwrap()
            .lines()
            .map(|line| serde_json::from_str(line).unwrap())
            .collect()
    }

    #[test]
    fn test_appends_one_line_per_record() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("journal.jsonl");

        let mut journal = JournalSalesService::open(&path, "Register 1").unwrap();
        journal.sold(record(1234, 250)).unwrap();
        journal.sold(record(9234, 52)).unwrap();

        let entries = read_entries(&path);
        assert_eq!(entries.len(), 2);
        assert_eq!(journal.written(), 2);
        assert_eq!(entries[0].register, "Register 1");
        assert_eq!(entries[0].record, record(1234, 250));
        assert_eq!(entries[1].record.sales_price, Money::from_cents(52));
        assert_ne!(entries[0].id, entries[1].id);
    }

    #[test]
    fn test_reopen_keeps_earlier_entries() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("journal.jsonl");

        JournalSalesService::open(&path, "Register 1")
            .unwrap()
            .sold(record(1, 100))
            .unwrap();
        JournalSalesService::open(&path, "Register 2")
            .unwrap()
            .sold(record(2, 200))
            .unwrap();

        let entries = read_entries(&path);
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[1].register, "Register 2");
    }

    #[test]
    fn test_log_only_counts_without_file() {
        let mut journal = JournalSalesService::log_only("Register 1");
        journal.sold(record(1, 100)).unwrap();
        assert_eq!(journal.written(), 1);
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn test_failed_append_is_reported() {
        let mut journal = JournalSalesService::open(Path::new("/dev/full"), "Register 1").unwrap();

        let err = journal.sold(record(1234, 250)).unwrap_err();

        assert!(matches!(
            err,
            RegisterError::SaleNotRecorded { barcode, .. } if barcode == Barcode::new(1234)
        ));
        assert_eq!(journal.written(), 0);
    }
}
