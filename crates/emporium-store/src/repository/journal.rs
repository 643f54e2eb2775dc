//! # Receipt Journal
//!
//! Append-only record of confirmed checkouts.
//!
//! ## Format
//! ```text
//! receipts.jsonl
//! {"id":"5f0c…","issued_at":"2024-03-01T12:30:00Z","lines":[…],"total":200}
//! {"id":"a91e…","issued_at":"2024-03-01T12:41:07Z","lines":[…],"total":1500}
//! ```
//!
//! One receipt per line. Appends never rewrite earlier lines, so a crash
//! mid-write can only damage the last one; [`ReceiptJournal::read_all`]
//! skips lines it cannot parse.

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use emporium_core::Receipt;
use tracing::{debug, warn};

use crate::error::{StoreError, StoreResult};

/// Journal file name inside the data directory.
pub const JOURNAL_FILE: &str = "receipts.jsonl";

/// Repository for the receipt journal.
#[derive(Debug, Clone)]
pub struct ReceiptJournal {
    path: PathBuf,
}

impl ReceiptJournal {
    /// Creates a journal handle for `data_dir`.
    pub fn new(data_dir: impl AsRef<Path>) -> Self {
        ReceiptJournal {
            path: data_dir.as_ref().join(JOURNAL_FILE),
        }
    }

    /// Path of the journal file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Appends one receipt.
    pub fn append(&self, receipt: &Receipt) -> StoreResult<()> {
        let mut line = serde_json::to_string(receipt)?;
        line.push('\n');

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|err| StoreError::io(&self.path, err))?;
        file.write_all(line.as_bytes())
            .map_err(|err| StoreError::io(&self.path, err))?;

        debug!(receipt = %receipt.id, total = %receipt.total, "Receipt journaled");
        Ok(())
    }

    /// Reads every parseable receipt, oldest first.
    ///
    /// A missing journal is empty.
    pub fn read_all(&self) -> StoreResult<Vec<Receipt>> {
        let text = match fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(err) => return Err(StoreError::io(&self.path, err)),
        };

        let mut receipts = Vec::new();
        for (number, line) in text.lines().enumerate() {
            if line.trim().is_empty() {
                continue;
            }
            match serde_json::from_str::<Receipt>(line) {
                Ok(receipt) => receipts.push(receipt),
                Err(err) => {
                    warn!(line = number + 1, error = %err, "Skipping unreadable journal entry");
                }
            }
        }
        Ok(receipts)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use emporium_core::{AudioSpec, Catalog, Commodity, Money, ShoppingCart};

    fn receipt(price: i64) -> Receipt {
        let mut catalog = Catalog::new();
        let id = catalog.add(Commodity::audio(
            "X",
            Money::from_units(price),
            "",
            AudioSpec::default(),
        ));
        let mut cart = ShoppingCart::new();
        cart.reset(catalog.capacities());
        cart.add_or_increment(&catalog, id).unwrap();
        let at = Utc.with_ymd_and_hms(2024, 3, 1, 12, 30, 0).unwrap();
        Receipt::from_cart_at(&cart, &catalog, at).unwrap()
    }

    #[test]
    fn test_missing_journal_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let journal = ReceiptJournal::new(dir.path());
        assert!(journal.read_all().unwrap().is_empty());
    }

    #[test]
    fn test_append_keeps_order() {
        let dir = tempfile::tempdir().unwrap();
        let journal = ReceiptJournal::new(dir.path());
        let first = receipt(100);
        let second = receipt(250);

        journal.append(&first).unwrap();
        journal.append(&second).unwrap();

        let text = fs::read_to_string(journal.path()).unwrap();
        assert_eq!(text.lines().count(), 2);
        assert_eq!(journal.read_all().unwrap(), vec![first, second]);
    }

    #[test]
    fn test_damaged_line_is_skipped() {
        let dir = tempfile::tempdir().unwrap();
        let journal = ReceiptJournal::new(dir.path());
        let good = receipt(100);
        journal.append(&good).unwrap();

        let mut text = fs::read_to_string(journal.path()).unwrap();
        text.push_str("{\"id\":\"cut off");
        fs::write(journal.path(), text).unwrap();

        assert_eq!(journal.read_all().unwrap(), vec![good]);
    }
}
