//! In-memory ledger persistence
//!
//! Holds the serialized ledger text in a buffer instead of a file. Goes
//! through the same line-record format as [`crate::io::CsvFileStore`], so
//! leniency and round-trip behavior are identical.

use crate::core::LedgerStore;
use crate::io::csv_format::{read_records, write_records};
use crate::types::{AccountRecord, LedgerError};
use std::cell::RefCell;

/// Ledger persisted to an in-memory buffer
#[derive(Debug, Default)]
pub struct MemoryStore {
    contents: RefCell<Vec<u8>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from existing serialized contents
    pub fn with_contents(contents: impl Into<Vec<u8>>) -> Self {
        MemoryStore {
            contents: RefCell::new(contents.into()),
        }
    }

    /// Current serialized contents
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.contents.borrow()).into_owned()
    }
}

impl LedgerStore for MemoryStore {
    fn load(&self) -> Result<Vec<AccountRecord>, LedgerError> {
        let contents = self.contents.borrow();
        Ok(read_records(contents.as_slice())?.records)
    }

    fn save(&self, records: &[AccountRecord]) -> Result<(), LedgerError> {
        let mut buffer = Vec::new();
        write_records(records, &mut buffer)?;
        *self.contents.borrow_mut() = buffer;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_save_replaces_contents() {
        let store = MemoryStore::with_contents("old,1,1\n");

        store.save(&[AccountRecord::new("new", 2.0, 0.5)]).unwrap();

        assert_eq!(store.contents(), "new,2,0.5\n");
    }

    #[test]
    fn test_load_applies_leniency() {
        let store = MemoryStore::with_contents("A,1,2\nA,1\nB,1,x\nA,9,9\n");

        let ledger = store.load_ledger().unwrap();

        assert_eq!(ledger.len(), 1);
        assert_eq!(ledger.get("A").unwrap().balance, 2.0);
    }

    #[test]
    fn test_load_drops_later_duplicates() {
        let store = MemoryStore::with_contents("A,1,2\nB,3,4\nA,5,6\n");

        let records = store.load().unwrap();

        assert_eq!(
            records,
            vec![
                AccountRecord::new("A", 1.0, 2.0),
                AccountRecord::new("B", 3.0, 4.0),
            ]
        );
    }

    #[test]
    fn test_empty_store_loads_empty() {
        assert!(MemoryStore::new().load().unwrap().is_empty());
    }
}
