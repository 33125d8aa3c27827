//! File-backed ledger persistence
//!
//! Reads and writes the line-record format from [`crate::io::csv_format`]
//! at a fixed path.
//!
//! # Behavior
//!
//! - A missing file loads as an empty ledger; any other open or read
//!   error is an `IoFailure`
//! - Saving creates missing parent directories, then truncates and
//!   rewrites the whole file (no append, no merge)
//! - Load and save run wholly before or after a round, never during one

use crate::core::LedgerStore;
use crate::io::csv_format::{read_records, write_records, LoadReport};
use crate::types::{AccountRecord, LedgerError};
use std::fs::{self, File};
use std::io::{BufWriter, ErrorKind, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Ledger persisted to a single file
///
/// # Examples
///
/// ```no_run
/// use coffee_payer::core::LedgerStore;
/// use coffee_payer::io::CsvFileStore;
///
/// let store = CsvFileStore::new("data/coffee_ledger.csv");
/// let mut ledger = store.load_ledger().unwrap();
/// ledger.add("Alice", 3.5).unwrap();
/// store.save_ledger(&ledger).unwrap();
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsvFileStore {
    path: PathBuf,
}

impl CsvFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        CsvFileStore { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the file and report both good records and skipped lines
    ///
    /// # Errors
    ///
    /// Returns `IoFailure` for any open or read error other than the file
    /// not existing.
    pub fn load_report(&self) -> Result<LoadReport, LedgerError> {
        let file = match File::open(&self.path) {
            Ok(file) => file,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "no ledger file yet, starting empty");
                return Ok(LoadReport::default());
            }
            Err(e) => return Err(LedgerError::io_failure(&self.path, e)),
        };

        let report = read_records(file)?;

        debug!(
            path = %self.path.display(),
            records = report.records.len(),
            skipped = report.skipped.len(),
            "ledger loaded"
        );
        Ok(report)
    }
}

impl LedgerStore for CsvFileStore {
    fn load(&self) -> Result<Vec<AccountRecord>, LedgerError> {
        Ok(self.load_report()?.records)
    }

    fn save(&self, records: &[AccountRecord]) -> Result<(), LedgerError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| LedgerError::io_failure(parent, e))?;
        }

        let file = File::create(&self.path).map_err(|e| LedgerError::io_failure(&self.path, e))?;
        let mut output = BufWriter::new(file);
        write_records(records, &mut output)?;
        output
            .flush()
            .map_err(|e| LedgerError::io_failure(&self.path, e))?;

        info!(path = %self.path.display(), records = records.len(), "ledger saved");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Ledger;
    use tempfile::TempDir;

    fn temp_store(relative: &str) -> (TempDir, CsvFileStore) {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let store = CsvFileStore::new(dir.path().join(relative));
        (dir, store)
    }

    #[test]
    fn test_missing_file_loads_empty() {
        let (_dir, store) = temp_store("absent.csv");
        assert_eq!(store.load().unwrap(), vec![]);
        assert!(store.load_ledger().unwrap().is_empty());
    }

    #[test]
    fn test_save_creates_parent_directories() {
        let (_dir, store) = temp_store("nested/deeper/ledger.csv");

        store.save(&[AccountRecord::new("A", 2.0, 0.0)]).unwrap();

        assert!(store.path().exists());
        assert_eq!(fs::read_to_string(store.path()).unwrap(), "A,2,0\n");
    }

    #[test]
    fn test_save_overwrites_previous_contents() {
        let (_dir, store) = temp_store("ledger.csv");
        store
            .save(&[
                AccountRecord::new("A", 1.0, 1.0),
                AccountRecord::new("B", 2.0, 2.0),
            ])
            .unwrap();

        store.save(&[AccountRecord::new("C", 3.0, 3.0)]).unwrap();

        assert_eq!(store.load().unwrap(), vec![AccountRecord::new("C", 3.0, 3.0)]);
    }

    #[test]
    fn test_ledger_round_trip_preserves_order_and_values() {
        let (_dir, store) = temp_store("ledger.csv");
        let mut ledger = Ledger::new();
        ledger.add("Zed", 4.1).unwrap();
        ledger.add("Amy", 2.2).unwrap();
        ledger.set_balance("Amy", -3.3).unwrap();

        store.save_ledger(&ledger).unwrap();
        let reloaded = store.load_ledger().unwrap();

        assert_eq!(reloaded.to_records(), ledger.to_records());
    }

    #[test]
    fn test_load_report_lists_skipped_lines() {
        let (_dir, store) = temp_store("ledger.csv");
        fs::write(store.path(), "A,1,2\nnot a record\nB,3\n").unwrap();

        let report = store.load_report().unwrap();

        assert_eq!(report.records, vec![AccountRecord::new("A", 1.0, 2.0)]);
        assert_eq!(report.skipped.len(), 2);
    }

    #[test]
    fn test_load_through_regular_file_is_io_failure() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("not_a_dir"), "A,1,2\n").unwrap();
        let store = CsvFileStore::new(dir.path().join("not_a_dir").join("ledger.csv"));

        assert!(matches!(store.load(), Err(LedgerError::IoFailure { .. })));
        assert!(matches!(
            store.load_report(),
            Err(LedgerError::IoFailure { .. })
        ));
    }

    #[test]
    fn test_save_under_regular_file_is_io_failure() {
        let dir = TempDir::new().unwrap();
        let blocker = dir.path().join("not_a_dir");
        fs::write(&blocker, "A,1,2\n").unwrap();
        let store = CsvFileStore::new(blocker.join("ledger.csv"));

        let result = store.save(&[AccountRecord::new("A", 2.0, 0.0)]);

        assert!(matches!(result, Err(LedgerError::IoFailure { .. })));
        assert_eq!(fs::read_to_string(&blocker).unwrap(), "A,1,2\n");
    }

    #[test]
    fn test_load_directory_is_io_failure() {
        let dir = TempDir::new().unwrap();
        let store = CsvFileStore::new(dir.path());

        let result = store.load();
        assert!(matches!(result, Err(LedgerError::IoFailure { .. })));
    }
}
