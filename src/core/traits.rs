//! Core traits
//!
//! The settlement engine only needs two things from persistence: give me
//! the records, and store these records. Anything that can do that (a file,
//! an in-memory buffer in tests) can back a ledger.

use crate::core::ledger::Ledger;
use crate::types::{AccountRecord, LedgerError};

/// Persistence contract for ledger records
pub trait LedgerStore {
    /// Read every persisted record
    ///
    /// Malformed entries are skipped rather than reported as errors.
    /// Each identifier appears at most once; when persisted state holds
    /// duplicates, the first occurrence is returned.
    fn load(&self) -> Result<Vec<AccountRecord>, LedgerError>;

    /// Replace all persisted state with `records`
    fn save(&self, records: &[AccountRecord]) -> Result<(), LedgerError>;

    /// Load and build a ledger in one step
    fn load_ledger(&self) -> Result<Ledger, LedgerError> {
        Ok(Ledger::from_records(self.load()?))
    }

    /// Persist every account currently in `ledger`
    fn save_ledger(&self, ledger: &Ledger) -> Result<(), LedgerError> {
        self.save(&ledger.to_records())
    }
}
