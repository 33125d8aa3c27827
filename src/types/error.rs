//! Error types for the coffee ledger
//!
//! All errors are local and recoverable: the library reports them to the
//! caller and never terminates the process.
//!
//! # Error Categories
//!
//! - **Ledger Errors**: duplicate or unknown participant, empty ledger
//! - **Persistence Errors**: reading or writing the ledger file failed
//!
//! Malformed persisted lines are not errors; see [`crate::io::csv_format`].

use thiserror::Error;

/// Main error type for the ledger
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LedgerError {
    /// A participant with this identifier already exists
    #[error("Participant '{id}' already exists")]
    DuplicateIdentifier {
        /// The identifier that collided
        id: String,
    },

    /// No participant with this identifier
    #[error("Participant '{id}' not found")]
    NotFound {
        /// The identifier that was looked up
        id: String,
    },

    /// A round was requested on a ledger with no participants
    ///
    /// No side effects occur when this is returned.
    #[error("The ledger has no participants; no one can be selected to pay")]
    EmptyLedger,

    /// Reading or writing persisted state failed
    ///
    /// Reported once; retrying the whole save is up to the caller.
    #[error("I/O failure: {message}")]
    IoFailure {
        /// Description of the failure
        message: String,
    },
}

impl From<std::io::Error> for LedgerError {
    fn from(error: std::io::Error) -> Self {
        LedgerError::IoFailure {
            message: error.to_string(),
        }
    }
}

// csv errors only surface from the file store, and always as I/O problems:
// malformed records are filtered before they become errors.
impl From<csv::Error> for LedgerError {
    fn from(error: csv::Error) -> Self {
        LedgerError::IoFailure {
            message: error.to_string(),
        }
    }
}

impl LedgerError {
    /// Create a DuplicateIdentifier error
    pub fn duplicate_identifier(id: &str) -> Self {
        LedgerError::DuplicateIdentifier { id: id.to_string() }
    }

    /// Create a NotFound error
    pub fn not_found(id: &str) -> Self {
        LedgerError::NotFound { id: id.to_string() }
    }

    /// Create an IoFailure error with the path that failed
    pub fn io_failure(path: &std::path::Path, error: impl std::fmt::Display) -> Self {
        LedgerError::IoFailure {
            message: format!("'{}': {}", path.display(), error),
        }
    }
}
