//! Types module
//!
//! Contains core data structures used throughout the application.
//! - `account`: Account, participant identifiers and round results
//! - `error`: Error types for the ledger

pub mod account;
pub mod error;

pub use account::{Account, AccountRecord, ParticipantId, RoundResult};
pub use error::LedgerError;
