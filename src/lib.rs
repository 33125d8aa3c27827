//! Coffee Payer Library
//! # Overview
//!
//! Keeps a shared "who pays next" ledger for a recurring group coffee
//! order and picks who covers each round so balances stay fair over time.
//!
//! # Architecture
//!
//! - [`types`] - Core data types (Account, RoundResult, LedgerError)
//! - [`core`] - Business logic components:
//!   - [`core::ledger`] - Account store keyed by participant name
//!   - [`core::settlement`] - Accrual, payer selection and settlement
//!   - [`core::traits`] - Persistence contract
//! - [`io`] - Ledger file format and stores
//! - [`cli`] - CLI arguments parsing
//! - [`command`] - Load, apply, save and report for a single command
//!
//! # Rounds
//!
//! Every round, each participant's order cost is added to their balance.
//! Whoever then has the highest balance pays, and their balance drops by
//! the total cost of the round. Ties go to the participant listed first.
//!
//! # Example
//!
//! ```
//! use coffee_payer::{run_round, Ledger};
//!
//! let mut ledger = Ledger::new();
//! ledger.add("A", 2.0).unwrap();
//! ledger.add("B", 3.0).unwrap();
//! ledger.set_balance("B", 1.0).unwrap();
//!
//! let result = run_round(&mut ledger).unwrap();
//! assert_eq!(result.payer, "B");
//! assert_eq!(result.total_cost, 5.0);
//! assert_eq!(ledger.get("B").unwrap().balance, -1.0);
//! ```

// Module declarations
pub mod cli;
pub mod command;
pub mod core;
pub mod io;
pub mod types;

pub use core::{preview_payer, run_round, Ledger, LedgerStore, SettlementEngine};
pub use io::{CsvFileStore, MemoryStore};
pub use types::{Account, AccountRecord, LedgerError, ParticipantId, RoundResult};
