//! Core business logic module
//!
//! - `ledger` - Account store keyed by participant identifier
//! - `settlement` - Accrual, payer selection and settlement
//! - `traits` - Persistence contract the ledger is loaded from and saved to

pub mod ledger;
pub mod settlement;
pub mod traits;

pub use ledger::Ledger;
pub use settlement::{preview_payer, run_round, SettlementEngine};
pub use traits::LedgerStore;
