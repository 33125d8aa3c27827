//! Account-related types for the coffee ledger
//!
//! An account tracks what one participant's order costs each round and
//! how far ahead or behind they are overall.

/// Participant identifier
///
/// Unique and case-sensitive. Must not contain the persistence field
/// delimiter (`,`); enforcing that is the caller's job.
pub type ParticipantId = String;

/// One participant's order economics
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Account {
    /// Cost incurred each round this participant orders
    pub recurring_cost: f64,

    /// Signed running tally
    ///
    /// Grows by `recurring_cost` every round and drops by the round total
    /// whenever this participant pays. No floor or ceiling.
    pub balance: f64,
}

impl Account {
    /// Create a new account with a zero balance
    pub fn new(recurring_cost: f64) -> Self {
        Account {
            recurring_cost,
            balance: 0.0,
        }
    }

    /// Create an account with an explicit balance (used when loading)
    pub fn with_balance(recurring_cost: f64, balance: f64) -> Self {
        Account {
            recurring_cost,
            balance,
        }
    }
}

/// A persisted ledger line: `identifier,recurring_cost,balance`
#[derive(Debug, Clone, PartialEq)]
pub struct AccountRecord {
    pub id: ParticipantId,
    pub recurring_cost: f64,
    pub balance: f64,
}

impl AccountRecord {
    pub fn new(id: impl Into<ParticipantId>, recurring_cost: f64, balance: f64) -> Self {
        AccountRecord {
            id: id.into(),
            recurring_cost,
            balance,
        }
    }

    pub fn account(&self) -> Account {
        Account::with_balance(self.recurring_cost, self.balance)
    }
}

/// Outcome of one settlement round
///
/// Not persisted; the ledger only remembers the most recent one.
#[derive(Debug, Clone, PartialEq)]
pub struct RoundResult {
    /// Participant selected to cover the round
    pub payer: ParticipantId,

    /// Sum of every participant's recurring cost for this round
    pub total_cost: f64,
}
