//! Account store
//!
//! The `Ledger` maps participant identifiers to their accounts. It holds no
//! business logic beyond field access; the settlement engine operates on it.
//!
//! Entries are kept in insertion order. Loaded ledgers keep file order and
//! saves write in the same order, so iteration (and therefore tie-breaking
//! during settlement) is reproducible across runs.

use crate::types::{Account, AccountRecord, LedgerError, ParticipantId, RoundResult};
use std::collections::HashMap;
use tracing::{debug, warn};

/// In-memory collection of accounts keyed by participant identifier
#[derive(Debug, Clone, Default)]
pub struct Ledger {
    /// Accounts in insertion order
    entries: Vec<(ParticipantId, Account)>,

    /// Identifier to position in `entries`
    index: HashMap<ParticipantId, usize>,

    /// Most recent round settled against this ledger in this process
    last_round: Option<RoundResult>,
}

impl Ledger {
    /// Create an empty ledger
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a ledger from persisted records
    ///
    /// Duplicate identifiers keep the first occurrence; later ones are
    /// ignored.
    pub fn from_records<I>(records: I) -> Self
    where
        I: IntoIterator<Item = AccountRecord>,
    {
        let mut ledger = Ledger::new();
        for record in records {
            let account = record.account();
            ledger.insert_loaded(record.id, account);
        }
        ledger
    }

    /// Snapshot every account as a persistable record, in ledger order
    pub fn to_records(&self) -> Vec<AccountRecord> {
        self.entries
            .iter()
            .map(|(id, account)| {
                AccountRecord::new(id.clone(), account.recurring_cost, account.balance)
            })
            .collect()
    }

    /// Add a participant with a zero balance
    ///
    /// # Errors
    ///
    /// Returns `DuplicateIdentifier` if `id` is already present.
    pub fn add(&mut self, id: &str, recurring_cost: f64) -> Result<(), LedgerError> {
        if self.index.contains_key(id) {
            return Err(LedgerError::duplicate_identifier(id));
        }
        self.push(id.to_string(), Account::new(recurring_cost));
        debug!(participant = id, recurring_cost, "participant added");
        Ok(())
    }

    /// Insert an account read from persisted state
    ///
    /// Returns `false` and leaves the ledger untouched when the identifier
    /// is already present.
    pub fn insert_loaded(&mut self, id: ParticipantId, account: Account) -> bool {
        if self.index.contains_key(&id) {
            warn!(participant = %id, "duplicate participant in persisted ledger, keeping first");
            return false;
        }
        self.push(id, account);
        true
    }

    /// Remove a participant and return their final account
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if `id` is absent.
    pub fn remove(&mut self, id: &str) -> Result<Account, LedgerError> {
        let position = self
            .index
            .remove(id)
            .ok_or_else(|| LedgerError::not_found(id))?;

        let (_, account) = self.entries.remove(position);
        for (shifted, (other, _)) in self.entries.iter().enumerate().skip(position) {
            self.index.insert(other.clone(), shifted);
        }

        debug!(participant = id, balance = account.balance, "participant removed");
        Ok(account)
    }

    /// Look up a participant's account
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if `id` is absent.
    pub fn get(&self, id: &str) -> Result<&Account, LedgerError> {
        self.index
            .get(id)
            .map(|&position| &self.entries[position].1)
            .ok_or_else(|| LedgerError::not_found(id))
    }

    /// Look up a participant's account for mutation
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if `id` is absent.
    pub fn get_mut(&mut self, id: &str) -> Result<&mut Account, LedgerError> {
        match self.index.get(id) {
            Some(&position) => Ok(&mut self.entries[position].1),
            None => Err(LedgerError::not_found(id)),
        }
    }

    /// Overwrite a participant's recurring cost
    ///
    /// No bound checks: negative costs are accepted.
    pub fn set_recurring_cost(&mut self, id: &str, value: f64) -> Result<(), LedgerError> {
        self.get_mut(id)?.recurring_cost = value;
        Ok(())
    }

    /// Overwrite a participant's balance
    pub fn set_balance(&mut self, id: &str, value: f64) -> Result<(), LedgerError> {
        self.get_mut(id)?.balance = value;
        Ok(())
    }

    /// All participants and their accounts, in ledger order
    pub fn list(&self) -> Vec<(&str, &Account)> {
        self.iter().collect()
    }

    /// Iterate participants and their accounts in ledger order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Account)> {
        self.entries.iter().map(|(id, account)| (id.as_str(), account))
    }

    pub(crate) fn iter_mut(&mut self) -> impl Iterator<Item = (&str, &mut Account)> {
        self.entries
            .iter_mut()
            .map(|(id, account)| (id.as_str(), account))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    /// Sum of every participant's balance
    pub fn total_balance(&self) -> f64 {
        self.entries.iter().map(|(_, account)| account.balance).sum()
    }

    /// Most recent round settled against this ledger, if any
    pub fn last_round(&self) -> Option<&RoundResult> {
        self.last_round.as_ref()
    }

    pub(crate) fn record_round(&mut self, result: RoundResult) {
        self.last_round = Some(result);
    }

    fn push(&mut self, id: ParticipantId, account: Account) {
        self.index.insert(id.clone(), self.entries.len());
        self.entries.push((id, account));
    }
}
