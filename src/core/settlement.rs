//! Settlement engine
//!
//! One round works in a single pass over the ledger:
//!
//! 1. Every account accrues its own recurring cost into its balance.
//! 2. The round total is the sum of all recurring costs.
//! 3. The payer is the account with the strictly highest post-accrual
//!    balance. On ties the first account reached in ledger order keeps
//!    the lead; a later account with an equal balance never displaces it.
//! 4. After the pass the payer is debited by the round total.
//!
//! The sum of all balances is unchanged by a round: accrual adds the total,
//! settlement removes it again from the payer.

use crate::core::ledger::Ledger;
use crate::types::{LedgerError, ParticipantId, RoundResult};
use tracing::{debug, info};

/// Running maximum over post-accrual balances
///
/// Only a strictly greater balance takes the lead, which is what makes the
/// first-seen account win ties.
#[derive(Debug, Default)]
struct Leader {
    current: Option<(ParticipantId, f64)>,
}

impl Leader {
    fn offer(&mut self, id: &str, balance: f64) {
        let takes_lead = match &self.current {
            None => true,
            Some((_, best)) => balance > *best,
        };
        if takes_lead {
            self.current = Some((id.to_string(), balance));
        }
    }

    fn into_payer(self) -> Option<ParticipantId> {
        self.current.map(|(id, _)| id)
    }
}

/// Run one settlement round against the ledger
///
/// # Returns
///
/// The selected payer and the round's total cost. The result is also
/// remembered as the ledger's last round.
///
/// # Errors
///
/// Returns `EmptyLedger` if the ledger has no participants. The ledger is
/// not touched in that case.
pub fn run_round(ledger: &mut Ledger) -> Result<RoundResult, LedgerError> {
    if ledger.is_empty() {
        return Err(LedgerError::EmptyLedger);
    }

    let mut total_cost = 0.0;
    let mut leader = Leader::default();

    for (id, account) in ledger.iter_mut() {
        account.balance += account.recurring_cost;
        total_cost += account.recurring_cost;
        debug!(
            participant = id,
            recurring_cost = account.recurring_cost,
            balance = account.balance,
            "accrued"
        );
        leader.offer(id, account.balance);
    }

    let payer = leader.into_payer().ok_or(LedgerError::EmptyLedger)?;
    ledger.get_mut(&payer)?.balance -= total_cost;

    info!(payer = %payer, total_cost, "round settled");

    let result = RoundResult { payer, total_cost };
    ledger.record_round(result.clone());
    Ok(result)
}

/// Work out who would pay the next round without changing anything
///
/// Applies the same selection rule as [`run_round`] to each account's
/// `balance + recurring_cost`.
pub fn preview_payer(ledger: &Ledger) -> Result<RoundResult, LedgerError> {
    let mut total_cost = 0.0;
    let mut leader = Leader::default();

    for (id, account) in ledger.iter() {
        total_cost += account.recurring_cost;
        leader.offer(id, account.balance + account.recurring_cost);
    }

    let payer = leader.into_payer().ok_or(LedgerError::EmptyLedger)?;
    Ok(RoundResult { payer, total_cost })
}

/// Owns a ledger and settles rounds against it
///
/// Convenience wrapper for callers that run many rounds in one process
/// (simulations, benchmarks).
#[derive(Debug, Clone, Default)]
pub struct SettlementEngine {
    ledger: Ledger,
    rounds_settled: u64,
}

impl SettlementEngine {
    pub fn new(ledger: Ledger) -> Self {
        SettlementEngine {
            ledger,
            rounds_settled: 0,
        }
    }

    /// Settle one round
    pub fn run_round(&mut self) -> Result<RoundResult, LedgerError> {
        let result = run_round(&mut self.ledger)?;
        self.rounds_settled += 1;
        Ok(result)
    }

    /// Settle `rounds` consecutive rounds, returning each result in order
    ///
    /// Stops at the first error.
    pub fn run_rounds(&mut self, rounds: usize) -> Result<Vec<RoundResult>, LedgerError> {
        (0..rounds).map(|_| self.run_round()).collect()
    }

    pub fn rounds_settled(&self) -> u64 {
        self.rounds_settled
    }

    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    pub fn ledger_mut(&mut self) -> &mut Ledger {
        &mut self.ledger
    }

    pub fn into_ledger(self) -> Ledger {
        self.ledger
    }
}
