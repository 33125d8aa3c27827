//! Command execution
//!
//! Each command is one full cycle against a [`LedgerStore`]:
//!
//! 1. Load the ledger
//! 2. Apply the command
//! 3. Save the ledger if the command changed it
//! 4. Write a human-readable report to the output
//!
//! Saving after every mutation keeps the persisted ledger in step with
//! what was reported. A failed command leaves persisted state untouched.

use crate::cli::Command;
use crate::core::{preview_payer, run_round, Ledger, LedgerStore};
use crate::types::LedgerError;
use std::io::Write;

/// Run one command against `store`, reporting to `output`
///
/// # Errors
///
/// Returns the ledger error that stopped the command (`NotFound`,
/// `DuplicateIdentifier`, `EmptyLedger`) or `IoFailure` if loading, saving
/// or writing the report failed.
pub fn execute(
    command: &Command,
    store: &dyn LedgerStore,
    output: &mut dyn Write,
) -> Result<(), LedgerError> {
    let mut ledger = store.load_ledger()?;

    match command {
        Command::Add { name, cost } => {
            ledger.add(name, *cost)?;
            store.save_ledger(&ledger)?;
            writeln!(
                output,
                "New member '{}' with order of price '{:.2}' has been added to the list!",
                name, cost
            )?;
        }
        Command::Remove { name } => {
            let account = ledger.remove(name)?;
            store.save_ledger(&ledger)?;
            writeln!(
                output,
                "{} has been removed from the list. At time of removal, a remaining balance of '{:.2}' was on their account.",
                name, account.balance
            )?;
        }
        Command::SetCost { name, cost } => {
            ledger.set_recurring_cost(name, *cost)?;
            store.save_ledger(&ledger)?;
            writeln!(
                output,
                "{}'s order has been updated with price '{:.2}'!",
                name, cost
            )?;
        }
        Command::SetBalance { name, balance } => {
            ledger.set_balance(name, *balance)?;
            store.save_ledger(&ledger)?;
            writeln!(
                output,
                "{}'s account has been updated with balance '{:.2}'!",
                name, balance
            )?;
        }
        Command::List => write_member_list(&ledger, output)?,
        Command::Show { name } => {
            let account = ledger.get(name)?;
            writeln!(output, "{}'s current order status:", name)?;
            writeln!(output, "\tOrder Cost: {:.2}", account.recurring_cost)?;
            writeln!(output, "\tCurrent Balance: {:.2}", account.balance)?;
        }
        Command::Run => {
            let result = run_round(&mut ledger)?;
            store.save_ledger(&ledger)?;
            writeln!(
                output,
                "The buyer for this round is: {}, and the cost of the order will be: {:.2}",
                result.payer, result.total_cost
            )?;
        }
        Command::Next => {
            let result = preview_payer(&ledger)?;
            writeln!(
                output,
                "Next in line to buy is: {}, for an order costing: {:.2}",
                result.payer, result.total_cost
            )?;
        }
    }

    Ok(())
}

fn write_member_list(ledger: &Ledger, output: &mut dyn Write) -> Result<(), LedgerError> {
    if ledger.is_empty() {
        writeln!(output, "The coffee list is empty.")?;
        return Ok(());
    }

    writeln!(output, "Current members of the coffee list:")?;
    for (name, _) in ledger.iter() {
        writeln!(output, "\t{}", name)?;
    }
    Ok(())
}
