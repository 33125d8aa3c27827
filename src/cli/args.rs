use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Default location of the persisted ledger
pub const DEFAULT_LEDGER_PATH: &str = "data/coffee_ledger.csv";

/// Decide who buys the next round of coffee
#[derive(Parser, Debug)]
#[command(name = "coffee-payer")]
#[command(about = "Decide who buys the next round of coffee", long_about = None)]
pub struct CliArgs {
    /// Ledger file holding every participant's cost and balance
    #[arg(
        long = "ledger",
        value_name = "PATH",
        default_value = DEFAULT_LEDGER_PATH,
        help = "Path to the ledger file (created on first save)"
    )]
    pub ledger: PathBuf,

    /// Log filter directive, e.g. `info` or `coffee_payer=debug`
    #[arg(long = "log", value_name = "FILTER", default_value = "warn")]
    pub log: String,

    #[command(subcommand)]
    pub command: Command,
}

/// Operations available on the ledger
#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// Add a new participant with a zero balance
    Add {
        #[arg(value_parser = parse_participant_id)]
        name: String,
        /// Cost of the participant's order
        #[arg(allow_negative_numbers = true, value_parser = parse_amount)]
        cost: f64,
    },

    /// Remove a participant and report their remaining balance
    Remove { name: String },

    /// Change a participant's order cost
    SetCost {
        name: String,
        #[arg(allow_negative_numbers = true, value_parser = parse_amount)]
        cost: f64,
    },

    /// Override a participant's balance
    SetBalance {
        name: String,
        #[arg(allow_negative_numbers = true, value_parser = parse_amount)]
        balance: f64,
    },

    /// List participant names
    List,

    /// Show a participant's order cost and balance
    Show { name: String },

    /// Select this round's payer and settle balances
    Run,

    /// Show who would pay next without changing anything
    Next,
}

/// Reject identifiers the ledger file cannot represent
///
/// Names are written unescaped, so they may not contain the field
/// delimiter or a line break, and must not be empty.
pub fn parse_participant_id(value: &str) -> Result<String, String> {
    if value.is_empty() {
        return Err("participant name must not be empty".to_string());
    }
    if value.contains(',') {
        return Err("participant name must not contain ','".to_string());
    }
    if value.contains(|c: char| c == '\n' || c == '\r') {
        return Err("participant name must not contain line breaks".to_string());
    }
    Ok(value.to_string())
}

/// Parse a cost or balance, rejecting `NaN` and infinities
///
/// One non-finite value would poison every later round total.
pub fn parse_amount(value: &str) -> Result<f64, String> {
    let amount: f64 = value
        .trim()
        .parse()
        .map_err(|_| format!("'{}' is not a number", value))?;
    if !amount.is_finite() {
        return Err(format!("'{}' is not a finite amount", value));
    }
    Ok(amount)
}
