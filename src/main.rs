//! Coffee Payer CLI
//!
//! Command-line interface for the shared coffee ledger.
//!
//! # Usage
//!
//! ```bash
//! cargo run -- add Alice 3.50
//! cargo run -- run
//! cargo run -- --ledger team.csv --log info list
//! ```
//!
//! Every command loads the ledger file, applies one operation, saves the
//! file again if anything changed, and prints a report to stdout. Logs go
//! to stderr.
//!
//! # Exit Codes
//!
//! - 0: Success
//! - 1: Error (unknown participant, duplicate name, empty ledger, I/O failure)

use coffee_payer::cli;
use coffee_payer::command;
use coffee_payer::io::CsvFileStore;
use std::process;
use tracing_subscriber::EnvFilter;

fn main() {
    let args = cli::parse_args();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&args.log))
        .with_writer(std::io::stderr)
        .init();

    let store = CsvFileStore::new(args.ledger.clone());
    tracing::debug!(ledger = %store.path().display(), command = ?args.command, "executing");

    let mut output = std::io::stdout();
    if let Err(e) = command::execute(&args.command, &store, &mut output) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
