//! Line-record format for persisted ledgers
//!
//! One account per line, `identifier,recurring_cost,balance`, no header,
//! no quoting. Numbers are written in Rust's shortest round-trip decimal
//! form, so reading back saved output reproduces every value exactly.
//!
//! # Leniency policy
//!
//! Reading never fails because of a bad line. A line is skipped when:
//! - splitting it on `,` does not yield exactly three fields
//! - either numeric field does not parse as a float (after trimming)
//! - it is not valid UTF-8
//! - its identifier already appeared on an earlier line (first one wins)
//!
//! Skipped lines are returned in the [`LoadReport`] alongside the good
//! records so callers and tests can see what was dropped.

use crate::types::{AccountRecord, LedgerError};
use csv::{ByteRecord, QuoteStyle, ReaderBuilder, WriterBuilder};
use std::collections::HashSet;
use std::io::{Read, Write};
use std::str::FromStr;
use tracing::warn;

/// Number of fields in a valid ledger line
pub const FIELD_COUNT: usize = 3;

/// Why a persisted line was dropped
#[derive(Debug, Clone, PartialEq)]
pub enum SkipReason {
    /// The line did not split into exactly three fields
    FieldCount(usize),
    /// A numeric field held something other than a float
    InvalidNumber { field: &'static str, value: String },
    /// The line was not valid UTF-8
    InvalidUtf8,
    /// An earlier line already defined this identifier
    DuplicateIdentifier(String),
}

/// A dropped line and why it was dropped
#[derive(Debug, Clone, PartialEq)]
pub struct SkippedLine {
    /// 1-based line number in the input
    pub line: u64,
    pub reason: SkipReason,
}

/// Outcome of reading a persisted ledger
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LoadReport {
    /// Well-formed records in file order, one per identifier
    pub records: Vec<AccountRecord>,
    /// Lines dropped by the leniency policy
    pub skipped: Vec<SkippedLine>,
}

/// Convert one raw line into an account record
///
/// # Returns
///
/// * `Ok(AccountRecord)` for a well-formed line
/// * `Err(SkipReason)` describing why the line should be dropped
pub fn parse_record(record: &ByteRecord) -> Result<AccountRecord, SkipReason> {
    if record.len() != FIELD_COUNT {
        return Err(SkipReason::FieldCount(record.len()));
    }

    let id = text_field(record, 0)?;
    let recurring_cost = parse_number("recurring_cost", text_field(record, 1)?)?;
    let balance = parse_number("balance", text_field(record, 2)?)?;

    Ok(AccountRecord::new(id, recurring_cost, balance))
}

fn text_field(record: &ByteRecord, index: usize) -> Result<&str, SkipReason> {
    std::str::from_utf8(&record[index]).map_err(|_| SkipReason::InvalidUtf8)
}

fn parse_number(field: &'static str, value: &str) -> Result<f64, SkipReason> {
    f64::from_str(value.trim()).map_err(|_| SkipReason::InvalidNumber {
        field,
        value: value.to_string(),
    })
}

/// Read ledger lines from `input`, applying the leniency policy
///
/// # Errors
///
/// Only a failing reader produces an error (`IoFailure`); malformed lines
/// end up in [`LoadReport::skipped`].
pub fn read_records<R: Read>(input: R) -> Result<LoadReport, LedgerError> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .quoting(false)
        .from_reader(input);

    let mut report = LoadReport::default();
    let mut seen = HashSet::new();

    for result in reader.byte_records() {
        let record = result?;
        let line = record.position().map(|pos| pos.line()).unwrap_or_default();

        let parsed = parse_record(&record).and_then(|account_record| {
            if seen.insert(account_record.id.clone()) {
                Ok(account_record)
            } else {
                Err(SkipReason::DuplicateIdentifier(account_record.id))
            }
        });

        match parsed {
            Ok(account_record) => report.records.push(account_record),
            Err(reason) => {
                warn!(line, ?reason, "skipping malformed ledger line");
                report.skipped.push(SkippedLine { line, reason });
            }
        }
    }

    Ok(report)
}

/// Write ledger lines to `output`, one record per line in the given order
///
/// # Errors
///
/// Returns `IoFailure` if the writer fails.
pub fn write_records(
    records: &[AccountRecord],
    output: &mut dyn Write,
) -> Result<(), LedgerError> {
    let mut writer = WriterBuilder::new()
        .has_headers(false)
        .quote_style(QuoteStyle::Never)
        .from_writer(output);

    for record in records {
        writer.write_record(&[
            record.id.clone(),
            record.recurring_cost.to_string(),
            record.balance.to_string(),
        ])?;
    }

    writer.flush()?;
    Ok(())
}
