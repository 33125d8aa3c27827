//! I/O module
//!
//! Handles persisted ledger state.
//!
//! # Components
//!
//! - `csv_format` - Line-record format and the leniency policy for bad lines
//! - `file_store` - File-backed persistence
//! - `memory_store` - In-memory persistence for tests and embedding

pub mod csv_format;
pub mod file_store;
pub mod memory_store;

pub use csv_format::{read_records, write_records, LoadReport, SkipReason, SkippedLine};
pub use file_store::CsvFileStore;
pub use memory_store::MemoryStore;
