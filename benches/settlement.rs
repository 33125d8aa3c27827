//! Benchmark suite for settlement rounds
//!
//! Measures a single round and a persisted round trip across ledgers of
//! increasing size, using the divan benchmarking framework.
//!
//! # Running Benchmarks
//!
//! ```bash
//! cargo bench
//! ```

use coffee_payer::core::{run_round, Ledger, LedgerStore, SettlementEngine};
use coffee_payer::io::MemoryStore;
use coffee_payer::AccountRecord;

fn main() {
    divan::main();
}

fn ledger_of(participants: usize) -> Ledger {
    Ledger::from_records((0..participants).map(|i| {
        AccountRecord::new(
            format!("participant-{}", i),
            2.0 + (i % 7) as f64 * 0.35,
            (i % 11) as f64 - 5.0,
        )
    }))
}

/// One round over ledgers of different sizes
#[divan::bench(args = [10, 100, 1_000])]
fn single_round(bencher: divan::Bencher, participants: usize) {
    bencher
        .with_inputs(|| ledger_of(participants))
        .bench_local_values(|mut ledger| run_round(&mut ledger).map(|result| result.total_cost));
}

/// A hundred consecutive rounds on the same ledger
#[divan::bench(args = [10, 100])]
fn hundred_rounds(bencher: divan::Bencher, participants: usize) {
    bencher
        .with_inputs(|| SettlementEngine::new(ledger_of(participants)))
        .bench_local_values(|mut engine| engine.run_rounds(100).map(|results| results.len()));
}

/// Load, settle and save, as the CLI does for `run`
#[divan::bench(args = [10, 100, 1_000])]
fn persisted_round(bencher: divan::Bencher, participants: usize) {
    bencher
        .with_inputs(|| {
            let store = MemoryStore::new();
            store
                .save_ledger(&ledger_of(participants))
                .expect("Failed to seed store");
            store
        })
        .bench_local_values(|store| {
            let mut ledger = store.load_ledger().expect("Load failed");
            run_round(&mut ledger).expect("Round failed");
            store.save_ledger(&ledger).expect("Save failed");
        });
}
