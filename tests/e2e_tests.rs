//! End-to-end integration tests
//!
//! These tests drive the command pipeline against a real ledger file using
//! predefined fixtures. Each test:
//! 1. Copies ledger.csv (if present) from a fixture directory into a temp dir
//! 2. Parses and executes every line of commands.txt in order
//! 3. Compares the combined report with expected_output.txt
//! 4. Compares the persisted ledger with expected_ledger.csv
//!
//! Test fixtures are located in tests/fixtures/ and cover:
//! - The reference settlement scenario and tie-breaking
//! - Payer rotation over several rounds
//! - Membership management (add, duplicate add, edit, remove)
//! - Malformed and duplicate persisted lines
//! - Empty ledger errors

#[cfg(test)]
mod tests {
    use clap::Parser;
    use coffee_payer::cli::CliArgs;
    use coffee_payer::command::execute;
    use coffee_payer::io::CsvFileStore;
    use rstest::rstest;
    use std::fs;
    use std::path::Path;
    use tempfile::TempDir;

    /// Run a fixture's commands against a temp copy of its ledger
    ///
    /// Command errors are reported in the output the same way the binary
    /// reports them, so fixtures can assert on failures too.
    ///
    /// # Panics
    ///
    /// Panics if fixture files cannot be read, a command line does not
    /// parse, or actual output/ledger differ from the expected files.
    fn run_test_fixture(fixture_name: &str) {
        let fixture_dir = Path::new("tests/fixtures").join(fixture_name);
        let commands_path = fixture_dir.join("commands.txt");
        let expected_output_path = fixture_dir.join("expected_output.txt");
        let expected_ledger_path = fixture_dir.join("expected_ledger.csv");

        let workspace = TempDir::new().expect("Failed to create temp dir");
        let ledger_path = workspace.path().join("data").join("ledger.csv");

        let initial_ledger = fixture_dir.join("ledger.csv");
        if initial_ledger.exists() {
            fs::create_dir_all(ledger_path.parent().unwrap()).unwrap();
            fs::copy(&initial_ledger, &ledger_path).expect("Failed to copy fixture ledger");
        }

        let store = CsvFileStore::new(&ledger_path);
        let commands = fs::read_to_string(&commands_path)
            .unwrap_or_else(|e| panic!("Failed to read {}: {}", commands_path.display(), e));

        let mut output = Vec::new();
        for line in commands.lines().filter(|l| !l.trim().is_empty()) {
            let argv = std::iter::once("coffee-payer").chain(line.split_whitespace());
            let args = CliArgs::try_parse_from(argv)
                .unwrap_or_else(|e| panic!("Bad command line '{}': {}", line, e));

            if let Err(e) = execute(&args.command, &store, &mut output) {
                output.extend_from_slice(format!("Error: {}\n", e).as_bytes());
            }
        }

        let actual_output = String::from_utf8(output).unwrap();
        let expected_output = fs::read_to_string(&expected_output_path).unwrap();
        assert_eq!(
            actual_output, expected_output,
            "\n\nOutput mismatch for fixture: {}\n\nActual output:\n{}\n\nExpected output:\n{}\n",
            fixture_name, actual_output, expected_output
        );

        let actual_ledger = fs::read_to_string(&ledger_path).unwrap_or_default();
        let expected_ledger = fs::read_to_string(&expected_ledger_path).unwrap();
        assert_eq!(
            actual_ledger, expected_ledger,
            "\n\nLedger mismatch for fixture: {}\n",
            fixture_name
        );
    }

    #[rstest]
    #[case("settlement_scenario")]
    #[case("tie_break")]
    #[case("payer_rotation")]
    #[case("malformed_data")]
    #[case("membership")]
    #[case("empty_ledger")]
    fn test_fixtures(#[case] fixture: &str) {
        run_test_fixture(fixture);
    }
}
