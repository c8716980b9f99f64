//! End-to-end integration tests
//!
//! These tests run the demonstration scenario with a pinned date and compare
//! the produced report with fixtures. Each fixture test:
//! 1. Runs the scenario with the given interest rate and output format
//! 2. Captures the report in memory
//! 3. Compares it with tests/fixtures/{fixture_name}/expected.{txt,csv}
//!
//! The binary itself is also exercised to check stdout and the exit code.

#[cfg(test)]
mod tests {
    use bank_account::cli::OutputFormat;
    use bank_account::demo::{run_and_report, DemoConfig};
    use bank_account::FixedClock;
    use chrono::NaiveDate;
    use rstest::rstest;
    use rust_decimal::Decimal;
    use std::fs;
    use std::path::Path;
    use std::process::Command;
    use std::str::FromStr;
    use std::sync::Arc;

    const FIXTURE_DATE: &str = "2024-06-15";

    fn expected_path(fixture_name: &str, format: OutputFormat) -> String {
        let extension = match format {
            OutputFormat::Text => "txt",
            OutputFormat::Csv => "csv",
        };
        format!("tests/fixtures/{}/expected.{}", fixture_name, extension)
    }

    /// Run the scenario and compare the report with the fixture
    ///
    /// # Panics
    ///
    /// Panics if the expected file cannot be read or the output differs.
    fn run_test_fixture(fixture_name: &str, rate: &str, format: OutputFormat) {
        let expected_path = expected_path(fixture_name, format);
        assert!(
            Path::new(&expected_path).exists(),
            "Expected file not found: {}",
            expected_path
        );

        let config = DemoConfig {
            rate: Decimal::from_str(rate).unwrap(),
            format,
            clock: Arc::new(FixedClock(NaiveDate::from_str(FIXTURE_DATE).unwrap())),
        };

        let mut output = Vec::new();
        run_and_report(&config, &mut output)
            .unwrap_or_else(|e| panic!("Failed to run demo: {}", e));

        let actual_output = String::from_utf8(output).expect("Output is not UTF-8");
        let expected_output = fs::read_to_string(&expected_path)
            .unwrap_or_else(|e| panic!("Failed to read expected file {}: {}", expected_path, e));

        assert_eq!(
            actual_output, expected_output,
            "\n\nOutput mismatch for fixture: {} (format: {:?})\n\nActual output:\n{}\n\nExpected output:\n{}\n",
            fixture_name, format, actual_output, expected_output
        );
    }

    #[rstest]
    #[case("default_text", "5", OutputFormat::Text)]
    #[case("default_csv", "5", OutputFormat::Csv)]
    #[case("low_rate_text", "2.5", OutputFormat::Text)]
    fn test_fixtures(#[case] fixture: &str, #[case] rate: &str, #[case] format: OutputFormat) {
        run_test_fixture(fixture, rate, format);
    }

    #[test]
    fn test_binary_prints_report() {
        let output = Command::new(env!("CARGO_BIN_EXE_bank-account"))
            .args(["--date", FIXTURE_DATE])
            .output()
            .expect("Failed to run binary");

        let expected = fs::read_to_string(expected_path("default_text", OutputFormat::Text))
            .expect("Failed to read expected file");

        assert!(output.status.success());
        assert_eq!(String::from_utf8_lossy(&output.stdout), expected);
    }

    #[test]
    fn test_binary_fails_on_rejected_rate() {
        let output = Command::new(env!("CARGO_BIN_EXE_bank-account"))
            .args(["--date", FIXTURE_DATE, "--rate", "0"])
            .output()
            .expect("Failed to run binary");

        assert_eq!(output.status.code(), Some(1));
        assert!(output.stdout.is_empty());
        assert!(String::from_utf8_lossy(&output.stderr)
            .contains("Error: Interest rate must be positive."));
    }
}
