//! Demonstration scenario
//!
//! Opens two accounts, moves money between them, accrues interest on the
//! first and reports the result in the configured format.

use crate::cli::{CliArgs, OutputFormat};
use crate::core::{BankAccount, Clock};
use crate::io::{write_history_csv, write_report};
use crate::types::{AccountError, DemoError};
use rust_decimal::Decimal;
use std::io::Write;
use std::sync::Arc;
use tracing::info;

/// Settings for one demonstration run
#[derive(Debug, Clone)]
pub struct DemoConfig {
    /// Interest rate in percent
    pub rate: Decimal,
    pub format: OutputFormat,
    pub clock: Arc<dyn Clock>,
}

impl DemoConfig {
    pub fn from_args(args: &CliArgs) -> Self {
        DemoConfig {
            rate: args.rate,
            format: args.format,
            clock: args.clock(),
        }
    }
}

/// Accounts and interest produced by a demonstration run
#[derive(Debug)]
pub struct DemoOutcome {
    pub first: BankAccount,
    pub second: BankAccount,
    pub interest: Decimal,
}

/// Run the scenario without producing output
///
/// The first account (`123456`, Amit, 500) receives a deposit of 200, a
/// withdrawal of 100, transfers 50 to the second account (`654321`, Aryan,
/// 300), and finally accrues interest at `config.rate`.
pub fn run(config: &DemoConfig) -> Result<DemoOutcome, AccountError> {
    let mut first =
        BankAccount::with_clock("123456", "Amit", Decimal::from(500), config.clock.clone());
    let mut second =
        BankAccount::with_clock("654321", "Aryan", Decimal::from(300), config.clock.clone());

    first.deposit(Decimal::from(200))?;
    first.withdraw(Decimal::from(100))?;
    first.transfer(&mut second, Decimal::from(50))?;
    let interest = first.calculate_interest(config.rate)?;

    info!(first = %first, second = %second, %interest, "demo completed");

    Ok(DemoOutcome {
        first,
        second,
        interest,
    })
}

/// Run the scenario and write the report to `output`
///
/// # Returns
///
/// The interest earned by the first account.
pub fn run_and_report(config: &DemoConfig, output: &mut dyn Write) -> Result<Decimal, DemoError> {
    let outcome = run(config)?;
    let accounts = [&outcome.first, &outcome.second];

    match config.format {
        OutputFormat::Text => write_report(&accounts, outcome.interest, output)?,
        OutputFormat::Csv => write_history_csv(&accounts, output)?,
    }

    Ok(outcome.interest)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::FixedClock;
    use crate::types::Operation;
    use chrono::NaiveDate;

    fn config(rate: Decimal) -> DemoConfig {
        DemoConfig {
            rate,
            format: OutputFormat::Text,
            clock: Arc::new(FixedClock(NaiveDate::from_ymd_opt(2024, 6, 15).unwrap())),
        }
    }

    #[test]
    fn test_run_default_scenario() {
        let outcome = run(&config(Decimal::from(5))).unwrap();

        assert_eq!(outcome.interest, Decimal::new(275, 1));
        assert_eq!(outcome.first.balance(), Decimal::new(5775, 1));
        assert_eq!(outcome.second.balance(), Decimal::from(350));
    }

    #[test]
    fn test_run_rejects_non_positive_rate() {
        let result = run(&config(Decimal::ZERO));
        assert_eq!(
            result.unwrap_err(),
            AccountError::invalid_amount(Operation::Interest, Decimal::ZERO)
        );
    }

    #[test]
    fn test_run_and_report_writes_nothing_on_failure() {
        let mut output = Vec::new();
        let result = run_and_report(&config(Decimal::NEGATIVE_ONE), &mut output);

        assert!(matches!(result, Err(DemoError::Account(_))));
        assert!(output.is_empty());
    }
}
