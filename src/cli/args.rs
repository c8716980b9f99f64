use crate::core::{Clock, FixedClock, SystemClock};
use chrono::NaiveDate;
use clap::{Parser, ValueEnum};
use rust_decimal::Decimal;
use std::sync::Arc;

/// Run the bank account demonstration
#[derive(Parser, Debug)]
#[command(name = "bank-account")]
#[command(about = "Run the bank account demonstration", long_about = None)]
pub struct CliArgs {
    /// Interest rate, in percent, accrued on the first account
    #[arg(
        long = "rate",
        value_name = "RATE",
        default_value = "5",
        help = "Interest rate in percent accrued at the end of the demo"
    )]
    pub rate: Decimal,

    /// Date to record every transaction under
    #[arg(
        long = "date",
        value_name = "YYYY-MM-DD",
        help = "Record transactions under this date instead of today's local date"
    )]
    pub date: Option<NaiveDate>,

    /// Output format for the report
    #[arg(
        long = "format",
        value_name = "FORMAT",
        default_value = "text",
        help = "Output format: 'text' for a readable report or 'csv' for a history table"
    )]
    pub format: OutputFormat,
}

/// Available report formats
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Csv,
}

impl CliArgs {
    /// Clock selected by the `--date` flag
    ///
    /// A fixed clock when a date was given, the local wall clock otherwise.
    pub fn clock(&self) -> Arc<dyn Clock> {
        match self.date {
            Some(date) => Arc::new(FixedClock(date)),
            None => Arc::new(SystemClock),
        }
    }
}
