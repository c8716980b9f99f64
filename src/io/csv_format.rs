//! CSV format handling for transaction histories
//!
//! Writes the history of one or more accounts as a flat table with columns
//! `account,date,description,amount`. Accounts appear in the order given,
//! dates ascending, and records in insertion order within a day.

use crate::core::BankAccount;
use crate::types::ReportError;
use serde::Serialize;
use std::io::Write;

/// One output row of the history table
#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct HistoryRow<'a> {
    pub account: &'a str,
    pub date: String,
    pub description: &'a str,
    pub amount: String,
}

/// Flatten an account's history into output rows
pub fn history_rows(account: &BankAccount) -> Vec<HistoryRow<'_>> {
    account
        .transactions()
        .iter()
        .flat_map(move |(date, records)| {
            records.iter().map(move |record| HistoryRow {
                account: account.id(),
                date: date.format("%Y-%m-%d").to_string(),
                description: &record.description,
                amount: record.amount.normalize().to_string(),
            })
        })
        .collect()
}

/// Write the histories of `accounts` in CSV format
///
/// The header row is always written, even when no account has any history.
///
/// # Errors
///
/// Returns `ReportError::Csv` if a row cannot be serialized or written, and
/// `ReportError::Io` if the output cannot be flushed.
pub fn write_history_csv(accounts: &[&BankAccount], output: &mut dyn Write) -> Result<(), ReportError> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(output);

    writer.write_record(["account", "date", "description", "amount"])?;

    for account in accounts {
        for row in history_rows(account) {
            writer.serialize(row)?;
        }
    }

    writer.flush()?;

    Ok(())
}
