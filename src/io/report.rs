//! Plain-text report of account state
//!
//! Renders each account's display string, then each account's history grouped
//! by date, then the interest earned.

use crate::core::BankAccount;
use crate::types::ReportError;
use rust_decimal::Decimal;
use std::io::Write;

/// Write one account's history, one indented line per record under each date
pub fn write_history(account: &BankAccount, output: &mut dyn Write) -> Result<(), ReportError> {
    writeln!(output, "Account {} Transactions:", account.id())?;

    if account.transactions().is_empty() {
        writeln!(output, "  (none)")?;
    }

    for (date, records) in account.transactions() {
        writeln!(output, "  {}", date.format("%Y-%m-%d"))?;
        for record in records {
            writeln!(output, "    {}", record)?;
        }
    }

    Ok(())
}

/// Write the full report for `accounts`
pub fn write_report(
    accounts: &[&BankAccount],
    interest: Decimal,
    output: &mut dyn Write,
) -> Result<(), ReportError> {
    for account in accounts {
        writeln!(output, "{}", account)?;
    }

    for account in accounts {
        write_history(account, output)?;
    }

    writeln!(output, "Interest Earned: {}", interest.normalize())?;
    output.flush()?;

    Ok(())
}
