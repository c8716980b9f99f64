//! Transaction-related types for the bank account model
//!
//! This module defines the ledger entry appended to an account's history and
//! the date-keyed history structure itself.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use std::collections::BTreeMap;
use std::fmt;

/// Account identifier
///
/// Opaque and caller-supplied; uniqueness is a convention, never checked.
pub type AccountId = String;

/// Date-keyed transaction history
///
/// A date is present only once at least one record was appended on it, and
/// records within a day keep their insertion order.
pub type History = BTreeMap<NaiveDate, Vec<TransactionRecord>>;

/// A single ledger entry
///
/// Records are immutable once appended to a history.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransactionRecord {
    /// Free-text label ("Deposit", "Withdrawal", or a transfer note)
    pub description: String,

    /// Signed delta: positive for credits, negative for debits
    pub amount: Decimal,
}

impl TransactionRecord {
    pub fn new(description: impl Into<String>, amount: Decimal) -> Self {
        TransactionRecord {
            description: description.into(),
            amount,
        }
    }

    /// Credit recorded by a deposit
    pub fn deposit(amount: Decimal) -> Self {
        TransactionRecord::new("Deposit", amount)
    }

    /// Debit recorded by a withdrawal; `amount` is the positive amount withdrawn
    pub fn withdrawal(amount: Decimal) -> Self {
        TransactionRecord::new("Withdrawal", -amount)
    }

    /// Annotation on the sending side of a transfer
    pub fn transfer_to(target: &str, amount: Decimal) -> Self {
        TransactionRecord::new(format!("Transfer to account {}", target), -amount)
    }

    /// Annotation on the receiving side of a transfer
    pub fn transfer_from(source: &str, amount: Decimal) -> Self {
        TransactionRecord::new(format!("Transfer from account {}", source), amount)
    }
}

impl fmt::Display for TransactionRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.description, self.amount.normalize())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::deposit(TransactionRecord::deposit(Decimal::new(200, 0)), "Deposit", Decimal::new(200, 0))]
    #[case::withdrawal(TransactionRecord::withdrawal(Decimal::new(100, 0)), "Withdrawal", Decimal::new(-100, 0))]
    #[case::transfer_to(
        TransactionRecord::transfer_to("654321", Decimal::new(50, 0)),
        "Transfer to account 654321",
        Decimal::new(-50, 0)
    )]
    #[case::transfer_from(
        TransactionRecord::transfer_from("123456", Decimal::new(50, 0)),
        "Transfer from account 123456",
        Decimal::new(50, 0)
    )]
    fn test_record_constructors(
        #[case] record: TransactionRecord,
        #[case] description: &str,
        #[case] amount: Decimal,
    ) {
        assert_eq!(record.description, description);
        assert_eq!(record.amount, amount);
    }

    #[rstest]
    #[case(TransactionRecord::deposit(Decimal::new(2750, 2)), "Deposit: 27.5")]
    #[case(TransactionRecord::withdrawal(Decimal::new(100, 0)), "Withdrawal: -100")]
    fn test_record_display(#[case] record: TransactionRecord, #[case] expected: &str) {
        assert_eq!(record.to_string(), expected);
    }
}
