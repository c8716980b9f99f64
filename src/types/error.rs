//! Error types for the bank account model
//!
//! This module defines every error an account operation or the demonstration
//! program can report.
//!
//! # Error Categories
//!
//! - **Validation Errors**: non-positive amounts or rates, insufficient funds,
//!   a transfer target that is not a `BankAccount`
//! - **Arithmetic Errors**: overflow in balance calculations
//! - **Report Errors**: I/O and CSV failures while writing output

use rust_decimal::Decimal;
use std::fmt;
use thiserror::Error;

/// The account operation an error originated from
///
/// Each operation owns the wording of its validation messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Deposit,
    Withdrawal,
    Transfer,
    Interest,
}

impl Operation {
    /// Subject of the "must be positive" message for this operation
    pub fn amount_label(self) -> &'static str {
        match self {
            Operation::Deposit => "Deposit amount",
            Operation::Withdrawal => "Withdrawal amount",
            Operation::Transfer => "Transfer amount",
            Operation::Interest => "Interest rate",
        }
    }

    /// Message reported when the balance cannot cover the requested amount
    ///
    /// Transfers and plain withdrawals historically use different wording.
    pub fn insufficient_funds_message(self) -> &'static str {
        match self {
            Operation::Transfer => "Insufficient funds.",
            _ => "Insufficient Balance.",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Operation::Deposit => "deposit",
            Operation::Withdrawal => "withdrawal",
            Operation::Transfer => "transfer",
            Operation::Interest => "interest",
        };
        f.write_str(name)
    }
}

/// Error raised by a `BankAccount` operation
///
/// Every variant is raised before the failing call mutates any state, so the
/// account is left exactly as it was.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AccountError {
    /// A non-positive amount or rate was supplied
    #[error("{} must be positive.", .operation.amount_label())]
    InvalidAmount {
        /// Operation that rejected the amount
        operation: Operation,
        /// The rejected amount (or rate)
        amount: Decimal,
    },

    /// The balance does not cover a withdrawal or transfer
    #[error("{}", .operation.insufficient_funds_message())]
    InsufficientFunds {
        /// Operation that was rejected
        operation: Operation,
        /// Balance at the time of the request
        balance: Decimal,
        /// Requested amount
        requested: Decimal,
    },

    /// The transfer target is not a `BankAccount`
    #[error("Target account must be an instance of BankAccount.")]
    TypeMismatch,

    /// Applying the operation would overflow the balance
    #[error("Arithmetic overflow in {operation} for account {account}")]
    ArithmeticOverflow {
        /// Operation that would overflow
        operation: Operation,
        /// Id of the account whose balance would overflow
        account: String,
    },
}

impl AccountError {
    /// Create an InvalidAmount error
    pub fn invalid_amount(operation: Operation, amount: Decimal) -> Self {
        AccountError::InvalidAmount { operation, amount }
    }

    /// Create an InsufficientFunds error
    pub fn insufficient_funds(operation: Operation, balance: Decimal, requested: Decimal) -> Self {
        AccountError::InsufficientFunds {
            operation,
            balance,
            requested,
        }
    }

    /// Create an ArithmeticOverflow error
    pub fn arithmetic_overflow(operation: Operation, account: &str) -> Self {
        AccountError::ArithmeticOverflow {
            operation,
            account: account.to_string(),
        }
    }
}

/// Error raised while writing a report
#[derive(Debug, Error)]
pub enum ReportError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

/// Error raised by the demonstration program
#[derive(Debug, Error)]
pub enum DemoError {
    #[error(transparent)]
    Account(#[from] AccountError),

    #[error(transparent)]
    Report(#[from] ReportError),
}
