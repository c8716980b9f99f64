//! Bank Account Library
//! # Overview
//!
//! This library models a single in-memory bank account: deposits,
//! withdrawals, transfers between two accounts, simple interest accrual and
//! a per-day transaction log.
//!
//! # Architecture
//!
//! - [`types`] - Core data types (TransactionRecord, History, errors)
//! - [`core`] - Business logic components:
//!   - [`core::bank_account`] - The account entity and its operations
//!   - [`core::clock`] - Injectable date sources
//! - [`io`] - Text and CSV report output
//! - [`cli`] - CLI arguments parsing
//! - [`demo`] - The demonstration scenario run by the binary
//! - [`telemetry`] - Tracing subscriber setup
//!
//! # Example
//!
//! ```
//! use bank_account::BankAccount;
//! use rust_decimal::Decimal;
//!
//! let mut alice = BankAccount::new("123456", "Amit", Decimal::from(500));
//! let mut bob = BankAccount::new("654321", "Aryan", Decimal::from(300));
//!
//! alice.deposit(Decimal::from(200)).unwrap();
//! alice.transfer(&mut bob, Decimal::from(50)).unwrap();
//!
//! assert_eq!(alice.balance(), Decimal::from(650));
//! assert_eq!(bob.balance(), Decimal::from(350));
//! ```

pub mod cli;
pub mod core;
pub mod demo;
pub mod io;
pub mod telemetry;
pub mod types;

pub use crate::core::{BankAccount, Clock, FixedClock, ManualClock, SystemClock};
pub use io::{write_history_csv, write_report};
pub use types::{AccountError, AccountId, History, Operation, TransactionRecord};
