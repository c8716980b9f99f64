//! Types module
//!
//! Contains the data structures shared across the crate:
//! - `transaction`: ledger records and the date-keyed history
//! - `error`: error types for account operations and reporting

pub mod error;
pub mod transaction;

pub use error::{AccountError, DemoError, Operation, ReportError};
pub use transaction::{AccountId, History, TransactionRecord};
