//! Core business logic module
//!
//! This module contains the account model:
//! - `bank_account` - The account entity and its operations
//! - `clock` - Date sources used to group transactions by day

pub mod bank_account;
pub mod clock;

pub use bank_account::BankAccount;
pub use clock::{Clock, FixedClock, ManualClock, SystemClock};
