//! I/O module
//!
//! Handles report output for accounts.
//!
//! # Components
//!
//! - `csv_format` - History table serialization in CSV
//! - `report` - Human-readable text report

pub mod csv_format;
pub mod report;

pub use csv_format::{history_rows, write_history_csv, HistoryRow};
pub use report::{write_history, write_report};
