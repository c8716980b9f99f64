//! Date sources for grouping transactions by calendar day
//!
//! Accounts never read the wall clock directly; they ask a [`Clock`] for
//! "today". Production code uses [`SystemClock`], tests pin the date with
//! [`FixedClock`] or move it by hand with [`ManualClock`].

use chrono::{Days, Local, NaiveDate};
use std::fmt::Debug;
use std::sync::{Mutex, PoisonError};

/// Source of the current calendar date
pub trait Clock: Send + Sync + Debug {
    /// The date new transactions are recorded under
    fn today(&self) -> NaiveDate;
}

/// Local wall-clock date
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// A clock stuck on one date
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}

/// A clock whose date is moved explicitly
///
/// Shared through an `Arc` so a test can keep a handle while accounts read it.
#[derive(Debug)]
pub struct ManualClock {
    date: Mutex<NaiveDate>,
}

impl ManualClock {
    pub fn new(date: NaiveDate) -> Self {
        ManualClock {
            date: Mutex::new(date),
        }
    }

    pub fn set(&self, date: NaiveDate) {
        *self.date.lock().unwrap_or_else(PoisonError::into_inner) = date;
    }

    /// Move the date forward by `days`, saturating at the last representable date
    pub fn advance_days(&self, days: u64) {
        let mut date = self.date.lock().unwrap_or_else(PoisonError::into_inner);
        *date = date.checked_add_days(Days::new(days)).unwrap_or(NaiveDate::MAX);
    }
}

impl Clock for ManualClock {
    fn today(&self) -> NaiveDate {
        *self.date.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
