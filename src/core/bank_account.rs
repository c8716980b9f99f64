//! Bank account module
//!
//! This module provides the `BankAccount` struct, the single stateful entity
//! of the crate. An account owns its balance and a date-keyed, append-only
//! transaction history.
//!
//! The BankAccount is responsible for:
//! - Validating amounts and balances before any mutation
//! - Applying deposits, withdrawals, transfers and interest accruals
//! - Recording one ledger entry per balance change under the current date
//! - Exposing read-only views of its balance and history
//!
//! # Transfers
//!
//! A transfer is composed of a withdrawal on the sender and a deposit on the
//! receiver, each of which records its own entry, followed by one annotation
//! entry per side naming the counterparty. A single transfer therefore appends
//! four records while changing each balance once. Consumers summing a history
//! must skip the `Transfer to/from` annotations to reconcile the balance.

use crate::core::clock::{Clock, SystemClock};
use crate::types::{AccountError, AccountId, History, Operation, TransactionRecord};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use std::any::Any;
use std::fmt;
use std::sync::Arc;
use tracing::{debug, warn};

/// A bank account with a balance and a per-day transaction log
///
/// The initial balance is not recorded as a transaction. Every later change
/// to the balance goes through one of the mutation methods, which either
/// apply completely or return an error without touching the account.
#[derive(Debug, Clone)]
pub struct BankAccount {
    id: AccountId,
    owner: String,
    balance: Decimal,
    history: History,
    clock: Arc<dyn Clock>,
}

impl BankAccount {
    /// Create an account that records transactions under the local date
    ///
    /// Neither `id` nor `owner` is validated, and `initial_balance` may be
    /// negative.
    pub fn new(
        id: impl Into<AccountId>,
        owner: impl Into<String>,
        initial_balance: Decimal,
    ) -> Self {
        Self::with_clock(id, owner, initial_balance, Arc::new(SystemClock))
    }

    /// Create an account that asks `clock` for the date of each transaction
    pub fn with_clock(
        id: impl Into<AccountId>,
        owner: impl Into<String>,
        initial_balance: Decimal,
        clock: Arc<dyn Clock>,
    ) -> Self {
        BankAccount {
            id: id.into(),
            owner: owner.into(),
            balance: initial_balance,
            history: History::new(),
            clock,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn owner(&self) -> &str {
        &self.owner
    }

    /// Current balance
    pub fn balance(&self) -> Decimal {
        self.balance
    }

    /// Full history, keyed by date in ascending order
    pub fn transactions(&self) -> &History {
        &self.history
    }

    /// Records for a single date, empty when nothing happened that day
    pub fn transactions_on(&self, date: NaiveDate) -> &[TransactionRecord] {
        self.history.get(&date).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Deposit funds into the account
    ///
    /// # Errors
    ///
    /// - `InvalidAmount` if `amount` is zero or negative
    /// - `ArithmeticOverflow` if the new balance is not representable
    pub fn deposit(&mut self, amount: Decimal) -> Result<(), AccountError> {
        if amount <= Decimal::ZERO {
            return Err(self.reject(AccountError::invalid_amount(Operation::Deposit, amount)));
        }

        let new_balance = self.balance.checked_add(amount).ok_or_else(|| {
            self.reject(AccountError::arithmetic_overflow(Operation::Deposit, &self.id))
        })?;

        self.balance = new_balance;
        self.record(TransactionRecord::deposit(amount));
        debug!(account = %self.id, %amount, balance = %self.balance, "deposit applied");

        Ok(())
    }

    /// Withdraw funds from the account
    ///
    /// # Errors
    ///
    /// Checked in this order:
    /// - `InvalidAmount` if `amount` is zero or negative
    /// - `InsufficientFunds` if `amount` exceeds the balance
    pub fn withdraw(&mut self, amount: Decimal) -> Result<(), AccountError> {
        if amount <= Decimal::ZERO {
            return Err(self.reject(AccountError::invalid_amount(Operation::Withdrawal, amount)));
        }

        if amount > self.balance {
            return Err(self.reject(AccountError::insufficient_funds(
                Operation::Withdrawal,
                self.balance,
                amount,
            )));
        }

        let new_balance = self.balance.checked_sub(amount).ok_or_else(|| {
            self.reject(AccountError::arithmetic_overflow(Operation::Withdrawal, &self.id))
        })?;

        self.balance = new_balance;
        self.record(TransactionRecord::withdrawal(amount));
        debug!(account = %self.id, %amount, balance = %self.balance, "withdrawal applied");

        Ok(())
    }

    /// Move `amount` from this account to `target`
    ///
    /// Withdraws from `self`, deposits into `target`, then appends a
    /// `Transfer to account <target>` entry here and a
    /// `Transfer from account <self>` entry on the target.
    ///
    /// `self` and `target` are distinct mutable borrows, so an account can
    /// never be its own transfer target.
    ///
    /// # Errors
    ///
    /// Checked in this order, before either account is touched:
    /// - `InvalidAmount` if `amount` is zero or negative
    /// - `InsufficientFunds` if `amount` exceeds this account's balance
    /// - `ArithmeticOverflow` if the target's balance cannot absorb `amount`
    pub fn transfer(&mut self, target: &mut BankAccount, amount: Decimal) -> Result<(), AccountError> {
        if amount <= Decimal::ZERO {
            return Err(self.reject(AccountError::invalid_amount(Operation::Transfer, amount)));
        }

        if amount > self.balance {
            return Err(self.reject(AccountError::insufficient_funds(
                Operation::Transfer,
                self.balance,
                amount,
            )));
        }

        if target.balance.checked_add(amount).is_none() {
            return Err(self.reject(AccountError::arithmetic_overflow(Operation::Transfer, &target.id)));
        }

        self.withdraw(amount)?;
        target.deposit(amount)?;

        self.record(TransactionRecord::transfer_to(&target.id, amount));
        target.record(TransactionRecord::transfer_from(&self.id, amount));

        debug!(from = %self.id, to = %target.id, %amount, "transfer applied");

        Ok(())
    }

    /// Transfer to a dynamically typed target
    ///
    /// Used where the target arrives type-erased. Anything other than a
    /// `BankAccount` is rejected with `TypeMismatch` before the amount is
    /// looked at.
    pub fn transfer_any(&mut self, target: &mut dyn Any, amount: Decimal) -> Result<(), AccountError> {
        let target = target
            .downcast_mut::<BankAccount>()
            .ok_or_else(|| self.reject(AccountError::TypeMismatch))?;

        self.transfer(target, amount)
    }

    /// Accrue simple interest on the current balance
    ///
    /// `rate` is a percentage: `5` credits 5% of the balance held before the
    /// accrual. The interest is credited through [`BankAccount::deposit`], so
    /// an account whose balance is zero or negative cannot accrue interest
    /// and reports the deposit's `InvalidAmount`.
    ///
    /// # Returns
    ///
    /// The interest credited.
    pub fn calculate_interest(&mut self, rate: Decimal) -> Result<Decimal, AccountError> {
        if rate <= Decimal::ZERO {
            return Err(self.reject(AccountError::invalid_amount(Operation::Interest, rate)));
        }

        let interest = rate
            .checked_div(Decimal::ONE_HUNDRED)
            .and_then(|fraction| self.balance.checked_mul(fraction))
            .ok_or_else(|| {
                self.reject(AccountError::arithmetic_overflow(Operation::Interest, &self.id))
            })?
            .normalize();

        self.deposit(interest)?;
        debug!(account = %self.id, %rate, %interest, "interest accrued");

        Ok(interest)
    }

    fn record(&mut self, record: TransactionRecord) {
        let today = self.clock.today();
        self.history.entry(today).or_default().push(record);
    }

    fn reject(&self, error: AccountError) -> AccountError {
        warn!(account = %self.id, %error, "operation rejected");
        error
    }
}

impl fmt::Display for BankAccount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "BankAccount(id={}, owner={}, balance={})",
            self.id,
            self.owner,
            self.balance.normalize()
        )
    }
}
