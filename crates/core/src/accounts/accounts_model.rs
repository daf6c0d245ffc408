//! Account domain models.

use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::customers::CustomerId;
use crate::{errors::ValidationError, Error};

/// Identity assigned to an account by the persistence layer.
pub type AccountId = i32;

/// Kind of account a customer can hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AccountType {
    Checking,
    Savings,
}

impl AccountType {
    pub fn as_str(&self) -> &'static str {
        match self {
            AccountType::Checking => "CHECKING",
            AccountType::Savings => "SAVINGS",
        }
    }
}

impl fmt::Display for AccountType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AccountType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "CHECKING" => Ok(AccountType::Checking),
            "SAVINGS" => Ok(AccountType::Savings),
            other => Err(Error::Validation(ValidationError::InvalidInput(format!(
                "Unknown account type '{}'",
                other
            )))),
        }
    }
}

/// Lifecycle state of an account. `Closed` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AccountStatus {
    #[default]
    Open,
    Closed,
}

impl AccountStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            AccountStatus::Open => "OPEN",
            AccountStatus::Closed => "CLOSED",
        }
    }
}

impl fmt::Display for AccountStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AccountStatus {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "OPEN" => Ok(AccountStatus::Open),
            "CLOSED" => Ok(AccountStatus::Closed),
            other => Err(Error::Validation(ValidationError::InvalidInput(format!(
                "Unknown account status '{}'",
                other
            )))),
        }
    }
}

/// Invariant violations raised by the account and customer entities.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AccountError {
    #[error("Amount must be greater than 0, got {0}")]
    InvalidAmount(Decimal),

    #[error("Insufficient funds: balance is {balance}, requested {requested}")]
    InsufficientFunds { balance: Decimal, requested: Decimal },

    #[error("Account is closed")]
    AccountClosed,

    #[error("Account has already been closed")]
    AlreadyClosed,

    #[error("Account cannot be closed while it holds a balance of {0}")]
    FundedBalance(Decimal),

    #[error("A savings account must exist before a checking account can be opened")]
    SavingsAccountRequired,
}

/// Domain model representing a customer's account.
///
/// Fields are private so that the balance and status can only change
/// through the guarded operations below.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    id: Option<AccountId>,
    customer_id: CustomerId,
    account_type: AccountType,
    status: AccountStatus,
    balance: Decimal,
    #[serde(skip)]
    version: i32,
}

impl Account {
    /// A new, not yet persisted account in the `Open` state.
    pub(crate) fn open(
        customer_id: CustomerId,
        account_type: AccountType,
        initial_deposit: Decimal,
    ) -> Self {
        Self {
            id: None,
            customer_id,
            account_type,
            status: AccountStatus::Open,
            balance: initial_deposit,
            version: 0,
        }
    }

    /// Rebuilds an account from stored state.
    ///
    /// Only storage implementations should call this; it bypasses every guard.
    pub fn from_storage(
        id: AccountId,
        customer_id: CustomerId,
        account_type: AccountType,
        status: AccountStatus,
        balance: Decimal,
        version: i32,
    ) -> Self {
        Self {
            id: Some(id),
            customer_id,
            account_type,
            status,
            balance,
            version,
        }
    }

    /// `None` until the account has been persisted.
    pub fn id(&self) -> Option<AccountId> {
        self.id
    }

    pub fn customer_id(&self) -> CustomerId {
        self.customer_id
    }

    pub fn account_type(&self) -> AccountType {
        self.account_type
    }

    pub fn status(&self) -> AccountStatus {
        self.status
    }

    pub fn balance(&self) -> Decimal {
        self.balance
    }

    /// Optimistic concurrency token, bumped by storage on every update.
    pub fn version(&self) -> i32 {
        self.version
    }

    pub fn is_closed(&self) -> bool {
        self.status == AccountStatus::Closed
    }

    /// Adds `amount` to the balance and returns the new balance.
    pub fn make_deposit(&mut self, amount: Decimal) -> Result<Decimal, AccountError> {
        self.ensure_open()?;
        ensure_positive(amount)?;

        self.balance += amount;
        Ok(self.balance)
    }

    /// Subtracts `amount` from the balance and returns the new balance.
    ///
    /// The balance is checked before mutation and never goes negative.
    pub fn make_withdrawal(&mut self, amount: Decimal) -> Result<Decimal, AccountError> {
        self.ensure_open()?;
        ensure_positive(amount)?;

        if amount > self.balance {
            return Err(AccountError::InsufficientFunds {
                balance: self.balance,
                requested: amount,
            });
        }

        self.balance -= amount;
        Ok(self.balance)
    }

    /// Moves the account to `Closed`. Allowed once, and only with a zero balance.
    pub fn close(&mut self) -> Result<(), AccountError> {
        if self.is_closed() {
            return Err(AccountError::AlreadyClosed);
        }
        if !self.balance.is_zero() {
            return Err(AccountError::FundedBalance(self.balance));
        }

        self.status = AccountStatus::Closed;
        Ok(())
    }

    fn ensure_open(&self) -> Result<(), AccountError> {
        if self.is_closed() {
            return Err(AccountError::AccountClosed);
        }
        Ok(())
    }
}

fn ensure_positive(amount: Decimal) -> Result<(), AccountError> {
    if amount <= Decimal::ZERO {
        return Err(AccountError::InvalidAmount(amount));
    }
    Ok(())
}
