//! Per-operation outcomes returned by the account service.
//!
//! Each operation has one enum listing its success and failure cases.
//! Serialized with an `outcome` tag so the boundary layer can forward them as-is.

use rust_decimal::Decimal;
use serde::Serialize;

use super::accounts_model::{AccountId, AccountStatus};
use crate::customers::{Customer, CustomerId};
use crate::validation::ValidationErrors;

/// Outcome of opening an account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(
    tag = "outcome",
    rename_all = "SCREAMING_SNAKE_CASE",
    rename_all_fields = "camelCase"
)]
pub enum OpenAccountResponse {
    Opened {
        customer_id: CustomerId,
        account_id: AccountId,
    },
    CustomerNotFound {
        customer_id: CustomerId,
    },
    SavingsAccountRequired {
        customer_id: CustomerId,
    },
    ValidationFailed {
        errors: ValidationErrors,
    },
}

impl OpenAccountResponse {
    pub fn is_success(&self) -> bool {
        matches!(self, OpenAccountResponse::Opened { .. })
    }
}

/// Outcome of a deposit or a withdrawal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(
    tag = "outcome",
    rename_all = "SCREAMING_SNAKE_CASE",
    rename_all_fields = "camelCase"
)]
pub enum TransactionResponse {
    Completed {
        customer_id: CustomerId,
        account_id: AccountId,
        new_balance: Decimal,
    },
    AccountNotFound {
        account_id: AccountId,
    },
    InsufficientFunds {
        account_id: AccountId,
        balance: Decimal,
    },
    AccountClosed {
        account_id: AccountId,
    },
    ValidationFailed {
        errors: ValidationErrors,
    },
}

impl TransactionResponse {
    pub fn is_success(&self) -> bool {
        matches!(self, TransactionResponse::Completed { .. })
    }
}

/// Outcome of closing an account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(
    tag = "outcome",
    rename_all = "SCREAMING_SNAKE_CASE",
    rename_all_fields = "camelCase"
)]
pub enum CloseAccountResponse {
    Closed {
        customer_id: CustomerId,
        account_id: AccountId,
        final_status: AccountStatus,
    },
    AccountNotFound {
        account_id: AccountId,
    },
    AccountAlreadyClosed {
        account_id: AccountId,
    },
    AccountHasFundedBalance {
        account_id: AccountId,
        balance: Decimal,
    },
}

impl CloseAccountResponse {
    pub fn is_success(&self) -> bool {
        matches!(self, CloseAccountResponse::Closed { .. })
    }
}

/// Outcome of creating a customer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(
    tag = "outcome",
    rename_all = "SCREAMING_SNAKE_CASE",
    rename_all_fields = "camelCase"
)]
pub enum CreateCustomerResponse {
    Created { customer: Customer },
    ValidationFailed { errors: ValidationErrors },
}
