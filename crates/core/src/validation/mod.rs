//! Validation module - request models and aggregate request validators.

mod request_validators;
mod validation_model;

pub use request_validators::{AccountTransactionValidator, OpenAccountRequestValidator};
pub use validation_model::{
    AccountTransactionRequest, CloseAccountRequest, OpenAccountRequest, TransactionKind,
    ValidationErrors,
};
