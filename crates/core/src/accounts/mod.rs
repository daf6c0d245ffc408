//! Accounts module - domain models, responses, services, and traits.

mod accounts_model;
mod accounts_responses;
mod accounts_service;
mod accounts_traits;

// Re-export the public interface
pub use accounts_model::{Account, AccountError, AccountId, AccountStatus, AccountType};
pub use accounts_responses::{
    CloseAccountResponse, CreateCustomerResponse, OpenAccountResponse, TransactionResponse,
};
pub use accounts_service::AccountService;
pub use accounts_traits::{AccountRepositoryTrait, AccountServiceTrait};
