//! Account repository and service traits.
//!
//! These traits define the contract for account operations without any
//! database-specific types, allowing for different storage implementations.

use async_trait::async_trait;

use super::accounts_model::{Account, AccountId};
use super::accounts_responses::{
    CloseAccountResponse, CreateCustomerResponse, OpenAccountResponse, TransactionResponse,
};
use crate::customers::{Customer, CustomerId, NewCustomer};
use crate::errors::Result;
use crate::validation::{AccountTransactionRequest, CloseAccountRequest, OpenAccountRequest};

/// Trait defining the contract for Account repository operations.
///
/// Each write runs in its own transaction. The trait is database-agnostic;
/// storage-specific details are handled by concrete implementations.
#[async_trait]
pub trait AccountRepositoryTrait: Send + Sync {
    /// Retrieves an account only if it is owned by `customer_id`.
    ///
    /// An account that exists under another owner is reported as `None`,
    /// exactly like one that does not exist.
    fn get_for_customer(
        &self,
        account_id: AccountId,
        customer_id: CustomerId,
    ) -> Result<Option<Account>>;

    /// Persists a newly opened account and returns it with its assigned identity.
    async fn create(&self, account: Account) -> Result<Account>;

    /// Persists the balance and status of an existing account.
    ///
    /// The write only succeeds if the stored version still matches
    /// `account.version()`; otherwise it fails with
    /// `DatabaseError::ConcurrentModification`. Returns the account with its new version.
    async fn update(&self, account: Account) -> Result<Account>;
}

/// Trait defining the contract for Account service operations.
///
/// Domain failures (not found, insufficient funds, ...) are returned as
/// response variants inside `Ok`. `Err` is reserved for infrastructure failures.
#[async_trait]
pub trait AccountServiceTrait: Send + Sync {
    /// Opens an account for an existing customer.
    async fn open_account(&self, request: OpenAccountRequest) -> Result<OpenAccountResponse>;

    /// Deposits into an account owned by the requesting customer.
    async fn deposit(&self, request: AccountTransactionRequest) -> Result<TransactionResponse>;

    /// Withdraws from an account owned by the requesting customer.
    async fn withdraw(&self, request: AccountTransactionRequest) -> Result<TransactionResponse>;

    /// Closes an account owned by the requesting customer.
    async fn close_account(&self, request: CloseAccountRequest) -> Result<CloseAccountResponse>;

    /// Creates a customer with no accounts.
    async fn create_customer(&self, new_customer: NewCustomer) -> Result<CreateCustomerResponse>;

    /// Retrieves a customer with its accounts.
    fn get_customer(&self, customer_id: CustomerId) -> Result<Option<Customer>>;

    /// Lists all customers with their accounts.
    fn list_customers(&self) -> Result<Vec<Customer>>;

    /// Retrieves an account owned by `customer_id`.
    fn get_account(&self, customer_id: CustomerId, account_id: AccountId)
        -> Result<Option<Account>>;
}
