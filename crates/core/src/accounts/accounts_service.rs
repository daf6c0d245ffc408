use log::{debug, info, warn};
use std::sync::Arc;

use super::accounts_model::{Account, AccountError, AccountId};
use super::accounts_responses::{
    CloseAccountResponse, CreateCustomerResponse, OpenAccountResponse, TransactionResponse,
};
use super::accounts_traits::{AccountRepositoryTrait, AccountServiceTrait};
use crate::constants::fields;
use crate::customers::{Customer, CustomerId, CustomerRepositoryTrait, NewCustomer};
use crate::errors::{Error, Result};
use crate::policy::TransactionPolicy;
use crate::validation::{
    AccountTransactionRequest, AccountTransactionValidator, CloseAccountRequest,
    OpenAccountRequest, OpenAccountRequestValidator, TransactionKind, ValidationErrors,
};

/// Service orchestrating validation, lookup, entity mutation, and persistence
/// for account operations.
pub struct AccountService {
    customer_repository: Arc<dyn CustomerRepositoryTrait>,
    account_repository: Arc<dyn AccountRepositoryTrait>,
    policy: TransactionPolicy,
    open_account_validator: OpenAccountRequestValidator,
    transaction_validator: AccountTransactionValidator,
}

impl AccountService {
    /// Creates a new AccountService instance.
    ///
    /// Validators are derived from `policy` once, here.
    pub fn new(
        customer_repository: Arc<dyn CustomerRepositoryTrait>,
        account_repository: Arc<dyn AccountRepositoryTrait>,
        policy: TransactionPolicy,
    ) -> Self {
        Self {
            customer_repository,
            account_repository,
            open_account_validator: OpenAccountRequestValidator::new(&policy),
            transaction_validator: AccountTransactionValidator::new(&policy),
            policy,
        }
    }

    pub fn policy(&self) -> &TransactionPolicy {
        &self.policy
    }

    async fn apply_transaction(
        &self,
        kind: TransactionKind,
        request: AccountTransactionRequest,
    ) -> Result<TransactionResponse> {
        debug!(
            "{:?} of {} requested on account {} for customer {}",
            kind, request.amount, request.account_id, request.customer_id
        );

        if let Err(errors) = self.transaction_validator.validate(kind, &request) {
            warn!("{:?} request rejected: {}", kind, errors);
            return Ok(TransactionResponse::ValidationFailed { errors });
        }

        let Some(mut account) = self
            .account_repository
            .get_for_customer(request.account_id, request.customer_id)?
        else {
            return Ok(TransactionResponse::AccountNotFound {
                account_id: request.account_id,
            });
        };

        let outcome = match kind {
            TransactionKind::Deposit => account.make_deposit(request.amount),
            TransactionKind::Withdrawal => account.make_withdrawal(request.amount),
        };
        if let Err(err) = outcome {
            warn!("{:?} on account {} refused: {}", kind, request.account_id, err);
            return transaction_failure(request.account_id, err);
        }

        let saved = self.account_repository.update(account).await?;
        Ok(TransactionResponse::Completed {
            customer_id: saved.customer_id(),
            account_id: persisted_id(&saved)?,
            new_balance: saved.balance(),
        })
    }
}

#[async_trait::async_trait]
impl AccountServiceTrait for AccountService {
    async fn open_account(&self, request: OpenAccountRequest) -> Result<OpenAccountResponse> {
        debug!(
            "Opening {} account for customer {} with initial deposit {}",
            request.account_type, request.customer_id, request.initial_deposit
        );

        if let Err(errors) = self.open_account_validator.validate(&request) {
            warn!("Open account request rejected: {}", errors);
            return Ok(OpenAccountResponse::ValidationFailed { errors });
        }

        let Some(mut customer) = self.customer_repository.get_by_id(request.customer_id)? else {
            return Ok(OpenAccountResponse::CustomerNotFound {
                customer_id: request.customer_id,
            });
        };

        let account = match customer.open_account(request.account_type, request.initial_deposit)
        {
            Ok(account) => account.clone(),
            Err(AccountError::SavingsAccountRequired) => {
                return Ok(OpenAccountResponse::SavingsAccountRequired {
                    customer_id: request.customer_id,
                });
            }
            Err(err) => return Err(Error::Unexpected(err.to_string())),
        };

        let saved = self.account_repository.create(account).await?;
        let account_id = persisted_id(&saved)?;
        info!(
            "Opened {} account {} for customer {}",
            saved.account_type(),
            account_id,
            saved.customer_id()
        );

        Ok(OpenAccountResponse::Opened {
            customer_id: saved.customer_id(),
            account_id,
        })
    }

    async fn deposit(&self, request: AccountTransactionRequest) -> Result<TransactionResponse> {
        self.apply_transaction(TransactionKind::Deposit, request)
            .await
    }

    async fn withdraw(&self, request: AccountTransactionRequest) -> Result<TransactionResponse> {
        self.apply_transaction(TransactionKind::Withdrawal, request)
            .await
    }

    async fn close_account(&self, request: CloseAccountRequest) -> Result<CloseAccountResponse> {
        debug!(
            "Closing account {} for customer {}",
            request.account_id, request.customer_id
        );

        let Some(mut account) = self
            .account_repository
            .get_for_customer(request.account_id, request.customer_id)?
        else {
            return Ok(CloseAccountResponse::AccountNotFound {
                account_id: request.account_id,
            });
        };

        if !account.balance().is_zero() {
            return Ok(CloseAccountResponse::AccountHasFundedBalance {
                account_id: request.account_id,
                balance: account.balance(),
            });
        }

        match account.close() {
            Ok(()) => {}
            Err(AccountError::AlreadyClosed) => {
                return Ok(CloseAccountResponse::AccountAlreadyClosed {
                    account_id: request.account_id,
                });
            }
            Err(AccountError::FundedBalance(balance)) => {
                return Ok(CloseAccountResponse::AccountHasFundedBalance {
                    account_id: request.account_id,
                    balance,
                });
            }
            Err(err) => return Err(Error::Unexpected(err.to_string())),
        }

        let saved = self.account_repository.update(account).await?;
        info!("Closed account {}", request.account_id);

        Ok(CloseAccountResponse::Closed {
            customer_id: saved.customer_id(),
            account_id: persisted_id(&saved)?,
            final_status: saved.status(),
        })
    }

    async fn create_customer(&self, new_customer: NewCustomer) -> Result<CreateCustomerResponse> {
        if let Err(errors) = new_customer.validate() {
            return Ok(CreateCustomerResponse::ValidationFailed { errors });
        }

        let customer = self.customer_repository.create(new_customer).await?;
        info!("Created customer {}", customer.id());
        Ok(CreateCustomerResponse::Created { customer })
    }

    fn get_customer(&self, customer_id: CustomerId) -> Result<Option<Customer>> {
        self.customer_repository.get_by_id(customer_id)
    }

    fn list_customers(&self) -> Result<Vec<Customer>> {
        self.customer_repository.list()
    }

    fn get_account(
        &self,
        customer_id: CustomerId,
        account_id: AccountId,
    ) -> Result<Option<Account>> {
        self.account_repository
            .get_for_customer(account_id, customer_id)
    }
}

/// Translates an entity refusal on a deposit or withdrawal into its response variant.
fn transaction_failure(account_id: AccountId, err: AccountError) -> Result<TransactionResponse> {
    match err {
        AccountError::InsufficientFunds { balance, .. } => {
            Ok(TransactionResponse::InsufficientFunds {
                account_id,
                balance,
            })
        }
        AccountError::AccountClosed => Ok(TransactionResponse::AccountClosed { account_id }),
        AccountError::InvalidAmount(_) => {
            let mut errors = ValidationErrors::new();
            errors.add(fields::AMOUNT, "Amount must be greater than 0.");
            Ok(TransactionResponse::ValidationFailed { errors })
        }
        other => Err(Error::Unexpected(other.to_string())),
    }
}

fn persisted_id(account: &Account) -> Result<AccountId> {
    account
        .id()
        .ok_or_else(|| Error::Repository("Stored account was not assigned an id".to_string()))
}
