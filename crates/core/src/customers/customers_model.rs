//! Customer domain models.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::accounts::{Account, AccountError, AccountType};
use crate::constants::{fields, MAX_CUSTOMER_NAME_LENGTH};
use crate::validation::ValidationErrors;

/// Identity assigned to a customer by the persistence layer.
pub type CustomerId = i32;

/// Domain model representing a customer and the accounts it owns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    id: CustomerId,
    name: String,
    accounts: Vec<Account>,
}

impl Customer {
    /// Rebuilds a customer from stored state.
    pub fn new(id: CustomerId, name: String, accounts: Vec<Account>) -> Self {
        Self { id, name, accounts }
    }

    pub fn id(&self) -> CustomerId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn accounts(&self) -> &[Account] {
        &self.accounts
    }

    /// True if any owned account is a savings account.
    pub fn has_savings_account(&self) -> bool {
        self.accounts
            .iter()
            .any(|account| account.account_type() == AccountType::Savings)
    }

    /// Opens a new account owned by this customer and appends it to the
    /// owned collection.
    ///
    /// A checking account requires an existing savings account. The minimum
    /// initial deposit is a configurable policy and is not enforced here.
    pub fn open_account(
        &mut self,
        account_type: AccountType,
        initial_deposit: Decimal,
    ) -> Result<&Account, AccountError> {
        if account_type == AccountType::Checking && !self.has_savings_account() {
            return Err(AccountError::SavingsAccountRequired);
        }

        self.accounts
            .push(Account::open(self.id, account_type, initial_deposit));
        Ok(&self.accounts[self.accounts.len() - 1])
    }
}

/// Input model for creating a new customer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewCustomer {
    pub name: String,
}

impl NewCustomer {
    /// Validates the new customer data.
    pub fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();

        if self.name.trim().is_empty() {
            errors.add(fields::NAME, "Customer name cannot be empty.");
        }
        if self.name.chars().count() > MAX_CUSTOMER_NAME_LENGTH {
            errors.add(
                fields::NAME,
                format!(
                    "There's a {} character limit on customer name. Please shorten the name.",
                    MAX_CUSTOMER_NAME_LENGTH
                ),
            );
        }

        errors.into_result()
    }
}
