//! Customer repository trait.

use async_trait::async_trait;

use super::customers_model::{Customer, CustomerId, NewCustomer};
use crate::errors::Result;

/// Trait defining the contract for Customer repository operations.
///
/// Implementations load customers together with every account they own.
#[async_trait]
pub trait CustomerRepositoryTrait: Send + Sync {
    /// Retrieves a customer and its accounts, or `None` if no such customer exists.
    fn get_by_id(&self, customer_id: CustomerId) -> Result<Option<Customer>>;

    /// Lists all customers ordered by identity.
    fn list(&self) -> Result<Vec<Customer>>;

    /// Creates a customer with no accounts. Identity is assigned by storage.
    async fn create(&self, new_customer: NewCustomer) -> Result<Customer>;
}
