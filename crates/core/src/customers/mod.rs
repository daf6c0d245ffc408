//! Customers module - domain models and repository trait.

mod customers_model;
mod customers_model_tests;
mod customers_traits;

pub use customers_model::{Customer, CustomerId, NewCustomer};
pub use customers_traits::CustomerRepositoryTrait;
