//! Teller Core - Domain entities, amount rules, validators, and services.
//!
//! This crate contains the business logic for the Teller banking service.
//! It is database-agnostic and defines traits that are implemented
//! by the `storage-sqlite` crate.

pub mod accounts;
pub mod constants;
pub mod customers;
pub mod errors;
pub mod money;
pub mod policy;
pub mod validation;

// Re-export the types every caller needs
pub use accounts::{AccountService, AccountServiceTrait};
pub use policy::TransactionPolicy;

// Re-export error types
pub use errors::Error;
pub use errors::Result;
