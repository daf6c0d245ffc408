//! SQLite storage implementation for customers.

mod model;
mod repository;

pub use model::{CustomerDB, NewCustomerDB};
pub use repository::CustomerRepository;
