//! Policy module - configured transaction thresholds.

mod policy_model;
mod policy_model_tests;

pub use policy_model::TransactionPolicy;
