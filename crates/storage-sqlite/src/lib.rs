//! SQLite storage implementation for Teller.
//!
//! This crate provides all database-related functionality using Diesel ORM with SQLite.
//! It implements the repository traits defined in `teller-core` and contains:
//! - Database connection pooling and management
//! - Diesel migrations
//! - Repository implementations for customers and accounts
//! - Database-specific model types (with Diesel derives)
//!
//! # Architecture
//!
//! This crate is the only place in the application where Diesel dependencies exist.
//! The core crate is database-agnostic and works with traits.
//!
//! ```text
//!          core (domain)
//!                │
//!                ▼
//!      storage-sqlite (this crate)
//!                │
//!                ▼
//!            SQLite DB
//! ```
//!
//! All writes go through a single writer task ([`WriteHandle`]); reads use the pool.

pub mod db;
pub mod errors;
pub mod schema;
pub mod seed;

// Repository implementations
pub mod accounts;
pub mod customers;

// Re-export database utilities
pub use db::{
    create_pool, get_connection, init, run_migrations, spawn_writer, DbConnection, DbPool,
    WriteHandle,
};

// Re-export storage errors and conversion helpers
pub use errors::{IntoCore, StorageError};

pub use accounts::AccountRepository;
pub use customers::CustomerRepository;
pub use seed::seed_demo_data;

// Re-export from teller-core for convenience
pub use teller_core::errors::{DatabaseError, Error, Result};
