//! SQLite storage implementation for sikasync.
//!
//! This crate provides all database-related functionality using Diesel ORM
//! with SQLite. It implements the repository traits defined in
//! `sikasync-core` and contains:
//! - Database connection pooling and management
//! - Diesel migrations
//! - Repository implementations for all domain entities
//! - Database-specific model types (with Diesel derives)
//!
//! This crate is the only place in the application where Diesel dependencies
//! exist. `sikasync-core` is database-agnostic and works with traits.
//!
//! Uniqueness guarantees live here, not in the services: partial unique
//! indexes keep one active link per provider reference, one canonical
//! transaction per (owner, external id) and one category name per scope.

pub mod db;
pub mod errors;
pub mod schema;

// Repository implementations
pub mod accounts;
pub mod categories;
pub mod sync_logs;
pub mod transactions;

// Re-export database utilities
pub use db::{create_pool, get_connection, get_db_path, init, run_migrations, DbConnection, DbPool};

// Re-export storage errors and conversion helpers
pub use errors::{IntoCore, StorageError};

// Re-export from sikasync-core for convenience
pub use sikasync_core::errors::{DatabaseError, Error, Result};
