//! Core error types for sikasync.
//!
//! This module defines database-agnostic error types. Storage-specific errors
//! (from Diesel, SQLite, etc.) are converted to these types by the storage
//! layer. Every error maps to a stable machine-readable code via
//! [`Error::code`], which is what crosses the public result envelope.

use thiserror::Error;

use crate::accounts::AccountError;
use crate::categories::CategoryError;
use crate::providers::ProviderError;
use crate::sync::SyncError;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for the sync application.
///
/// Database-specific errors are wrapped in string form to keep this type
/// database-agnostic.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Database operation failed: {0}")]
    Database(#[from] DatabaseError),

    #[error("Input validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error("Account error: {0}")]
    Account(#[from] AccountError),

    #[error("Provider error: {0}")]
    Provider(#[from] ProviderError),

    #[error("Sync error: {0}")]
    Sync(#[from] SyncError),

    #[error("Category error: {0}")]
    Category(#[from] CategoryError),

    #[error("Not authenticated: {0}")]
    Unauthenticated(String),

    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

impl Error {
    /// Stable machine-readable code for this error, used by the result
    /// envelope. Codes are part of the public contract and must not change.
    pub fn code(&self) -> &'static str {
        match self {
            Error::Database(_) => "DATABASE_ERROR",
            Error::Validation(_) => "VALIDATION_ERROR",
            Error::Account(AccountError::NotFound(_)) => "ACCOUNT_NOT_FOUND",
            Error::Account(AccountError::AlreadyLinked(_)) => "ACCOUNT_ALREADY_LINKED",
            Error::Provider(_) => "PROVIDER_UNAVAILABLE",
            Error::Sync(SyncError::NoActiveAccount) => "NO_ACTIVE_ACCOUNT",
            Error::Sync(SyncError::ProviderUnavailable(_)) => "PROVIDER_UNAVAILABLE",
            Error::Sync(SyncError::Failed(_)) => "SYNC_FAILED",
            Error::Category(_) => "CATEGORY_NOT_FOUND",
            Error::Unauthenticated(_) => "UNAUTHENTICATED",
            Error::Unexpected(_) => "INTERNAL_ERROR",
        }
    }
}

/// Database-agnostic error type for storage operations.
///
/// This enum uses `String` for all error details, allowing the storage layer
/// to convert storage-specific errors (Diesel, SQLite, etc.) into this format.
#[derive(Error, Debug)]
pub enum DatabaseError {
    /// Failed to establish a database connection.
    #[error("Failed to connect to database: {0}")]
    ConnectionFailed(String),

    /// Failed to create or configure the connection pool.
    #[error("Failed to create database pool: {0}")]
    PoolCreationFailed(String),

    /// A database query failed to execute.
    #[error("Database query failed: {0}")]
    QueryFailed(String),

    /// The requested record was not found.
    #[error("Record not found: {0}")]
    NotFound(String),

    /// A unique constraint was violated (e.g., duplicate key).
    #[error("Unique constraint violation: {0}")]
    UniqueViolation(String),

    /// A foreign key constraint was violated.
    #[error("Foreign key violation: {0}")]
    ForeignKeyViolation(String),

    /// A database transaction failed.
    #[error("Transaction failed: {0}")]
    TransactionFailed(String),

    /// Database migration failed.
    #[error("Database migration failed: {0}")]
    MigrationFailed(String),

    /// Internal/unexpected database error.
    #[error("Internal database error: {0}")]
    Internal(String),
}

/// Validation error for caller-supplied input.
///
/// Carries the offending field, a human-readable message, and the rejected
/// value so callers can surface precise feedback.
#[derive(Error, Debug, Clone)]
#[error("{field}: {message}")]
pub struct ValidationError {
    pub field: String,
    pub message: String,
    pub value: String,
}

impl ValidationError {
    pub fn new(
        field: impl Into<String>,
        message: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
            value: value.into(),
        }
    }
}

impl From<Error> for String {
    fn from(err: Error) -> Self {
        err.to_string()
    }
}
