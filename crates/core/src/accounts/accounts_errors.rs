use thiserror::Error;

/// Custom error type for account-related operations.
#[derive(Debug, Error)]
pub enum AccountError {
    #[error("No active account found: {0}")]
    NotFound(String),
    #[error("Account already linked for reference {0}")]
    AlreadyLinked(String),
}
