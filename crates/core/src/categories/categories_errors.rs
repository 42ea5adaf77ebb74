use thiserror::Error;

/// Custom error type for category-related operations.
#[derive(Debug, Error)]
pub enum CategoryError {
    #[error("Category not found: {0}")]
    NotFound(String),
}
