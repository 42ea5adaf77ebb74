use async_trait::async_trait;

use super::categories_model::{Category, NewCategory};
use crate::categorization::Direction;
use crate::errors::Result;

/// Trait defining the contract for category repository operations.
#[async_trait]
pub trait CategoryRepositoryTrait: Send + Sync {
    /// Case-insensitive partial-name match against the owner's categories
    /// and the system-wide ones. Owner-scoped hits take precedence.
    fn find_matching(&self, owner_id: &str, name: &str) -> Result<Option<Category>>;

    /// Creates a category. The storage layer resolves a normalized-name
    /// conflict by returning the existing row instead of failing.
    async fn create(&self, new_category: NewCategory) -> Result<Category>;
}

/// Trait defining the contract for the Category Resolver.
#[async_trait]
pub trait CategoryServiceTrait: Send + Sync {
    /// Returns the canonical category record for a classifier category id,
    /// creating an owner-scoped one when no match exists.
    async fn ensure_category(
        &self,
        owner_id: &str,
        category_id: &str,
        direction: Direction,
    ) -> Result<Category>;
}
