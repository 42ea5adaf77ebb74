use async_trait::async_trait;

use super::accounts_model::{LinkedAccount, NewLinkedAccount};
use crate::errors::Result;

/// Trait defining the contract for linked-account repository operations.
#[async_trait]
pub trait AccountRepositoryTrait: Send + Sync {
    /// Inserts a new active linked account.
    async fn insert(&self, new_account: NewLinkedAccount) -> Result<LinkedAccount>;

    /// Finds the active account for (owner, reference, provider source),
    /// if any.
    fn find_active(
        &self,
        owner_id: &str,
        provider_ref: &str,
        provider_source: &str,
    ) -> Result<Option<LinkedAccount>>;

    /// Lists all accounts (active and inactive) for the scope, newest first.
    fn list(&self, owner_id: &str, provider_source: &str) -> Result<Vec<LinkedAccount>>;

    /// Lists only active accounts for the scope, newest first.
    fn list_active(&self, owner_id: &str, provider_source: &str) -> Result<Vec<LinkedAccount>>;

    /// Flips an active account to inactive. Returns the number of rows
    /// affected (0 when no active match exists for this owner).
    async fn deactivate(&self, owner_id: &str, account_id: &str) -> Result<usize>;
}

/// Trait defining the contract for Account Registry operations.
#[async_trait]
pub trait AccountServiceTrait: Send + Sync {
    async fn link_account(
        &self,
        owner_id: &str,
        provider_ref: &str,
        display_name: &str,
    ) -> Result<LinkedAccount>;

    fn list_accounts(&self, owner_id: &str, provider_source: &str) -> Result<Vec<LinkedAccount>>;

    async fn deactivate_account(&self, owner_id: &str, account_id: &str) -> Result<()>;
}
