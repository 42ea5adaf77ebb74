use async_trait::async_trait;
use log::{debug, info};
use std::sync::Arc;

use super::accounts_errors::AccountError;
use super::accounts_model::{AccountKind, LinkedAccount, NewLinkedAccount};
use super::accounts_traits::{AccountRepositoryTrait, AccountServiceTrait};
use crate::constants::DEFAULT_PROVIDER_SOURCE;
use crate::errors::Result;

/// Service for managing linked external accounts (the Account Registry).
pub struct AccountService {
    repository: Arc<dyn AccountRepositoryTrait>,
    provider_source: String,
}

impl AccountService {
    /// Creates a new AccountService bound to the default provider source.
    pub fn new(repository: Arc<dyn AccountRepositoryTrait>) -> Self {
        Self::with_provider_source(repository, DEFAULT_PROVIDER_SOURCE)
    }

    pub fn with_provider_source(
        repository: Arc<dyn AccountRepositoryTrait>,
        provider_source: impl Into<String>,
    ) -> Self {
        Self {
            repository,
            provider_source: provider_source.into(),
        }
    }
}

#[async_trait]
impl AccountServiceTrait for AccountService {
    /// Links a new external account after validating the reference and
    /// rejecting duplicates of an active link.
    async fn link_account(
        &self,
        owner_id: &str,
        provider_ref: &str,
        display_name: &str,
    ) -> Result<LinkedAccount> {
        let new_account = NewLinkedAccount {
            owner_id: owner_id.to_string(),
            provider_ref: provider_ref.to_string(),
            display_name: display_name.trim().to_string(),
            account_kind: AccountKind::MobileMoney,
            provider_source: self.provider_source.clone(),
        };
        new_account.validate()?;

        if self
            .repository
            .find_active(owner_id, provider_ref, &self.provider_source)?
            .is_some()
        {
            return Err(AccountError::AlreadyLinked(provider_ref.to_string()).into());
        }

        let account = self.repository.insert(new_account).await?;
        info!(
            "Linked account {} for provider {}",
            account.id, account.provider_source
        );
        Ok(account)
    }

    /// Lists all accounts for the scope, newest first.
    fn list_accounts(&self, owner_id: &str, provider_source: &str) -> Result<Vec<LinkedAccount>> {
        self.repository.list(owner_id, provider_source)
    }

    /// Soft-deactivates an account. Inactive accounts are kept for history
    /// and never hard-deleted.
    async fn deactivate_account(&self, owner_id: &str, account_id: &str) -> Result<()> {
        let affected = self.repository.deactivate(owner_id, account_id).await?;
        if affected == 0 {
            return Err(AccountError::NotFound(account_id.to_string()).into());
        }
        debug!("Deactivated account {}", account_id);
        Ok(())
    }
}
