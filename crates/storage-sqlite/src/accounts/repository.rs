use async_trait::async_trait;
use diesel::prelude::*;
use std::sync::Arc;

use crate::db::{get_connection, DbPool};
use crate::errors::{is_unique_violation, IntoCore, StorageError};
use crate::schema::linked_accounts;
use crate::schema::linked_accounts::dsl::*;

use super::model::LinkedAccountDB;
use sikasync_core::accounts::{AccountError, AccountRepositoryTrait, LinkedAccount, NewLinkedAccount};
use sikasync_core::errors::Result;

/// Repository for managing linked-account data in the database
pub struct AccountRepository {
    pool: Arc<DbPool>,
}

impl AccountRepository {
    pub fn new(pool: Arc<DbPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AccountRepositoryTrait for AccountRepository {
    /// Inserts a new active link. The partial unique index on active rows
    /// backstops a concurrent duplicate link, surfaced as AlreadyLinked.
    async fn insert(&self, new_account: NewLinkedAccount) -> Result<LinkedAccount> {
        let mut conn = get_connection(&self.pool)?;

        let account_db: LinkedAccountDB = new_account.into();
        let inserted = diesel::insert_into(linked_accounts::table)
            .values(&account_db)
            .get_result::<LinkedAccountDB>(&mut conn)
            .map_err(|e| -> sikasync_core::Error {
                if is_unique_violation(&e) {
                    AccountError::AlreadyLinked(account_db.provider_ref.clone()).into()
                } else {
                    StorageError::from(e).into()
                }
            })?;

        Ok(inserted.into())
    }

    fn find_active(
        &self,
        owner: &str,
        reference: &str,
        source: &str,
    ) -> Result<Option<LinkedAccount>> {
        let mut conn = get_connection(&self.pool)?;

        let result = linked_accounts
            .filter(owner_id.eq(owner))
            .filter(provider_ref.eq(reference))
            .filter(provider_source.eq(source))
            .filter(is_active.eq(true))
            .select(LinkedAccountDB::as_select())
            .first::<LinkedAccountDB>(&mut conn)
            .optional()
            .into_core()?;

        Ok(result.map(LinkedAccount::from))
    }

    fn list(&self, owner: &str, source: &str) -> Result<Vec<LinkedAccount>> {
        let mut conn = get_connection(&self.pool)?;

        let results = linked_accounts
            .filter(owner_id.eq(owner))
            .filter(provider_source.eq(source))
            .select(LinkedAccountDB::as_select())
            .order(created_at.desc())
            .load::<LinkedAccountDB>(&mut conn)
            .into_core()?;

        Ok(results.into_iter().map(LinkedAccount::from).collect())
    }

    fn list_active(&self, owner: &str, source: &str) -> Result<Vec<LinkedAccount>> {
        let mut conn = get_connection(&self.pool)?;

        let results = linked_accounts
            .filter(owner_id.eq(owner))
            .filter(provider_source.eq(source))
            .filter(is_active.eq(true))
            .select(LinkedAccountDB::as_select())
            .order(created_at.desc())
            .load::<LinkedAccountDB>(&mut conn)
            .into_core()?;

        Ok(results.into_iter().map(LinkedAccount::from).collect())
    }

    async fn deactivate(&self, owner: &str, account_id_param: &str) -> Result<usize> {
        let mut conn = get_connection(&self.pool)?;

        let affected = diesel::update(
            linked_accounts
                .filter(owner_id.eq(owner))
                .filter(id.eq(account_id_param))
                .filter(is_active.eq(true)),
        )
        .set(is_active.eq(false))
        .execute(&mut conn)
        .into_core()?;

        Ok(affected)
    }
}
