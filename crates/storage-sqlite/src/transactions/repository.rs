use async_trait::async_trait;
use diesel::prelude::*;
use std::sync::Arc;

use crate::db::{get_connection, DbPool};
use crate::errors::IntoCore;
use crate::schema::transactions;
use crate::schema::transactions::dsl::*;

use super::model::{TransactionDB, TransactionUpdateDB};
use sikasync_core::errors::Result;
use sikasync_core::transactions::{
    CanonicalTransaction, NewTransaction, TransactionRepositoryTrait, TransactionUpdate,
};

/// Repository for managing canonical transactions in the database
pub struct TransactionRepository {
    pool: Arc<DbPool>,
}

impl TransactionRepository {
    pub fn new(pool: Arc<DbPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TransactionRepositoryTrait for TransactionRepository {
    fn find_by_external_id(
        &self,
        owner: &str,
        external: &str,
    ) -> Result<Option<CanonicalTransaction>> {
        let mut conn = get_connection(&self.pool)?;

        let result = transactions
            .filter(owner_id.eq(owner))
            .filter(external_id.eq(external))
            .select(TransactionDB::as_select())
            .first::<TransactionDB>(&mut conn)
            .optional()
            .into_core()?;

        Ok(result.map(CanonicalTransaction::from))
    }

    /// Upsert on the (owner, external id) unique constraint: a concurrent
    /// duplicate insert converges onto one row instead of failing the run.
    async fn insert(&self, new_transaction: NewTransaction) -> Result<CanonicalTransaction> {
        let mut conn = get_connection(&self.pool)?;

        let row: TransactionDB = new_transaction.into();
        let inserted = diesel::insert_into(transactions::table)
            .values(&row)
            .on_conflict((owner_id, external_id))
            .do_update()
            .set((
                provider_status.eq(row.provider_status.clone()),
                financial_transaction_id.eq(row.financial_transaction_id.clone()),
                category_id.eq(row.category_id.clone()),
                direction.eq(row.direction.clone()),
                confidence.eq(row.confidence),
                merchant_name.eq(row.merchant_name.clone()),
                updated_at.eq(row.updated_at),
            ))
            .get_result::<TransactionDB>(&mut conn)
            .into_core()?;

        Ok(inserted.into())
    }

    async fn update(
        &self,
        owner: &str,
        external: &str,
        update: TransactionUpdate,
    ) -> Result<CanonicalTransaction> {
        let mut conn = get_connection(&self.pool)?;

        let changeset: TransactionUpdateDB = update.into();
        let updated = diesel::update(
            transactions
                .filter(owner_id.eq(owner))
                .filter(external_id.eq(external)),
        )
        .set(&changeset)
        .get_result::<TransactionDB>(&mut conn)
        .into_core()?;

        Ok(updated.into())
    }

    fn count_for_owner(&self, owner: &str) -> Result<i64> {
        let mut conn = get_connection(&self.pool)?;

        transactions
            .filter(owner_id.eq(owner))
            .count()
            .get_result::<i64>(&mut conn)
            .into_core()
    }
}
