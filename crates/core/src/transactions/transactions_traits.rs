use async_trait::async_trait;

use super::transactions_model::{CanonicalTransaction, NewTransaction, TransactionUpdate};
use crate::errors::Result;

/// Trait defining the contract for canonical-transaction repository
/// operations. The (owner, external id) lookup is the dedup gate.
#[async_trait]
pub trait TransactionRepositoryTrait: Send + Sync {
    /// Looks up the canonical row for a provider external id, if any.
    fn find_by_external_id(
        &self,
        owner_id: &str,
        external_id: &str,
    ) -> Result<Option<CanonicalTransaction>>;

    /// Inserts the first canonical row for an external id. Storage backends
    /// enforce the (owner, external id) unique constraint and converge a
    /// concurrent duplicate insert onto one row.
    async fn insert(&self, new_transaction: NewTransaction) -> Result<CanonicalTransaction>;

    /// Updates the mutable fields of an existing row in place.
    async fn update(
        &self,
        owner_id: &str,
        external_id: &str,
        update: TransactionUpdate,
    ) -> Result<CanonicalTransaction>;

    /// Number of canonical rows for an owner.
    fn count_for_owner(&self, owner_id: &str) -> Result<i64>;
}
