use async_trait::async_trait;

use super::sync_model::{NewSyncLog, SyncLogEntry, SyncOutcome, SyncStatus};
use crate::errors::Result;

/// Trait defining the contract for the sync audit log store.
#[async_trait]
pub trait SyncLogRepositoryTrait: Send + Sync {
    /// Opens a new entry with status InProgress and a zero count.
    async fn create(&self, new_log: NewSyncLog) -> Result<SyncLogEntry>;

    /// One-shot terminal update: only an InProgress entry can be finalized.
    async fn finalize(
        &self,
        log_id: &str,
        status: SyncStatus,
        transactions_synced: i32,
        error_message: Option<String>,
    ) -> Result<()>;

    fn get(&self, log_id: &str) -> Result<Option<SyncLogEntry>>;
}

/// Trait defining the contract for the sync orchestrator.
#[async_trait]
pub trait SyncServiceTrait: Send + Sync {
    /// Runs one end-to-end sync for the owner.
    async fn sync_transactions(&self, owner_id: &str) -> Result<SyncOutcome>;
}
