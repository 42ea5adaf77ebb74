use async_trait::async_trait;
use diesel::prelude::*;
use std::sync::Arc;

use crate::db::{get_connection, DbPool};
use crate::errors::IntoCore;
use crate::schema::sync_logs;
use crate::schema::sync_logs::dsl::*;

use super::model::SyncLogDB;
use sikasync_core::errors::{DatabaseError, Result};
use sikasync_core::sync::{NewSyncLog, SyncLogEntry, SyncLogRepositoryTrait, SyncStatus};

/// Repository for the sync audit log
pub struct SyncLogRepository {
    pool: Arc<DbPool>,
}

impl SyncLogRepository {
    pub fn new(pool: Arc<DbPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SyncLogRepositoryTrait for SyncLogRepository {
    async fn create(&self, new_log: NewSyncLog) -> Result<SyncLogEntry> {
        let mut conn = get_connection(&self.pool)?;

        let log_db: SyncLogDB = new_log.into();
        let inserted = diesel::insert_into(sync_logs::table)
            .values(&log_db)
            .get_result::<SyncLogDB>(&mut conn)
            .into_core()?;

        Ok(inserted.into())
    }

    /// The status guard in the filter makes finalization one-shot: a second
    /// attempt matches no rows.
    async fn finalize(
        &self,
        log_id: &str,
        final_status: SyncStatus,
        synced: i32,
        message: Option<String>,
    ) -> Result<()> {
        let mut conn = get_connection(&self.pool)?;

        let affected = diesel::update(
            sync_logs
                .filter(id.eq(log_id))
                .filter(status.eq(SyncStatus::InProgress.as_str())),
        )
        .set((
            status.eq(final_status.as_str()),
            transactions_synced.eq(synced),
            error_message.eq(message),
            completed_at.eq(Some(chrono::Utc::now().naive_utc())),
        ))
        .execute(&mut conn)
        .into_core()?;

        if affected == 0 {
            return Err(DatabaseError::NotFound(format!(
                "sync log {} is not in progress",
                log_id
            ))
            .into());
        }

        Ok(())
    }

    fn get(&self, log_id: &str) -> Result<Option<SyncLogEntry>> {
        let mut conn = get_connection(&self.pool)?;

        let result = sync_logs
            .filter(id.eq(log_id))
            .select(SyncLogDB::as_select())
            .first::<SyncLogDB>(&mut conn)
            .optional()
            .into_core()?;

        Ok(result.map(SyncLogEntry::from))
    }
}
