//! Database model for sync audit log entries.

use chrono::NaiveDateTime;
use diesel::prelude::*;
use serde::{Deserialize, Serialize};

use sikasync_core::sync::{NewSyncLog, SyncLogEntry, SyncStatus};

/// Database model for sync audit log entries
#[derive(
    Queryable, Identifiable, Insertable, Selectable, PartialEq, Serialize, Deserialize, Debug, Clone,
)]
#[diesel(table_name = crate::schema::sync_logs)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct SyncLogDB {
    pub id: String,
    pub owner_id: String,
    pub account_id: String,
    pub sync_type: String,
    pub status: String,
    pub transactions_synced: i32,
    pub error_message: Option<String>,
    pub started_at: NaiveDateTime,
    pub completed_at: Option<NaiveDateTime>,
}

impl From<SyncLogDB> for SyncLogEntry {
    fn from(db: SyncLogDB) -> Self {
        Self {
            id: db.id,
            owner_id: db.owner_id,
            account_id: db.account_id,
            sync_type: db.sync_type,
            status: SyncStatus::from_str(&db.status),
            transactions_synced: db.transactions_synced,
            error_message: db.error_message,
            started_at: db.started_at,
            completed_at: db.completed_at,
        }
    }
}

impl From<NewSyncLog> for SyncLogDB {
    fn from(domain: NewSyncLog) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            owner_id: domain.owner_id,
            account_id: domain.account_id,
            sync_type: domain.sync_type,
            status: SyncStatus::InProgress.as_str().to_string(),
            transactions_synced: 0,
            error_message: None,
            started_at: chrono::Utc::now().naive_utc(),
            completed_at: None,
        }
    }
}
