use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Run state machine: `InProgress -> {Success, Failed}`, terminal exactly
/// once. Success covers runs that completed with item errors attached;
/// Failed is reserved for run-level provider errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SyncStatus {
    InProgress,
    Success,
    Failed,
}

impl SyncStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            SyncStatus::InProgress => "IN_PROGRESS",
            SyncStatus::Success => "SUCCESS",
            SyncStatus::Failed => "FAILED",
        }
    }

    pub fn from_str(value: &str) -> Self {
        match value {
            "SUCCESS" => SyncStatus::Success,
            "FAILED" => SyncStatus::Failed,
            _ => SyncStatus::InProgress,
        }
    }
}

/// Audit record for one sync run.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SyncLogEntry {
    pub id: String,
    pub owner_id: String,
    pub account_id: String,
    pub sync_type: String,
    pub status: SyncStatus,
    pub transactions_synced: i32,
    pub error_message: Option<String>,
    pub started_at: NaiveDateTime,
    pub completed_at: Option<NaiveDateTime>,
}

/// Input model for opening a sync log entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewSyncLog {
    pub owner_id: String,
    pub account_id: String,
    pub sync_type: String,
}

/// One per-item failure recorded during a run.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SyncItemError {
    pub external_id: String,
    pub message: String,
}

/// Aggregated result of one sync run.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct SyncOutcome {
    /// Successfully processed candidates (new + updated).
    pub total: usize,
    pub new: usize,
    pub updated: usize,
    pub errors: Vec<SyncItemError>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sync_status_round_trips_as_str() {
        for status in [SyncStatus::InProgress, SyncStatus::Success, SyncStatus::Failed] {
            assert_eq!(SyncStatus::from_str(status.as_str()), status);
        }
    }

    #[test]
    fn outcome_serializes_camel_case() {
        let outcome = SyncOutcome {
            total: 4,
            new: 3,
            updated: 1,
            errors: vec![SyncItemError {
                external_id: "ext-9".to_string(),
                message: "amount is not a number".to_string(),
            }],
        };
        let json = serde_json::to_value(&outcome).unwrap();
        assert_eq!(json["total"], 4);
        assert_eq!(json["errors"][0]["externalId"], "ext-9");
    }
}
