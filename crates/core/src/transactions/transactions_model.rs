use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::categorization::Direction;

/// The system's own ledger record for one real-world transaction.
///
/// At most one row exists per (owner, provider external id); repeated syncs
/// of the same provider record update this row in place.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CanonicalTransaction {
    pub id: String,
    pub owner_id: String,
    pub amount: f64,
    pub direction: Direction,
    pub category_id: String,
    pub transaction_date: NaiveDateTime,
    pub description: String,
    pub merchant_name: Option<String>,

    // Provenance, straight from the provider record.
    pub external_id: String,
    pub provider_ref: Option<String>,
    pub provider_status: Option<String>,
    pub provider_payer_info: Option<String>,
    pub financial_transaction_id: Option<String>,

    pub auto_categorized: bool,
    /// Heuristic confidence of the assigned category, 0-95.
    pub confidence: i32,
    pub sync_log_id: Option<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Input model for inserting a canonical transaction on first sync.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTransaction {
    pub owner_id: String,
    pub amount: f64,
    pub direction: Direction,
    pub category_id: String,
    pub transaction_date: NaiveDateTime,
    pub description: String,
    pub merchant_name: Option<String>,
    pub external_id: String,
    pub provider_ref: Option<String>,
    pub provider_status: Option<String>,
    pub provider_payer_info: Option<String>,
    pub financial_transaction_id: Option<String>,
    pub auto_categorized: bool,
    pub confidence: i32,
    pub sync_log_id: Option<String>,
}

/// Mutable fields refreshed in place on every subsequent sync of the same
/// external id.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionUpdate {
    pub provider_status: Option<String>,
    pub financial_transaction_id: Option<String>,
    pub category_id: String,
    pub direction: Direction,
    pub confidence: i32,
    pub merchant_name: Option<String>,
}
