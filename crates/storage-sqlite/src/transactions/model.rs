//! Database models for canonical transactions.

use chrono::NaiveDateTime;
use diesel::prelude::*;
use serde::{Deserialize, Serialize};

use sikasync_core::categorization::Direction;
use sikasync_core::transactions::{CanonicalTransaction, NewTransaction, TransactionUpdate};

/// Database model for canonical transactions
#[derive(
    Queryable, Identifiable, Insertable, Selectable, PartialEq, Serialize, Deserialize, Debug, Clone,
)]
#[diesel(table_name = crate::schema::transactions)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct TransactionDB {
    pub id: String,
    pub owner_id: String,
    pub amount: f64,
    pub direction: String,
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
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Changeset for the fields refreshed in place on resync. `None` values
/// clear the column.
#[derive(AsChangeset, Debug, Clone)]
#[diesel(table_name = crate::schema::transactions)]
#[diesel(treat_none_as_null = true)]
pub struct TransactionUpdateDB {
    pub provider_status: Option<String>,
    pub financial_transaction_id: Option<String>,
    pub category_id: String,
    pub direction: String,
    pub confidence: i32,
    pub merchant_name: Option<String>,
    pub updated_at: NaiveDateTime,
}

impl From<TransactionDB> for CanonicalTransaction {
    fn from(db: TransactionDB) -> Self {
        Self {
            id: db.id,
            owner_id: db.owner_id,
            amount: db.amount,
            direction: Direction::from_str(&db.direction),
            category_id: db.category_id,
            transaction_date: db.transaction_date,
            description: db.description,
            merchant_name: db.merchant_name,
            external_id: db.external_id,
            provider_ref: db.provider_ref,
            provider_status: db.provider_status,
            provider_payer_info: db.provider_payer_info,
            financial_transaction_id: db.financial_transaction_id,
            auto_categorized: db.auto_categorized,
            confidence: db.confidence,
            sync_log_id: db.sync_log_id,
            created_at: db.created_at,
            updated_at: db.updated_at,
        }
    }
}

impl From<NewTransaction> for TransactionDB {
    fn from(domain: NewTransaction) -> Self {
        let now = chrono::Utc::now().naive_utc();
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            owner_id: domain.owner_id,
            amount: domain.amount,
            direction: domain.direction.as_str().to_string(),
            category_id: domain.category_id,
            transaction_date: domain.transaction_date,
            description: domain.description,
            merchant_name: domain.merchant_name,
            external_id: domain.external_id,
            provider_ref: domain.provider_ref,
            provider_status: domain.provider_status,
            provider_payer_info: domain.provider_payer_info,
            financial_transaction_id: domain.financial_transaction_id,
            auto_categorized: domain.auto_categorized,
            confidence: domain.confidence,
            sync_log_id: domain.sync_log_id,
            created_at: now,
            updated_at: now,
        }
    }
}

impl From<TransactionUpdate> for TransactionUpdateDB {
    fn from(domain: TransactionUpdate) -> Self {
        Self {
            provider_status: domain.provider_status,
            financial_transaction_id: domain.financial_transaction_id,
            category_id: domain.category_id,
            direction: domain.direction.as_str().to_string(),
            confidence: domain.confidence,
            merchant_name: domain.merchant_name,
            updated_at: chrono::Utc::now().naive_utc(),
        }
    }
}
