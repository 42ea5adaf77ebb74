//! Database model for linked accounts.

use chrono::NaiveDateTime;
use diesel::prelude::*;
use serde::{Deserialize, Serialize};

use sikasync_core::accounts::{AccountKind, LinkedAccount, NewLinkedAccount};

/// Database model for linked accounts
#[derive(
    Queryable, Identifiable, Insertable, Selectable, PartialEq, Serialize, Deserialize, Debug, Clone,
)]
#[diesel(table_name = crate::schema::linked_accounts)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct LinkedAccountDB {
    pub id: String,
    pub owner_id: String,
    pub provider_ref: String,
    pub display_name: String,
    pub account_kind: String,
    pub provider_source: String,
    pub is_active: bool,
    pub created_at: NaiveDateTime,
}

impl From<LinkedAccountDB> for LinkedAccount {
    fn from(db: LinkedAccountDB) -> Self {
        Self {
            id: db.id,
            owner_id: db.owner_id,
            provider_ref: db.provider_ref,
            display_name: db.display_name,
            account_kind: AccountKind::from_str(&db.account_kind),
            provider_source: db.provider_source,
            is_active: db.is_active,
            created_at: db.created_at,
        }
    }
}

impl From<NewLinkedAccount> for LinkedAccountDB {
    fn from(domain: NewLinkedAccount) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            owner_id: domain.owner_id,
            provider_ref: domain.provider_ref,
            display_name: domain.display_name,
            account_kind: domain.account_kind.as_str().to_string(),
            provider_source: domain.provider_source,
            is_active: true,
            created_at: chrono::Utc::now().naive_utc(),
        }
    }
}
