//! Database model for categories.

use chrono::NaiveDateTime;
use diesel::prelude::*;
use serde::{Deserialize, Serialize};

use sikasync_core::categories::{Category, NewCategory};

/// Database model for categories
#[derive(
    Queryable, Identifiable, Insertable, Selectable, PartialEq, Serialize, Deserialize, Debug, Clone,
)]
#[diesel(table_name = crate::schema::categories)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct CategoryDB {
    pub id: String,
    pub owner_id: Option<String>,
    pub name: String,
    pub icon: String,
    pub created_at: NaiveDateTime,
}

impl From<CategoryDB> for Category {
    fn from(db: CategoryDB) -> Self {
        Self {
            id: db.id,
            owner_id: db.owner_id,
            name: db.name,
            icon: db.icon,
            created_at: db.created_at,
        }
    }
}

impl From<NewCategory> for CategoryDB {
    fn from(domain: NewCategory) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            owner_id: domain.owner_id,
            name: domain.name,
            icon: domain.icon,
            created_at: chrono::Utc::now().naive_utc(),
        }
    }
}
