use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// A spending/income category.
///
/// `owner_id` of `None` marks a system-wide category shared by all owners;
/// otherwise the category belongs to one owner. Names are unique per scope
/// after normalization.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: String,
    pub owner_id: Option<String>,
    pub name: String,
    pub icon: String,
    pub created_at: NaiveDateTime,
}

/// Input model for creating a category.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewCategory {
    pub owner_id: Option<String>,
    pub name: String,
    pub icon: String,
}
