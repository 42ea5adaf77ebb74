use async_trait::async_trait;
use log::debug;
use std::sync::Arc;

use super::categories_model::{Category, NewCategory};
use super::categories_traits::{CategoryRepositoryTrait, CategoryServiceTrait};
use crate::categorization::Direction;
use crate::constants::DEFAULT_CATEGORY_ICON;
use crate::errors::Result;

/// Get-or-create resolver turning classifier category ids into canonical
/// category records.
pub struct CategoryService {
    repository: Arc<dyn CategoryRepositoryTrait>,
}

impl CategoryService {
    pub fn new(repository: Arc<dyn CategoryRepositoryTrait>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl CategoryServiceTrait for CategoryService {
    async fn ensure_category(
        &self,
        owner_id: &str,
        category_id: &str,
        direction: Direction,
    ) -> Result<Category> {
        let display_name = display_name_for(category_id);

        if let Some(existing) = self.repository.find_matching(owner_id, &display_name)? {
            return Ok(existing);
        }

        debug!(
            "Creating {} category '{}' for owner {}",
            direction.as_str(),
            display_name,
            owner_id
        );
        self.repository
            .create(NewCategory {
                owner_id: Some(owner_id.to_string()),
                name: display_name,
                icon: icon_for(category_id).to_string(),
            })
            .await
    }
}

/// snake_case classifier id -> Title Case display name.
fn display_name_for(category_id: &str) -> String {
    category_id
        .split('_')
        .filter(|part| !part.is_empty())
        .map(|part| {
            let mut chars = part.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Fixed icon lookup for known classifier ids.
fn icon_for(category_id: &str) -> &'static str {
    match category_id {
        "food_dining" => "utensils",
        "groceries" => "shopping-basket",
        "transport" => "car",
        "airtime_data" => "smartphone",
        "utilities" => "zap",
        "rent_housing" => "home",
        "entertainment" => "clapperboard",
        "health" => "heart-pulse",
        "education" => "graduation-cap",
        "fees_charges" => "receipt",
        "salary" => "banknote",
        "transfer_in" => "arrow-down-left",
        "large_purchase" => "package",
        "other_expense" => "circle-dollar-sign",
        _ => DEFAULT_CATEGORY_ICON,
    }
}
