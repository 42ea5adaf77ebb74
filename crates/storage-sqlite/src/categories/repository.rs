use async_trait::async_trait;
use diesel::prelude::*;
use std::sync::Arc;

use crate::db::{get_connection, DbPool};
use crate::errors::{is_unique_violation, IntoCore, StorageError};
use crate::schema::categories;
use crate::schema::categories::dsl::*;

use super::model::CategoryDB;
use sikasync_core::categories::{Category, CategoryRepositoryTrait, NewCategory};
use sikasync_core::errors::{DatabaseError, Result};

/// Repository for managing category data in the database
pub struct CategoryRepository {
    pool: Arc<DbPool>,
}

impl CategoryRepository {
    pub fn new(pool: Arc<DbPool>) -> Self {
        Self { pool }
    }

    /// Loads the owner's categories plus the shared system-wide ones.
    fn load_scope(&self, owner: &str) -> Result<Vec<CategoryDB>> {
        let mut conn = get_connection(&self.pool)?;

        categories
            .filter(owner_id.eq(owner).or(owner_id.is_null()))
            .select(CategoryDB::as_select())
            .load::<CategoryDB>(&mut conn)
            .into_core()
    }
}

#[async_trait]
impl CategoryRepositoryTrait for CategoryRepository {
    /// Matching is done in Rust over the scope's rows: the partial,
    /// case-insensitive comparison does not map onto an index anyway and
    /// scopes stay small.
    fn find_matching(&self, owner: &str, target: &str) -> Result<Option<Category>> {
        let needle = target.to_lowercase();
        let scope = self.load_scope(owner)?;

        let matches = |c: &&CategoryDB| {
            let existing = c.name.to_lowercase();
            existing.contains(&needle) || needle.contains(&existing)
        };

        // Owner-scoped rows take precedence over system-wide ones.
        let hit = scope
            .iter()
            .filter(|c| c.owner_id.is_some())
            .find(matches)
            .or_else(|| scope.iter().filter(|c| c.owner_id.is_none()).find(matches))
            .cloned();

        Ok(hit.map(Category::from))
    }

    /// Inserts the category; a normalized-name conflict with a concurrent
    /// writer resolves to the row that won the race.
    async fn create(&self, new_category: NewCategory) -> Result<Category> {
        let mut conn = get_connection(&self.pool)?;

        let category_db: CategoryDB = new_category.into();
        match diesel::insert_into(categories::table)
            .values(&category_db)
            .get_result::<CategoryDB>(&mut conn)
        {
            Ok(inserted) => Ok(inserted.into()),
            Err(e) if is_unique_violation(&e) => {
                drop(conn);
                self.find_matching(category_db.owner_id.as_deref().unwrap_or(""), &category_db.name)?
                    .ok_or_else(|| {
                        DatabaseError::Internal(format!(
                            "category '{}' conflicted but was not found",
                            category_db.name
                        ))
                        .into()
                    })
            }
            Err(e) => Err(StorageError::from(e).into()),
        }
    }
}
