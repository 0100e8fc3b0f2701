// src/db/category_repository.rs

use crate::errors::EventsError;
use crate::models::Category;
use sqlx::PgPool;

pub struct CategoryRepository;

impl CategoryRepository {
    /// All categories ordered by name
    pub async fn list_all(pool: &PgPool) -> Result<Vec<Category>, EventsError> {
        sqlx::query_as::<_, Category>("SELECT id, name FROM categories ORDER BY name")
            .fetch_all(pool)
            .await
            .map_err(|e| {
                log::error!("Failed to fetch categories: {}", e);
                EventsError::DatabaseError(format!("Fetch categories failed: {}", e))
            })
    }
}
