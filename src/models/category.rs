// src/models/category.rs

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::VenueOption;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Category {
    pub id: i32,
    pub name: String,
}

/// Reference data for the event form: every venue and category, sorted by name
#[derive(Debug, Serialize)]
pub struct FormData {
    pub venues: Vec<VenueOption>,
    pub categories: Vec<Category>,
}
