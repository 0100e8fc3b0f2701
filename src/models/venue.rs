// src/models/venue.rs

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// Venue record from the venues table
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Venue {
    pub id: i32,
    pub name: String,
    pub address: String,
    pub city: String,
}

/// Compact venue used to populate client-side forms
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct VenueOption {
    pub id: i32,
    pub name: String,
    pub city: String,
}

/// Request to create a new venue
/// lat/lng are accepted and range-checked, the schema has no columns for them yet
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateVenueRequest {
    #[validate(length(min = 1, max = 255))]
    pub name: String,

    #[validate(length(min = 1, max = 500))]
    pub address: String,

    #[validate(length(min = 1, max = 100))]
    pub city: String,

    #[serde(default)]
    #[validate(range(min = -90.0, max = 90.0))]
    pub lat: Option<f64>,

    #[serde(default)]
    #[validate(range(min = -180.0, max = 180.0))]
    pub lng: Option<f64>,
}
