// src/db/venue_repository.rs
// DOCUMENTATION: Venue database operations
// PURPOSE: Create venues and list them for event forms

use crate::errors::EventsError;
use crate::models::{CreateVenueRequest, Venue, VenueOption};
use sqlx::PgPool;

pub struct VenueRepository;

impl VenueRepository {
    /// Create a new venue
    /// DOCUMENTATION: Only name, address and city are persisted
    pub async fn create_venue(
        pool: &PgPool,
        req: &CreateVenueRequest,
    ) -> Result<Venue, EventsError> {
        let venue = sqlx::query_as::<_, Venue>(
            r#"
            INSERT INTO venues (name, address, city)
            VALUES ($1, $2, $3)
            RETURNING id, name, address, city
            "#,
        )
        .bind(&req.name)
        .bind(&req.address)
        .bind(&req.city)
        .fetch_one(pool)
        .await
        .map_err(|e| {
            log::error!("Failed to create venue: {}", e);
            EventsError::DatabaseError(format!("Create venue failed: {}", e))
        })?;

        log::info!("Created venue with id: {}", venue.id);
        Ok(venue)
    }

    /// All venues ordered by name
    pub async fn list_options(pool: &PgPool) -> Result<Vec<VenueOption>, EventsError> {
        sqlx::query_as::<_, VenueOption>("SELECT id, name, city FROM venues ORDER BY name")
            .fetch_all(pool)
            .await
            .map_err(|e| {
                log::error!("Failed to fetch venues: {}", e);
                EventsError::DatabaseError(format!("Fetch venues failed: {}", e))
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[sqlx::test(migrations = "./migrations")]
    #[ignore = "requires a PostgreSQL server in DATABASE_URL"]
    async fn created_venues_are_listed_by_name(pool: PgPool) {
        for name in ["Zenith", "Arena"] {
            let req = CreateVenueRequest {
                name: name.to_string(),
                address: "Main St 1".to_string(),
                city: "Lviv".to_string(),
                lat: Some(49.84),
                lng: Some(24.03),
            };
            let venue = VenueRepository::create_venue(&pool, &req).await.unwrap();
            assert_eq!(venue.name, name);
        }

        let names: Vec<String> = VenueRepository::list_options(&pool)
            .await
            .unwrap()
            .into_iter()
            .map(|v| v.name)
            .collect();
        assert_eq!(names, vec!["Arena", "Zenith"]);
    }
}
