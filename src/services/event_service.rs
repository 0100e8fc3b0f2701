// src/services/event_service.rs
// DOCUMENTATION: Business logic for events, venues and categories
// PURPOSE: Intermediary between handlers and repositories

use crate::db::{CategoryRepository, EventRepository, VenueRepository};
use crate::errors::EventsError;
use crate::models::{
    CreateEventRequest, CreateVenueRequest, Event, EventDetail, EventListItem, FormData,
    UpdateEventRequest, Venue,
};
use sqlx::PgPool;

pub struct EventService;

impl EventService {
    /// Create an event owned by `creator_id`, returning its id
    pub async fn create_event(
        pool: &PgPool,
        creator_id: i32,
        req: CreateEventRequest,
    ) -> Result<i32, EventsError> {
        EventRepository::create_event(pool, creator_id, &req).await
    }

    pub async fn list_events(pool: &PgPool) -> Result<Vec<EventListItem>, EventsError> {
        EventRepository::list_with_venue_and_category(pool).await
    }

    /// Get an event by its raw path identifier
    /// DOCUMENTATION: Non-numeric identifiers are rejected before any query runs
    pub async fn get_event(pool: &PgPool, raw_id: &str) -> Result<EventDetail, EventsError> {
        let id = parse_event_id(raw_id)?;
        EventRepository::get_detail_by_id(pool, id).await
    }

    pub async fn update_event(
        pool: &PgPool,
        raw_id: &str,
        req: UpdateEventRequest,
    ) -> Result<Event, EventsError> {
        let id = parse_event_id(raw_id)?;
        EventRepository::update_event(pool, id, &req).await
    }

    pub async fn delete_event(pool: &PgPool, raw_id: &str) -> Result<Event, EventsError> {
        let id = parse_event_id(raw_id)?;
        EventRepository::delete_event(pool, id).await
    }

    /// Venues and categories for populating event forms
    /// Both lookups run concurrently, each on its own pooled connection
    pub async fn get_form_data(pool: &PgPool) -> Result<FormData, EventsError> {
        let (venues, categories) = tokio::try_join!(
            VenueRepository::list_options(pool),
            CategoryRepository::list_all(pool)
        )?;

        Ok(FormData { venues, categories })
    }

    pub async fn create_venue(pool: &PgPool, req: CreateVenueRequest) -> Result<Venue, EventsError> {
        if req.lat.is_some() || req.lng.is_some() {
            // TODO: persist coordinates once venues gets latitude/longitude columns
            log::debug!(
                "Venue '{}' coordinates ({:?}, {:?}) accepted but not stored",
                req.name,
                req.lat,
                req.lng
            );
        }

        VenueRepository::create_venue(pool, &req).await
    }
}

/// Parse a path segment into an event id
pub fn parse_event_id(raw: &str) -> Result<i32, EventsError> {
    raw.parse::<i32>().map_err(|_| {
        log::warn!("Rejected non-numeric event id: {:?}", raw);
        EventsError::InvalidInput(format!("Event id must be an integer, got '{}'", raw))
    })
}
