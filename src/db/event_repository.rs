// src/db/event_repository.rs
// DOCUMENTATION: Database access layer for events
// PURPOSE: All SQL touching events and event_categories

use crate::errors::EventsError;
use crate::models::*;
use sqlx::{PgPool, Postgres, Transaction};
use std::collections::HashSet;

/// EventRepository: All database operations for events
/// DOCUMENTATION: Every function borrows the pool it is given; nothing here owns a connection
pub struct EventRepository;

impl EventRepository {
    /// Create an event and, optionally, its category link
    /// DOCUMENTATION: BEGIN -> INSERT event -> [INSERT event_categories] -> COMMIT.
    /// Any failure rolls the whole transaction back so neither row survives
    pub async fn create_event(
        pool: &PgPool,
        creator_id: i32,
        req: &CreateEventRequest,
    ) -> Result<i32, EventsError> {
        let mut tx = pool.begin().await.map_err(|e| {
            log::error!("Failed to begin transaction: {}", e);
            EventsError::DatabaseError(e.to_string())
        })?;

        match Self::insert_event_with_category(&mut tx, creator_id, req).await {
            Ok(event_id) => {
                tx.commit().await.map_err(|e| {
                    log::error!("Failed to commit event {}: {}", event_id, e);
                    EventsError::DatabaseError(e.to_string())
                })?;

                log::info!("Created event with id: {}", event_id);
                Ok(event_id)
            }
            Err(e) => {
                if let Err(rollback_err) = tx.rollback().await {
                    log::error!("Rollback failed: {}", rollback_err);
                }
                Err(e)
            }
        }
    }

    async fn insert_event_with_category(
        tx: &mut Transaction<'_, Postgres>,
        creator_id: i32,
        req: &CreateEventRequest,
    ) -> Result<i32, EventsError> {
        let (event_id,): (i32,) = sqlx::query_as(
            r#"
            INSERT INTO events (title, description, event_date, creator_id, venue_id, image_url)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id
            "#,
        )
        .bind(&req.title)
        .bind(&req.description)
        .bind(req.event_date)
        .bind(creator_id)
        .bind(req.venue_id)
        .bind(&req.image_url)
        .fetch_one(&mut **tx)
        .await
        .map_err(|e| {
            log::error!("Failed to insert event: {}", e);
            EventsError::DatabaseError(e.to_string())
        })?;

        if let Some(category_id) = req.category_id {
            sqlx::query("INSERT INTO event_categories (event_id, category_id) VALUES ($1, $2)")
                .bind(event_id)
                .bind(category_id)
                .execute(&mut **tx)
                .await
                .map_err(|e| {
                    log::error!(
                        "Failed to link event {} to category {}: {}",
                        event_id,
                        category_id,
                        e
                    );
                    EventsError::DatabaseError(e.to_string())
                })?;
        }

        Ok(event_id)
    }

    /// List all events with venue and category, soonest first
    /// DOCUMENTATION: The join fans out once per category; rows are collapsed
    /// to one per event, so multi-category events report a single category
    pub async fn list_with_venue_and_category(
        pool: &PgPool,
    ) -> Result<Vec<EventListItem>, EventsError> {
        let rows = sqlx::query_as::<_, EventListItem>(
            r#"
            SELECT
                e.id, e.title, e.description, e.event_date,
                e.creator_id, e.venue_id, e.image_url,
                v.name AS venue_name,
                v.city,
                c.name AS category_name
            FROM events e
            LEFT JOIN venues v ON v.id = e.venue_id
            LEFT JOIN event_categories ec ON ec.event_id = e.id
            LEFT JOIN categories c ON c.id = ec.category_id
            ORDER BY e.event_date ASC, e.id ASC, c.id ASC
            "#,
        )
        .fetch_all(pool)
        .await
        .map_err(|e| {
            log::error!("Failed to list events: {}", e);
            EventsError::DatabaseError(e.to_string())
        })?;

        let fetched = rows.len();
        let events = collapse_by_event_id(rows);

        log::debug!(
            "Listed {} events ({} joined rows)",
            events.len(),
            fetched
        );
        Ok(events)
    }

    /// Retrieve one event with venue details and creator username
    pub async fn get_detail_by_id(pool: &PgPool, id: i32) -> Result<EventDetail, EventsError> {
        sqlx::query_as::<_, EventDetail>(
            r#"
            SELECT
                e.id, e.title, e.description, e.event_date,
                e.creator_id, e.venue_id, e.image_url,
                v.name AS venue_name,
                v.address,
                v.city,
                u.username AS creator_username
            FROM events e
            LEFT JOIN venues v ON v.id = e.venue_id
            LEFT JOIN users u ON u.id = e.creator_id
            WHERE e.id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(pool)
        .await
        .map_err(|e| {
            log::error!("Database error fetching event {}: {}", id, e);
            EventsError::DatabaseError(e.to_string())
        })?
        .ok_or_else(|| {
            log::warn!("Event not found: {}", id);
            event_not_found()
        })
    }

    /// Overwrite title, description, event_date and venue_id
    pub async fn update_event(
        pool: &PgPool,
        id: i32,
        req: &UpdateEventRequest,
    ) -> Result<Event, EventsError> {
        let event = sqlx::query_as::<_, Event>(
            r#"
            UPDATE events
            SET title = $1,
                description = $2,
                event_date = $3,
                venue_id = $4
            WHERE id = $5
            RETURNING id, title, description, event_date, creator_id, venue_id, image_url
            "#,
        )
        .bind(&req.title)
        .bind(&req.description)
        .bind(req.event_date)
        .bind(req.venue_id)
        .bind(id)
        .fetch_optional(pool)
        .await
        .map_err(|e| {
            log::error!("Update failed for event {}: {}", id, e);
            EventsError::DatabaseError(e.to_string())
        })?
        .ok_or_else(|| {
            log::warn!("Update of missing event: {}", id);
            event_not_found()
        })?;

        log::info!("Updated event: {}", id);
        Ok(event)
    }

    /// Hard delete, returning the removed row
    pub async fn delete_event(pool: &PgPool, id: i32) -> Result<Event, EventsError> {
        let event = sqlx::query_as::<_, Event>(
            r#"
            DELETE FROM events
            WHERE id = $1
            RETURNING id, title, description, event_date, creator_id, venue_id, image_url
            "#,
        )
        .bind(id)
        .fetch_optional(pool)
        .await
        .map_err(|e| {
            log::error!("Delete failed for event {}: {}", id, e);
            EventsError::DatabaseError(e.to_string())
        })?
        .ok_or_else(|| {
            log::warn!("Delete of missing event: {}", id);
            event_not_found()
        })?;

        log::info!("Deleted event: {}", id);
        Ok(event)
    }
}

fn event_not_found() -> EventsError {
    EventsError::NotFound("Event not found".to_string())
}

/// Keep the first row seen for each event id, preserving order
pub fn collapse_by_event_id(rows: Vec<EventListItem>) -> Vec<EventListItem> {
    let mut seen = HashSet::with_capacity(rows.len());
    rows.into_iter().filter(|row| seen.insert(row.id)).collect()
}
