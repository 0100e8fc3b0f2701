// src/models/event.rs
// DOCUMENTATION: Data structures for events
// PURPOSE: Database rows, request DTOs and response bodies for /events

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// Plain event record as stored in the events table
/// DOCUMENTATION: Returned by update and delete (RETURNING clauses)
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Event {
    pub id: i32,
    pub title: String,
    pub description: String,
    pub event_date: NaiveDateTime,
    pub creator_id: i32,
    pub venue_id: Option<i32>,
    pub image_url: Option<String>,
}

/// One row of the listing query
/// DOCUMENTATION: Event joined with its venue and one category.
/// Venue and category columns are NULL when the event has none
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct EventListItem {
    pub id: i32,
    pub title: String,
    pub description: String,
    pub event_date: NaiveDateTime,
    pub creator_id: i32,
    pub venue_id: Option<i32>,
    pub image_url: Option<String>,
    pub venue_name: Option<String>,
    pub city: Option<String>,
    pub category_name: Option<String>,
}

/// Single event with venue details and creator username
/// DOCUMENTATION: Used for GET /{id}
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct EventDetail {
    pub id: i32,
    pub title: String,
    pub description: String,
    pub event_date: NaiveDateTime,
    pub creator_id: i32,
    pub venue_id: Option<i32>,
    pub image_url: Option<String>,
    pub venue_name: Option<String>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub creator_username: Option<String>,
}

/// Request DTO for creating a new event
/// DOCUMENTATION: POST / body. creator_id is deliberately absent:
/// it comes from the access token, any client-supplied value is ignored
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateEventRequest {
    #[validate(length(min = 1, max = 255))]
    pub title: String,

    pub description: String,

    #[serde(with = "event_date_format")]
    pub event_date: NaiveDateTime,

    #[serde(default)]
    pub venue_id: Option<i32>,

    #[serde(default)]
    pub category_id: Option<i32>,

    #[serde(default)]
    #[validate(length(max = 2048))]
    pub image_url: Option<String>,
}

/// Request DTO for updating an event
/// DOCUMENTATION: Full replace, not a patch. A missing venue_id clears the venue
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct UpdateEventRequest {
    #[validate(length(min = 1, max = 255))]
    pub title: String,

    pub description: String,

    #[serde(with = "event_date_format")]
    pub event_date: NaiveDateTime,

    #[serde(default)]
    pub venue_id: Option<i32>,
}

#[derive(Debug, Serialize)]
pub struct EventCreatedResponse {
    pub msg: &'static str,
    #[serde(rename = "eventId")]
    pub event_id: i32,
}

/// Response for update and delete
#[derive(Debug, Serialize)]
pub struct EventMutationResponse {
    pub msg: &'static str,
    pub event: Event,
}

/// Accepts "YYYY-MM-DD" (midnight) as well as full timestamps
pub mod event_date_format {
    use chrono::{NaiveDate, NaiveDateTime};
    use serde::{Deserialize, Deserializer, Serializer};

    const DATETIME_FORMATS: [&str; 4] = [
        "%Y-%m-%dT%H:%M:%S%.f",
        "%Y-%m-%dT%H:%M",
        "%Y-%m-%d %H:%M:%S%.f",
        "%Y-%m-%d %H:%M",
    ];

    pub fn parse(raw: &str) -> Option<NaiveDateTime> {
        let raw = raw.trim();

        for format in DATETIME_FORMATS {
            if let Ok(dt) = NaiveDateTime::parse_from_str(raw, format) {
                return Some(dt);
            }
        }

        // RFC 3339 with an offset, normalized to UTC
        if let Ok(dt) = chrono::DateTime::parse_from_rfc3339(raw) {
            return Some(dt.naive_utc());
        }

        NaiveDate::parse_from_str(raw, "%Y-%m-%d")
            .ok()
            .and_then(|d| d.and_hms_opt(0, 0, 0))
    }

    pub fn serialize<S>(value: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&value.format("%Y-%m-%dT%H:%M:%S").to_string())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDateTime, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        parse(&raw).ok_or_else(|| {
            serde::de::Error::custom(format!(
                "invalid event_date '{}', expected YYYY-MM-DD or YYYY-MM-DDTHH:MM:SS",
                raw
            ))
        })
    }
}
