// src/handlers/events.rs
// DOCUMENTATION: HTTP handlers for event operations
// PURPOSE: Parse requests, call services, return responses

use crate::auth::AuthenticatedUser;
use crate::errors::EventsError;
use crate::models::{
    CreateEventRequest, EventCreatedResponse, EventMutationResponse, UpdateEventRequest,
};
use crate::services::EventService;
use actix_web::{web, HttpResponse, Responder};
use sqlx::PgPool;
use validator::Validate;

/// GET /
/// List all events, soonest first
pub async fn list_events(pool: web::Data<PgPool>) -> Result<impl Responder, EventsError> {
    let events = EventService::list_events(pool.get_ref()).await?;
    Ok(HttpResponse::Ok().json(events))
}

/// GET /form-data
/// Venues and categories for the event form
pub async fn form_data(pool: web::Data<PgPool>) -> Result<impl Responder, EventsError> {
    let data = EventService::get_form_data(pool.get_ref()).await?;
    Ok(HttpResponse::Ok().json(data))
}

/// GET /{id}
pub async fn get_event(
    pool: web::Data<PgPool>,
    path: web::Path<String>,
) -> Result<impl Responder, EventsError> {
    let event = EventService::get_event(pool.get_ref(), &path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(event))
}

/// POST /
/// Create an event owned by the caller
pub async fn create_event(
    pool: web::Data<PgPool>,
    user: AuthenticatedUser,
    req: web::Json<CreateEventRequest>,
) -> Result<impl Responder, EventsError> {
    if let Err(e) = req.validate() {
        return Err(EventsError::ValidationError(e.to_string()));
    }

    let event_id = EventService::create_event(pool.get_ref(), user.id, req.into_inner()).await?;
    Ok(HttpResponse::Created().json(EventCreatedResponse {
        msg: "Event created",
        event_id,
    }))
}

/// PUT /{id}
/// Replace title, description, date and venue
pub async fn update_event(
    pool: web::Data<PgPool>,
    user: AuthenticatedUser,
    path: web::Path<String>,
    req: web::Json<UpdateEventRequest>,
) -> Result<impl Responder, EventsError> {
    if let Err(e) = req.validate() {
        return Err(EventsError::ValidationError(e.to_string()));
    }

    let event =
        EventService::update_event(pool.get_ref(), &path.into_inner(), req.into_inner()).await?;
    log::info!("Event {} updated by user {}", event.id, user.id);

    Ok(HttpResponse::Ok().json(EventMutationResponse {
        msg: "Event updated",
        event,
    }))
}

/// DELETE /{id}
pub async fn delete_event(
    pool: web::Data<PgPool>,
    user: AuthenticatedUser,
    path: web::Path<String>,
) -> Result<impl Responder, EventsError> {
    let event = EventService::delete_event(pool.get_ref(), &path.into_inner()).await?;
    log::info!("Event {} deleted by user {}", event.id, user.id);

    Ok(HttpResponse::Ok().json(EventMutationResponse {
        msg: "Event deleted",
        event,
    }))
}

/// Configuration for event routes
/// /form-data is registered ahead of /{id} so it is not taken for an id
pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource(["", "/"])
            .route(web::get().to(list_events))
            .route(web::post().to(create_event)),
    )
    .route("/form-data", web::get().to(form_data))
    .service(
        web::resource("/{id}")
            .route(web::get().to(get_event))
            .route(web::put().to(update_event))
            .route(web::delete().to(delete_event)),
    );
}
