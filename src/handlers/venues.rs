// src/handlers/venues.rs

use crate::auth::AuthenticatedUser;
use crate::errors::EventsError;
use crate::models::CreateVenueRequest;
use crate::services::EventService;
use actix_web::{web, HttpResponse, Responder};
use sqlx::PgPool;
use validator::Validate;

/// POST /venues
/// Create a venue (authenticated)
pub async fn create_venue(
    pool: web::Data<PgPool>,
    user: AuthenticatedUser,
    req: web::Json<CreateVenueRequest>,
) -> Result<impl Responder, EventsError> {
    if let Err(e) = req.validate() {
        return Err(EventsError::ValidationError(e.to_string()));
    }

    let venue = EventService::create_venue(pool.get_ref(), req.into_inner()).await?;
    log::info!("Venue {} created by user {}", venue.id, user.id);
    Ok(HttpResponse::Created().json(venue))
}

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.route("/venues", web::post().to(create_venue));
}
