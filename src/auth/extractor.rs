// src/auth/extractor.rs
// DOCUMENTATION: Request guard for protected routes
// PURPOSE: Turn "Authorization: Bearer <token>" into the caller's identity

use super::JwtManager;
use crate::errors::EventsError;
use actix_web::{dev::Payload, http::header, web, FromRequest, HttpRequest};
use std::future::{ready, Ready};

/// The authenticated caller
/// DOCUMENTATION: Adding this as a handler argument makes the route require a
/// valid token; the request is rejected with 401 before the handler runs
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub id: i32,
    pub username: String,
}

impl FromRequest for AuthenticatedUser {
    type Error = EventsError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        ready(authenticate(req))
    }
}

fn authenticate(req: &HttpRequest) -> Result<AuthenticatedUser, EventsError> {
    let jwt = req.app_data::<web::Data<JwtManager>>().ok_or_else(|| {
        log::error!("JwtManager missing from app data");
        EventsError::InternalError("Authentication not configured".to_string())
    })?;

    let token = bearer_token(req).ok_or_else(|| {
        log::warn!("Protected request without token: {}", req.path());
        EventsError::Unauthorized("Access denied, no token provided".to_string())
    })?;

    let claims = jwt.verify(token).map_err(|e| {
        log::warn!("Rejected token on {}: {}", req.path(), e);
        e
    })?;

    Ok(AuthenticatedUser {
        id: claims.user_id()?,
        username: claims.username,
    })
}

fn bearer_token(req: &HttpRequest) -> Option<&str> {
    let value = req.headers().get(header::AUTHORIZATION)?.to_str().ok()?;
    let token = value
        .strip_prefix("Bearer ")
        .or_else(|| value.strip_prefix("bearer "))?
        .trim();

    if token.is_empty() {
        None
    } else {
        Some(token)
    }
}
