// src/handlers/auth.rs
// DOCUMENTATION: Registration and login endpoints
// PURPOSE: Public routes that create accounts and hand out access tokens

use crate::auth::JwtManager;
use crate::errors::EventsError;
use crate::models::{LoginRequest, RegisterRequest, RegisterResponse};
use crate::services::AuthService;
use actix_web::{web, HttpResponse, Responder};
use sqlx::PgPool;
use validator::Validate;

/// POST /auth/register
pub async fn register(
    pool: web::Data<PgPool>,
    req: web::Json<RegisterRequest>,
) -> Result<impl Responder, EventsError> {
    if let Err(e) = req.validate() {
        return Err(EventsError::ValidationError(e.to_string()));
    }

    let user = AuthService::register(pool.get_ref(), req.into_inner()).await?;
    Ok(HttpResponse::Created().json(RegisterResponse {
        msg: "User registered successfully",
        user,
    }))
}

/// POST /auth/login
pub async fn login(
    pool: web::Data<PgPool>,
    jwt: web::Data<JwtManager>,
    req: web::Json<LoginRequest>,
) -> Result<impl Responder, EventsError> {
    if let Err(e) = req.validate() {
        return Err(EventsError::ValidationError(e.to_string()));
    }

    let response = AuthService::login(pool.get_ref(), jwt.get_ref(), req.into_inner()).await?;
    Ok(HttpResponse::Ok().json(response))
}

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/auth")
            .route("/register", web::post().to(register))
            .route("/login", web::post().to(login)),
    );
}
