// src/services/auth_service.rs
// DOCUMENTATION: Registration and login flows
// PURPOSE: Combine user storage, password hashing and token issuance

use crate::auth::{hash_password_blocking, verify_password_blocking, JwtManager};
use crate::db::{user_exists, UserRepository};
use crate::errors::EventsError;
use crate::models::{LoginRequest, LoginResponse, PublicUser, RegisterRequest};
use sqlx::PgPool;

pub struct AuthService;

impl AuthService {
    /// Register a new account
    /// DOCUMENTATION: Rejects an already registered email before hashing
    pub async fn register(pool: &PgPool, req: RegisterRequest) -> Result<PublicUser, EventsError> {
        if UserRepository::find_by_email(pool, &req.email).await?.is_some() {
            log::info!("Registration rejected, email already in use");
            return Err(user_exists());
        }

        let password_hash = hash_password_blocking(req.password).await?;
        UserRepository::create_user(pool, &req.username, &req.email, &password_hash).await
    }

    /// Check credentials and issue an access token
    /// DOCUMENTATION: Unknown email and wrong password produce the same error
    pub async fn login(
        pool: &PgPool,
        jwt: &JwtManager,
        req: LoginRequest,
    ) -> Result<LoginResponse, EventsError> {
        let user = UserRepository::find_by_email(pool, &req.email)
            .await?
            .ok_or(EventsError::InvalidCredentials)?;

        if !verify_password_blocking(req.password, user.password_hash.clone()).await? {
            log::info!("Failed login for user {}", user.id);
            return Err(EventsError::InvalidCredentials);
        }

        let public = user.to_public();
        let token = jwt.issue(&public)?;

        log::info!("User {} logged in", public.id);
        Ok(LoginResponse {
            token,
            user: public,
        })
    }
}
