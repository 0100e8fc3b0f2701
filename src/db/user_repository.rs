// src/db/user_repository.rs
// DOCUMENTATION: User account database operations
// PURPOSE: Lookup by email and insertion of new accounts

use crate::errors::EventsError;
use crate::models::{PublicUser, User};
use sqlx::PgPool;

pub struct UserRepository;

impl UserRepository {
    pub async fn find_by_email(pool: &PgPool, email: &str) -> Result<Option<User>, EventsError> {
        sqlx::query_as::<_, User>(
            "SELECT id, username, email, password_hash FROM users WHERE email = $1",
        )
        .bind(email)
        .fetch_optional(pool)
        .await
        .map_err(|e| {
            log::error!("Failed to look up user by email: {}", e);
            EventsError::DatabaseError(e.to_string())
        })
    }

    /// Insert a user with an already-hashed password
    /// DOCUMENTATION: A unique violation on email means another request
    /// registered the same address first; it is reported as AlreadyExists
    pub async fn create_user(
        pool: &PgPool,
        username: &str,
        email: &str,
        password_hash: &str,
    ) -> Result<PublicUser, EventsError> {
        let user = sqlx::query_as::<_, PublicUser>(
            r#"
            INSERT INTO users (username, email, password_hash)
            VALUES ($1, $2, $3)
            RETURNING id, username, email
            "#,
        )
        .bind(username)
        .bind(email)
        .bind(password_hash)
        .fetch_one(pool)
        .await
        .map_err(|e| match e.as_database_error() {
            Some(db_err) if db_err.is_unique_violation() => {
                log::warn!("Registration raced on existing email");
                user_exists()
            }
            _ => {
                log::error!("Failed to create user: {}", e);
                EventsError::DatabaseError(e.to_string())
            }
        })?;

        log::info!("Registered user with id: {}", user.id);
        Ok(user)
    }
}

pub fn user_exists() -> EventsError {
    EventsError::AlreadyExists("User already exists".to_string())
}
