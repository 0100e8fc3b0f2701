// src/errors.rs
// DOCUMENTATION: Custom error types and HTTP responses
// PURPOSE: Centralized error handling for entire application

use actix_web::{error::ResponseError, http::StatusCode, HttpResponse};
use serde_json::json;
use thiserror::Error;

/// Application-specific error types
/// DOCUMENTATION: Each variant maps to exactly one HTTP status code
#[derive(Error, Debug)]
pub enum EventsError {
    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    AlreadyExists(String),

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Internal server error: {0}")]
    InternalError(String),
}

impl EventsError {
    fn error_code(&self) -> &'static str {
        match self {
            EventsError::NotFound(_) => "NOT_FOUND",
            EventsError::AlreadyExists(_) => "ALREADY_EXISTS",
            EventsError::DatabaseError(_) => "DATABASE_ERROR",
            EventsError::InvalidInput(_) => "INVALID_INPUT",
            EventsError::ValidationError(_) => "VALIDATION_ERROR",
            EventsError::InvalidCredentials => "INVALID_CREDENTIALS",
            EventsError::Unauthorized(_) => "UNAUTHORIZED",
            EventsError::InternalError(_) => "INTERNAL_ERROR",
        }
    }

    /// Message safe to send to clients
    /// Store and internal failures are logged in full but reported generically
    pub fn public_message(&self) -> String {
        match self {
            EventsError::DatabaseError(_) | EventsError::InternalError(_) => {
                "Internal server error".to_string()
            }
            other => other.to_string(),
        }
    }
}

/// Convert EventsError to HTTP response
/// DOCUMENTATION: Maps error types to HTTP status codes and JSON responses
impl ResponseError for EventsError {
    fn error_response(&self) -> HttpResponse {
        if self.status_code().is_server_error() {
            log::error!("Request failed: {}", self);
        }

        let body = json!({
            "error": {
                "code": self.error_code(),
                "message": self.public_message(),
                "timestamp": chrono::Utc::now().to_rfc3339()
            }
        });

        HttpResponse::build(self.status_code()).json(body)
    }

    fn status_code(&self) -> StatusCode {
        match self {
            EventsError::NotFound(_) => StatusCode::NOT_FOUND,
            EventsError::AlreadyExists(_) => StatusCode::BAD_REQUEST,
            EventsError::DatabaseError(_) => StatusCode::INTERNAL_SERVER_ERROR,
            EventsError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            EventsError::ValidationError(_) => StatusCode::BAD_REQUEST,
            EventsError::InvalidCredentials => StatusCode::BAD_REQUEST,
            EventsError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            EventsError::InternalError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::body::to_bytes;

    #[test]
    fn test_status_mapping() {
        assert_eq!(
            EventsError::NotFound("Event not found".into()).status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            EventsError::AlreadyExists("User already exists".into()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            EventsError::InvalidCredentials.status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            EventsError::Unauthorized("missing token".into()).status_code(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            EventsError::DatabaseError("boom".into()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_public_message_hides_database_details() {
        let err = EventsError::DatabaseError("relation \"events\" does not exist".into());
        assert_eq!(err.public_message(), "Internal server error");

        let err = EventsError::NotFound("Event not found".into());
        assert_eq!(err.public_message(), "Event not found");
    }

    #[actix_rt::test]
    async fn test_error_response_body() {
        let resp = EventsError::AlreadyExists("User already exists".into()).error_response();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let bytes = to_bytes(resp.into_body()).await.unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["error"]["code"], "ALREADY_EXISTS");
        assert_eq!(body["error"]["message"], "User already exists");
        assert!(body["error"]["timestamp"].is_string());
    }
}
