// src/handlers/mod.rs
// DOCUMENTATION: Handlers module organization
// PURPOSE: Re-export handler components and assemble the API scope

pub mod auth;
pub mod events;
pub mod health;
pub mod venues;

pub use auth::config as auth_config;
pub use events::config as events_config;
pub use health::config as health_config;
pub use venues::config as venues_config;

use crate::errors::EventsError;
use actix_web::{error::JsonPayloadError, web, HttpRequest, HttpResponse};

/// Mount auth, venue and event routes under `prefix`
/// Order matters: /{id} would otherwise swallow /venues and /auth/*
pub fn api_config(prefix: String) -> impl FnOnce(&mut web::ServiceConfig) {
    move |cfg: &mut web::ServiceConfig| {
        cfg.service(
            web::scope(&prefix)
                .app_data(json_config())
                .configure(auth_config)
                .configure(venues_config)
                .configure(events_config),
        );
    }
}

/// Malformed JSON bodies are reported like any other validation error
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .limit(64 * 1024)
        .error_handler(|err: JsonPayloadError, req: &HttpRequest| {
            log::warn!("Rejected body on {}: {}", req.path(), err);
            EventsError::ValidationError(err.to_string()).into()
        })
}

/// Fallback for unmatched routes
pub async fn not_found() -> Result<HttpResponse, EventsError> {
    Err(EventsError::NotFound("Route not found".to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::JwtManager;
    use crate::models::PublicUser;
    use actix_web::{http::header, http::StatusCode, test, App};
    use sqlx::postgres::{PgPool, PgPoolOptions};

    const PREFIX: &str = "/api/events";
    const SECRET: &str = "handler-test-secret";

    // Never connects unless a handler actually queries, which these tests avoid
    fn lazy_pool() -> PgPool {
        PgPoolOptions::new()
            .connect_lazy("postgres://postgres@127.0.0.1:1/unused")
            .unwrap()
    }

    fn token() -> String {
        JwtManager::new(SECRET, 3600)
            .issue(&PublicUser {
                id: 1,
                username: "tester".to_string(),
                email: "tester@example.com".to_string(),
            })
            .unwrap()
    }

    fn bearer() -> (header::HeaderName, String) {
        (header::AUTHORIZATION, format!("Bearer {}", token()))
    }

    macro_rules! test_app {
        () => {
            test::init_service(
                App::new()
                    .app_data(web::Data::new(lazy_pool()))
                    .app_data(web::Data::new(JwtManager::new(SECRET, 3600)))
                    .configure(health_config)
                    .configure(api_config(PREFIX.to_string()))
                    .default_service(web::route().to(not_found)),
            )
            .await
        };
    }

    async fn error_code(resp: actix_web::dev::ServiceResponse) -> String {
        let body: serde_json::Value = test::read_body_json(resp).await;
        body["error"]["code"].as_str().unwrap_or_default().to_string()
    }

    #[actix_rt::test]
    async fn test_health() {
        let app = test_app!();
        let req = test::TestRequest::get().uri("/health").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["status"], "ok");
    }

    #[actix_rt::test]
    async fn test_non_numeric_id_is_bad_request() {
        let app = test_app!();
        let req = test::TestRequest::get()
            .uri("/api/events/abc")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        assert_eq!(error_code(resp).await, "INVALID_INPUT");
    }

    #[actix_rt::test]
    async fn test_create_without_token_is_unauthorized() {
        let app = test_app!();
        let req = test::TestRequest::post()
            .uri(PREFIX)
            .set_json(serde_json::json!({
                "title": "Concert",
                "description": "Live",
                "event_date": "2025-01-01"
            }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    }

    #[actix_rt::test]
    async fn test_forged_token_is_unauthorized() {
        let app = test_app!();
        let forged = JwtManager::new("some-other-secret", 3600)
            .issue(&PublicUser {
                id: 1,
                username: "mallory".to_string(),
                email: "mallory@example.com".to_string(),
            })
            .unwrap();

        let req = test::TestRequest::delete()
            .uri("/api/events/1")
            .insert_header((header::AUTHORIZATION, format!("Bearer {}", forged)))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    }

    #[actix_rt::test]
    async fn test_venue_creation_requires_token() {
        let app = test_app!();
        let req = test::TestRequest::post()
            .uri("/api/events/venues")
            .set_json(serde_json::json!({
                "name": "Arena",
                "address": "Main St 1",
                "city": "Kyiv"
            }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    }

    #[actix_rt::test]
    async fn test_update_with_non_numeric_id_is_bad_request() {
        let app = test_app!();
        let req = test::TestRequest::put()
            .uri("/api/events/abc")
            .insert_header(bearer())
            .set_json(serde_json::json!({
                "title": "Concert",
                "description": "Live",
                "event_date": "2025-01-01",
                "venue_id": 3
            }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[actix_rt::test]
    async fn test_delete_with_non_numeric_id_is_bad_request() {
        let app = test_app!();
        let req = test::TestRequest::delete()
            .uri("/api/events/1e3")
            .insert_header(bearer())
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[actix_rt::test]
    async fn test_malformed_body_is_validation_error() {
        let app = test_app!();
        let req = test::TestRequest::post()
            .uri(PREFIX)
            .insert_header(bearer())
            .insert_header((header::CONTENT_TYPE, "application/json"))
            .set_payload("{\"title\": ")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        assert_eq!(error_code(resp).await, "VALIDATION_ERROR");
    }

    #[actix_rt::test]
    async fn test_bad_event_date_is_validation_error() {
        let app = test_app!();
        let req = test::TestRequest::post()
            .uri(PREFIX)
            .insert_header(bearer())
            .set_json(serde_json::json!({
                "title": "Concert",
                "description": "Live",
                "event_date": "next friday"
            }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[actix_rt::test]
    async fn test_register_with_invalid_email_is_rejected() {
        let app = test_app!();
        let req = test::TestRequest::post()
            .uri("/api/events/auth/register")
            .set_json(serde_json::json!({
                "username": "frank",
                "email": "frank-at-example",
                "password": "password1"
            }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        assert_eq!(error_code(resp).await, "VALIDATION_ERROR");
    }

    #[actix_rt::test]
    async fn test_unknown_route_is_not_found() {
        let app = test_app!();
        let req = test::TestRequest::get().uri("/nope").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["error"]["message"], "Route not found");
    }
}
