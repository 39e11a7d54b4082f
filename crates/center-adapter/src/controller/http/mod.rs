//! HTTP adapter - the REST surface of both contexts
//!
//! Handlers call the synchronous services directly; the storage behind them
//! never blocks on I/O except for the optional snapshot flush.

pub mod assemblers;
pub mod error;
pub mod profiles;
pub mod resources;
pub mod state;
pub mod students;

use axum::Router;
use tower_http::trace::TraceLayer;

pub use error::{ApiError, ApiResult};
pub use state::AppState;

/// Build the full router with request tracing
pub fn router(state: AppState) -> Router {
    Router::new()
        .nest("/api/v1/profiles", profiles::routes())
        .nest("/api/v1/students", students::routes())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::Database;
    use axum::body::Body;
    use axum::http::{Method, Request, StatusCode};
    use center_domain::FixedClock;
    use http_body_util::BodyExt;
    use serde_json::{json, Value};
    use std::sync::Arc;
    use tower::ServiceExt;

    fn app() -> Router {
        let clock = Arc::new(FixedClock::on(2026, 10, 19).unwrap());
        router(AppState::new(Database::in_memory(), clock))
    }

    async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let builder = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(body) => builder
                .header("content-type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        let response = app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let value = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, value)
    }

    fn ana() -> Value {
        json!({
            "firstName": "Ana",
            "lastName": "Lima",
            "documentType": 1,
            "documentNumber": "12345678",
            "birthDate": "1990-01-01",
            "email": "a@b.com",
            "street": "Main",
            "streetNumber": "12",
            "city": "Lima",
            "postalCode": "15001",
            "country": "PE"
        })
    }

    #[tokio::test]
    async fn test_enroll_and_transfer_scenario() {
        let app = app();

        let (status, profile) = send(&app, Method::POST, "/api/v1/profiles", Some(ana())).await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(profile["fullName"], "Ana Lima");
        assert_eq!(profile["document"], "DNI: 12345678");
        assert_eq!(profile["address"], "Main 12, Lima, 15001, PE");
        let profile_id = profile["id"].as_i64().unwrap();

        let (status, full) = send(&app, Method::GET, &format!("/api/v1/profiles/{profile_id}"), None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(full["age"], 36);
        assert_eq!(full["documentType"], 1);

        let (status, student) = send(
            &app,
            Method::POST,
            "/api/v1/students",
            Some(json!({ "profileId": profile_id, "programId": 1, "curriculumId": 1 })),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        let code = student["studentCode"].as_str().unwrap().to_string();
        assert!(!code.trim().is_empty());
        assert_eq!(student["startPeriod"], "2026-2");

        let (status, moved) = send(
            &app,
            Method::PUT,
            &format!("/api/v1/students/{code}/transfer"),
            Some(json!({ "programId": 2, "curriculumId": 2 })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(moved["studentCode"], code.as_str());
        assert_eq!(moved["programId"], 2);
        assert_eq!(moved["curriculumId"], 2);
        assert_eq!(moved["startPeriod"], "2026-2");
    }

    #[tokio::test]
    async fn test_duplicate_profile_is_bad_request() {
        let app = app();
        send(&app, Method::POST, "/api/v1/profiles", Some(ana())).await;

        let (status, body) = send(&app, Method::POST, "/api/v1/profiles", Some(ana())).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["status"], 400);
        assert_eq!(body["error"], "Bad Request");
        assert!(body["message"].as_str().unwrap().contains("a@b.com"));
    }

    #[tokio::test]
    async fn test_bad_birth_date_reports_field_error() {
        let app = app();
        let mut payload = ana();
        payload["birthDate"] = json!("19-90-01");

        let (status, body) = send(&app, Method::POST, "/api/v1/profiles", Some(payload)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["fieldErrors"]["birthDate"].is_string());
    }

    #[tokio::test]
    async fn test_malformed_json_is_bad_request() {
        let app = app();
        let request = Request::builder()
            .method(Method::POST)
            .uri("/api/v1/students")
            .header("content-type", "application/json")
            .body(Body::from("{ not json"))
            .unwrap();

        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_profile_queries() {
        let app = app();
        send(&app, Method::POST, "/api/v1/profiles", Some(ana())).await;

        let (status, all) = send(&app, Method::GET, "/api/v1/profiles", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(all.as_array().unwrap().len(), 1);

        let (_, none) = send(&app, Method::GET, "/api/v1/profiles?age=20", None).await;
        assert!(none.as_array().unwrap().is_empty());

        let (status, found) = send(&app, Method::GET, "/api/v1/profiles/search?age=36", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(found[0]["firstName"], "Ana");

        let (status, _) = send(&app, Method::GET, "/api/v1/profiles/search", None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let (status, _) = send(&app, Method::GET, "/api/v1/profiles/99", None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_blank_age_filter_lists_everything() {
        let app = app();
        send(&app, Method::POST, "/api/v1/profiles", Some(ana())).await;
        let mut eva = ana();
        eva["firstName"] = json!("Eva");
        eva["documentNumber"] = json!("87654321");
        eva["birthDate"] = json!("2000-05-05");
        eva["email"] = json!("eva@lima.pe");
        send(&app, Method::POST, "/api/v1/profiles", Some(eva)).await;

        let (status, all) = send(&app, Method::GET, "/api/v1/profiles?age=", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(all.as_array().unwrap().len(), 2);

        let (status, _) = send(&app, Method::GET, "/api/v1/profiles?age=abc", None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let (status, _) = send(&app, Method::GET, "/api/v1/profiles/search?age=", None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_update_and_delete_profile() {
        let app = app();
        let (_, created) = send(&app, Method::POST, "/api/v1/profiles", Some(ana())).await;
        let id = created["id"].as_i64().unwrap();

        let mut payload = ana();
        payload["email"] = json!("ana@lima.pe");
        let (status, updated) =
            send(&app, Method::PUT, &format!("/api/v1/profiles/{id}"), Some(payload)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(updated["email"], "ana@lima.pe");

        let (status, _) = send(&app, Method::DELETE, &format!("/api/v1/profiles/{id}"), None).await;
        assert_eq!(status, StatusCode::NO_CONTENT);

        let (status, _) = send(&app, Method::DELETE, &format!("/api/v1/profiles/{id}"), None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);

        let (status, _) = send(&app, Method::GET, &format!("/api/v1/profiles/{id}"), None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_student_lifecycle() {
        let app = app();

        let (status, _) = send(
            &app,
            Method::POST,
            "/api/v1/students",
            Some(json!({ "profileId": 42, "programId": 1, "curriculumId": 1 })),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let (_, profile) = send(&app, Method::POST, "/api/v1/profiles", Some(ana())).await;
        let (_, student) = send(
            &app,
            Method::POST,
            "/api/v1/students",
            Some(json!({ "profileId": profile["id"], "programId": 1, "curriculumId": 1 })),
        )
        .await;
        let code = student["studentCode"].as_str().unwrap().to_string();

        let (status, minimal) = send(
            &app,
            Method::PUT,
            &format!("/api/v1/students/{code}/curriculum"),
            Some(json!({ "curriculumId": 3 })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(minimal["curriculumId"], 3);
        assert!(minimal.get("profileId").is_none());

        let (status, list) = send(&app, Method::GET, "/api/v1/students", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(list.as_array().unwrap().len(), 1);

        let (status, _) = send(&app, Method::DELETE, &format!("/api/v1/students/{code}"), None).await;
        assert_eq!(status, StatusCode::NO_CONTENT);

        let (status, body) = send(&app, Method::GET, &format!("/api/v1/students/{code}"), None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["status"], 404);
    }

    #[tokio::test]
    async fn test_transfer_unknown_student_is_not_found() {
        let app = app();
        let (status, _) = send(
            &app,
            Method::PUT,
            "/api/v1/students/unknown/transfer",
            Some(json!({ "programId": 2, "curriculumId": 2 })),
        )
        .await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }
}
