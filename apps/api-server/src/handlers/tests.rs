use std::sync::Arc;

use actix_web::http::StatusCode;
use actix_web::{App, test, web};
use async_trait::async_trait;
use serde_json::{Value, json};

use folio_core::domain::{Club, NewClub};
use folio_core::error::RepoError;
use folio_core::ports::{ClubRepository, CollectionRepository};
use folio_infra::in_memory_repositories;

use super::configure_routes;
use crate::state::{AppState, StorageBackend};

async fn seeded_state() -> AppState {
    let state = AppState::in_memory();
    state.seed().await.unwrap();
    state
}

/// Club store whose every call fails as if the database were down.
struct UnreachableClubs;

#[async_trait]
impl CollectionRepository<Club, NewClub> for UnreachableClubs {
    async fn list(&self) -> Result<Vec<Club>, RepoError> {
        Err(RepoError::Connection("connection refused".to_string()))
    }

    async fn create(&self, _record: NewClub) -> Result<Club, RepoError> {
        Err(RepoError::Connection("connection refused".to_string()))
    }

    async fn count(&self) -> Result<u64, RepoError> {
        Err(RepoError::Connection("connection refused".to_string()))
    }
}

impl ClubRepository for UnreachableClubs {}

#[actix_web::test]
async fn test_contact_created() {
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(AppState::in_memory()))
            .configure(configure_routes),
    )
    .await;

    let req = test::TestRequest::post()
        .uri("/api/contact")
        .set_json(json!({"name": "Ada", "email": "ada@example.com", "message": "Hello"}))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::CREATED);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["name"], "Ada");
    assert_eq!(body["email"], "ada@example.com");
    assert_eq!(body["message"], "Hello");
    assert!(body["id"].is_number());
    assert!(body["createdAt"].is_string());
}

#[actix_web::test]
async fn test_contact_reports_first_violation() {
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(AppState::in_memory()))
            .configure(configure_routes),
    )
    .await;

    let req = test::TestRequest::post()
        .uri("/api/contact")
        .set_json(json!({"name": "", "email": "not-an-email", "message": ""}))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body, json!({"message": "Name is required"}));
}

#[actix_web::test]
async fn test_contact_rejects_malformed_email() {
    let state = AppState::in_memory();
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(state.clone()))
            .configure(configure_routes),
    )
    .await;

    let req = test::TestRequest::post()
        .uri("/api/contact")
        .set_json(json!({"name": "Ada", "email": "not-an-email", "message": "Hello"}))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "Please enter a valid email address");
    assert_eq!(state.content.messages.count().await.unwrap(), 0);
}

#[actix_web::test]
async fn test_contact_rejects_missing_and_mistyped_fields() {
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(AppState::in_memory()))
            .configure(configure_routes),
    )
    .await;

    for payload in [
        json!({"name": "Ada", "message": "Hello"}),
        json!({"name": 42, "email": "ada@example.com", "message": "Hello"}),
    ] {
        let req = test::TestRequest::post()
            .uri("/api/contact")
            .set_json(payload)
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: Value = test::read_body_json(resp).await;
        assert!(!body["message"].as_str().unwrap().is_empty());
    }
}

#[actix_web::test]
async fn test_testimonial_round_trip() {
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(AppState::in_memory()))
            .configure(configure_routes),
    )
    .await;

    let req = test::TestRequest::post()
        .uri("/api/testimonials")
        .set_json(json!({"name": "Grace", "role": "Mentor", "content": "Sharp and reliable."}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let created: Value = test::read_body_json(resp).await;

    let req = test::TestRequest::get().uri("/api/testimonials").to_request();
    let listed: Value = test::call_and_read_body_json(&app, req).await;

    let listed = listed.as_array().unwrap();
    assert!(listed.iter().any(|t| {
        t["id"] == created["id"]
            && t["name"] == "Grace"
            && t["role"] == "Mentor"
            && t["content"] == "Sharp and reliable."
    }));
}

#[actix_web::test]
async fn test_testimonial_requires_content() {
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(AppState::in_memory()))
            .configure(configure_routes),
    )
    .await;

    let req = test::TestRequest::post()
        .uri("/api/testimonials")
        .set_json(json!({"name": "Grace", "role": "Mentor", "content": ""}))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "Testimonial content is required");
}

#[actix_web::test]
async fn test_seeded_clubs_have_known_categories() {
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(seeded_state().await))
            .configure(configure_routes),
    )
    .await;

    let req = test::TestRequest::get().uri("/api/clubs").to_request();
    let clubs: Value = test::call_and_read_body_json(&app, req).await;

    let clubs = clubs.as_array().unwrap();
    assert!(!clubs.is_empty());
    assert!(
        clubs
            .iter()
            .all(|c| c["category"] == "main" || c["category"] == "other")
    );
}

#[actix_web::test]
async fn test_seeded_collections_are_listed() {
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(seeded_state().await))
            .configure(configure_routes),
    )
    .await;

    for (uri, expected) in [("/api/marketing", 6), ("/api/projects", 3)] {
        let req = test::TestRequest::get().uri(uri).to_request();
        let records: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(records.as_array().unwrap().len(), expected, "{uri}");
    }
}

#[actix_web::test]
async fn test_blog_posts_newest_first() {
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(seeded_state().await))
            .configure(configure_routes),
    )
    .await;

    let req = test::TestRequest::get().uri("/api/blog-posts").to_request();
    let posts: Value = test::call_and_read_body_json(&app, req).await;
    let posts = posts.as_array().unwrap().clone();

    let dates: Vec<&str> = posts
        .iter()
        .map(|p| p["publishedAt"].as_str().unwrap())
        .collect();
    let parsed: Vec<chrono::DateTime<chrono::Utc>> =
        dates.iter().map(|d| d.parse().unwrap()).collect();
    assert!(parsed.windows(2).all(|pair| pair[0] >= pair[1]));

    let req = test::TestRequest::get()
        .uri("/api/blog-posts/latest")
        .to_request();
    let latest: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(latest, posts[0]);
}

#[actix_web::test]
async fn test_latest_blog_post_is_null_when_empty() {
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(AppState::in_memory()))
            .configure(configure_routes),
    )
    .await;

    let req = test::TestRequest::get()
        .uri("/api/blog-posts/latest")
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert!(body.is_null());
}

#[actix_web::test]
async fn test_store_fault_is_generic_server_error() {
    let mut content = in_memory_repositories();
    content.clubs = Arc::new(UnreachableClubs);
    let state = AppState::with_repositories(content, StorageBackend::Memory);

    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(state))
            .configure(configure_routes),
    )
    .await;

    let req = test::TestRequest::get().uri("/api/clubs").to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body, json!({"message": "Internal Server Error"}));
}

#[actix_web::test]
async fn test_contact_schema_is_published() {
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(AppState::in_memory()))
            .configure(configure_routes),
    )
    .await;

    let req = test::TestRequest::get()
        .uri("/api/contact/schema")
        .to_request();
    let schema: Value = test::call_and_read_body_json(&app, req).await;

    for field in ["name", "email", "message"] {
        assert!(schema["properties"].get(field).is_some(), "{field}");
    }
}

#[actix_web::test]
async fn test_health_reports_storage() {
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(AppState::in_memory()))
            .configure(configure_routes),
    )
    .await;

    let req = test::TestRequest::get().uri("/api/health").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["status"], "ok");
    assert_eq!(body["storage"], "memory");
}

#[actix_web::test]
async fn test_unknown_api_route() {
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(AppState::in_memory()))
            .configure(configure_routes),
    )
    .await;

    let req = test::TestRequest::get().uri("/api/photos").to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "Not Found");
}
