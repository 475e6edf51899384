#![allow(dead_code)]

use axum::body::Body;
use axum::http::{Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::Value;
use sqlx::PgPool;
use tower::ServiceExt;

use tutorhub_api::config::ServerConfig;
use tutorhub_api::router::build_app_router;
use tutorhub_api::state::AppState;

/// Build a test `ServerConfig` with safe defaults.
///
/// The database URL is unused: tests hand the router a pool provisioned by
/// `#[sqlx::test]`.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        database_url: String::new(),
        db_max_connections: 5,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
    }
}

/// Build the full application router, middleware included, over `pool`.
pub fn build_test_app(pool: PgPool) -> Router {
    build_app_router(AppState { pool }, &test_config()).expect("test config builds a router")
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn post_json(app: Router, uri: &str, body: Value) -> Response<Body> {
    post_raw(app, uri, body.to_string()).await
}

/// POST an arbitrary string as `application/json` (for malformed-body tests).
pub async fn post_raw(app: Router, uri: &str, body: String) -> Response<Body> {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn post_empty(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn body_json(response: Response<Body>) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

// ---------------------------------------------------------------------------
// Fixtures
// ---------------------------------------------------------------------------

pub async fn insert_institution(pool: &PgPool, name: &str) -> i64 {
    let row: (i64,) = sqlx::query_as("INSERT INTO institutions (name) VALUES ($1) RETURNING id")
        .bind(name)
        .fetch_one(pool)
        .await
        .unwrap();
    row.0
}

/// Insert a user with an explicit id so scenarios can refer to fixed ids.
pub async fn insert_user(
    pool: &PgPool,
    id: i64,
    role: &str,
    institution_id: Option<i64>,
    academic_year: Option<&str>,
) {
    sqlx::query(
        "INSERT INTO users (id, name, email, role, institution_id, academic_year)
         VALUES ($1, $2, $3, $4, $5, $6)",
    )
    .bind(id)
    .bind(format!("User {id}"))
    .bind(format!("user{id}@example.com"))
    .bind(role)
    .bind(institution_id)
    .bind(academic_year)
    .execute(pool)
    .await
    .unwrap();
}

/// Insert a booking with an explicit id, status, and credit settings.
pub async fn insert_booking(
    pool: &PgPool,
    id: i64,
    student_id: i64,
    tutor_id: i64,
    status: &str,
    is_credit_eligible: bool,
) {
    sqlx::query(
        "INSERT INTO bookings
            (id, student_id, tutor_id, subject, scheduled_at, status, is_credit_eligible,
             credit_value)
         VALUES ($1, $2, $3, 'Linear Algebra', NOW(), $4, $5, 0.5)",
    )
    .bind(id)
    .bind(student_id)
    .bind(tutor_id)
    .bind(status)
    .bind(is_credit_eligible)
    .execute(pool)
    .await
    .unwrap();
}
