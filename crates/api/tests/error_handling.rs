//! Tests for `AppError` → HTTP response mapping.
//!
//! Most of these call `IntoResponse` directly on `AppError` values. The
//! constraint tests at the bottom provoke real Postgres errors through the
//! repositories so the `uq_`/`ck_` classification runs on genuine driver
//! errors.

use axum::http::StatusCode;
use axum::response::IntoResponse;
use http_body_util::BodyExt;
use tutorhub_api::error::AppError;
use tutorhub_core::error::CoreError;
use tutorhub_db::models::booking::CreateBooking;
use tutorhub_db::models::user::CreateUser;
use tutorhub_db::repositories::{BookingRepo, UserRepo};

/// Convert an `AppError` into its status code and parsed JSON body.
async fn error_to_response(err: AppError) -> (StatusCode, serde_json::Value) {
    let response = err.into_response();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    (status, json)
}

#[tokio::test]
async fn not_found_error_returns_404() {
    let err = AppError::Core(CoreError::NotFound {
        entity: "CreditTransaction",
        id: 42,
    });

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["error"], "NOT_FOUND");
    assert_eq!(json["message"], "CreditTransaction with id 42 not found");
}

#[tokio::test]
async fn bad_request_error_returns_400() {
    let err = AppError::BadRequest("expected value at line 1 column 1".into());

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"], "BAD_REQUEST");
    assert_eq!(json["message"], "expected value at line 1 column 1");
}

#[tokio::test]
async fn validation_error_returns_400() {
    let err = AppError::Core(CoreError::Validation("bookingId is required".into()));

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"], "VALIDATION_ERROR");
    assert_eq!(json["message"], "bookingId is required");
}

#[tokio::test]
async fn conflict_error_returns_409() {
    let err = AppError::Core(CoreError::Conflict(
        "Transaction has already been credited".into(),
    ));

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(json["error"], "CONFLICT");
    assert_eq!(json["message"], "Transaction has already been credited");
}

#[tokio::test]
async fn forbidden_error_returns_403() {
    let err = AppError::Core(CoreError::Forbidden("Role 'student' may not review".into()));

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(json["error"], "FORBIDDEN");
}

#[tokio::test]
async fn internal_error_returns_500_and_sanitizes_message() {
    let err = AppError::InternalError("secret database credentials leaked".into());

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["error"], "INTERNAL_ERROR");
    assert!(
        !json.to_string().contains("secret"),
        "Internal error response must not leak details"
    );
    assert_eq!(json["message"], "An internal error occurred");
}

#[tokio::test]
async fn row_not_found_maps_to_404() {
    let (status, json) = error_to_response(AppError::Database(sqlx::Error::RowNotFound)).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["error"], "NOT_FOUND");
}

#[tokio::test]
async fn pool_errors_map_to_sanitized_500() {
    let (status, json) = error_to_response(AppError::Database(sqlx::Error::PoolTimedOut)).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["message"], "An internal error occurred");
}

// ---------------------------------------------------------------------------
// Constraint violations from a live database
// ---------------------------------------------------------------------------

fn user(email: &str, role: &str) -> CreateUser {
    CreateUser {
        name: "Sam".to_string(),
        email: email.to_string(),
        role: Some(role.to_string()),
        institution_id: None,
        academic_year: None,
    }
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn check_violation_maps_to_400_validation_error(pool: sqlx::PgPool) {
    let student = UserRepo::create(&pool, &user("sam@northfield.edu", "student"))
        .await
        .unwrap();

    // The handler rejects this pair before it reaches the database, so go
    // straight to the repository to hit ck_bookings_distinct_parties.
    let err = BookingRepo::create(
        &pool,
        &CreateBooking {
            student_id: student.id,
            tutor_id: student.id,
            subject: "Linear algebra".to_string(),
            scheduled_at: "2026-11-02T15:00:00Z".parse().unwrap(),
            duration_minutes: None,
            is_credit_eligible: Some(true),
            credit_value: None,
        },
    )
    .await
    .unwrap_err();

    let (status, json) = error_to_response(AppError::Database(err)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"], "VALIDATION_ERROR");
    assert_eq!(
        json["message"],
        "Value violates check constraint: ck_bookings_distinct_parties"
    );
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn unique_violation_maps_to_409_conflict(pool: sqlx::PgPool) {
    UserRepo::create(&pool, &user("sam@northfield.edu", "student"))
        .await
        .unwrap();
    let err = UserRepo::create(&pool, &user("sam@northfield.edu", "tutor"))
        .await
        .unwrap_err();

    let (status, json) = error_to_response(AppError::Database(err)).await;

    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(json["error"], "CONFLICT");
    assert_eq!(
        json["message"],
        "Duplicate value violates unique constraint: uq_users_email"
    );
}
