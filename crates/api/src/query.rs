//! Query parameter types for list endpoints.
//!
//! Limits and offsets are clamped in the handlers via
//! `tutorhub_core::pagination`.

use serde::Deserialize;
use tutorhub_core::types::DbId;

/// `GET /credits?userId&institutionId&status&academicYear&limit&offset`
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreditListParams {
    pub user_id: Option<DbId>,
    pub institution_id: Option<DbId>,
    pub status: Option<String>,
    pub academic_year: Option<String>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

/// `GET /bookings?studentId&tutorId&status&limit&offset`
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingListParams {
    pub student_id: Option<DbId>,
    pub tutor_id: Option<DbId>,
    pub status: Option<String>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

/// `GET /users?institutionId&limit&offset`
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserListParams {
    pub institution_id: Option<DbId>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}
