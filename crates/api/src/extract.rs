//! Request extractors that report rejections through [`AppError`].
//!
//! Axum's stock `Json`/`Query`/`Path` extractors reject with plain-text bodies and 415/422
//! statuses; these wrappers keep every error in the `{error, message}`
//! envelope with a 400.

use axum::extract::{FromRequest, FromRequestParts};
use tutorhub_core::error::CoreError;

use crate::error::AppError;

/// JSON body extractor. Malformed or mistyped bodies become `400 BAD_REQUEST`.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct ApiJson<T>(pub T);

/// Query-string extractor. Unparseable parameters become `400 BAD_REQUEST`.
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Query), rejection(AppError))]
pub struct ApiQuery<T>(pub T);

/// Path extractor. Non-numeric ids become `400 BAD_REQUEST`.
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(AppError))]
pub struct ApiPath<T>(pub T);

/// Unwrap a required request field, naming it in the validation error.
pub fn require_field<T>(value: Option<T>, name: &str) -> Result<T, CoreError> {
    value.ok_or_else(|| CoreError::Validation(format!("{name} is required")))
}
