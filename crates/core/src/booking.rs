//! Booking status constants and validation.

use crate::error::CoreError;

pub const STATUS_PENDING: &str = "pending";
pub const STATUS_CONFIRMED: &str = "confirmed";
pub const STATUS_COMPLETED: &str = "completed";
pub const STATUS_CANCELLED: &str = "cancelled";

/// All valid booking statuses.
pub const VALID_STATUSES: &[&str] = &[
    STATUS_PENDING,
    STATUS_CONFIRMED,
    STATUS_COMPLETED,
    STATUS_CANCELLED,
];

/// Sessions longer than a working day are almost certainly data-entry errors.
pub const MAX_DURATION_MINUTES: i32 = 480;

/// Maximum length for the booking subject (characters).
pub const MAX_SUBJECT_LENGTH: usize = 200;

/// Returns the set of statuses that `from_status` may transition to.
///
/// - `pending`   -> `confirmed`, `cancelled`
/// - `confirmed` -> `completed`, `cancelled`
/// - `completed` and `cancelled` are terminal.
pub fn valid_transitions(from_status: &str) -> &'static [&'static str] {
    match from_status {
        STATUS_PENDING => &[STATUS_CONFIRMED, STATUS_CANCELLED],
        STATUS_CONFIRMED => &[STATUS_COMPLETED, STATUS_CANCELLED],
        _ => &[],
    }
}

/// Validate that a status transition from `current` to `next` is allowed.
pub fn validate_transition(current: &str, next: &str) -> Result<(), CoreError> {
    let allowed = valid_transitions(current);
    if allowed.contains(&next) {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "Cannot transition booking from '{current}' to '{next}'. \
             Allowed transitions: {allowed:?}"
        )))
    }
}

pub fn validate_status(status: &str) -> Result<(), CoreError> {
    if VALID_STATUSES.contains(&status) {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "Invalid booking status '{status}'. Must be one of: {}",
            VALID_STATUSES.join(", ")
        )))
    }
}

pub fn validate_duration(minutes: i32) -> Result<(), CoreError> {
    if minutes <= 0 || minutes > MAX_DURATION_MINUTES {
        return Err(CoreError::Validation(format!(
            "Duration must be between 1 and {MAX_DURATION_MINUTES} minutes (got {minutes})"
        )));
    }
    Ok(())
}

pub fn validate_subject(subject: &str) -> Result<(), CoreError> {
    let len = subject.trim().chars().count();
    if len == 0 {
        return Err(CoreError::Validation("Subject must not be empty".into()));
    }
    if len > MAX_SUBJECT_LENGTH {
        return Err(CoreError::Validation(format!(
            "Subject exceeds maximum length of {MAX_SUBJECT_LENGTH} characters"
        )));
    }
    Ok(())
}
