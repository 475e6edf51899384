//! Credit transaction status constants, transition rules, and the
//! precondition checks for each lifecycle step.
//!
//! ```text
//! pending --approve--> approved --credit--> credited
//! pending --reject---> rejected
//! ```
//!
//! `rejected` and `credited` are terminal.

use rust_decimal::Decimal;

use crate::booking::STATUS_COMPLETED;
use crate::error::CoreError;

// ---------------------------------------------------------------------------
// Status constants
// ---------------------------------------------------------------------------

/// Submitted and awaiting institutional review.
pub const STATUS_PENDING: &str = "pending";
/// Approved by a reviewer; balance not yet applied.
pub const STATUS_APPROVED: &str = "approved";
/// Rejected by a reviewer.
pub const STATUS_REJECTED: &str = "rejected";
/// Balance applied to the student.
pub const STATUS_CREDITED: &str = "credited";

/// All valid credit transaction statuses.
pub const VALID_STATUSES: &[&str] = &[
    STATUS_PENDING,
    STATUS_APPROVED,
    STATUS_REJECTED,
    STATUS_CREDITED,
];

// ---------------------------------------------------------------------------
// Amounts and notes
// ---------------------------------------------------------------------------

/// Upper bound for a single booking's credit value.
pub const MAX_CREDIT_VALUE: i64 = 10;

/// Maximum length for reviewer notes (characters).
pub const MAX_REVIEW_NOTES_LENGTH: usize = 2_000;

/// Credit value assigned to a booking when none is given.
pub fn default_credit_value() -> Decimal {
    Decimal::new(5, 1)
}

/// Validate that a credit value is strictly positive and within bounds.
pub fn validate_credit_value(value: Decimal) -> Result<(), CoreError> {
    if value <= Decimal::ZERO {
        return Err(CoreError::Validation(format!(
            "Credit value must be greater than 0 (got {value})"
        )));
    }
    if value > Decimal::from(MAX_CREDIT_VALUE) {
        return Err(CoreError::Validation(format!(
            "Credit value must not exceed {MAX_CREDIT_VALUE} (got {value})"
        )));
    }
    Ok(())
}

/// Trim reviewer notes, collapsing blank input to `None`, and enforce the
/// length limit.
pub fn normalize_review_notes(notes: Option<&str>) -> Result<Option<String>, CoreError> {
    let Some(trimmed) = notes.map(str::trim).filter(|n| !n.is_empty()) else {
        return Ok(None);
    };
    if trimmed.chars().count() > MAX_REVIEW_NOTES_LENGTH {
        return Err(CoreError::Validation(format!(
            "Review notes exceed maximum length of {MAX_REVIEW_NOTES_LENGTH} characters"
        )));
    }
    Ok(Some(trimmed.to_string()))
}

/// Rejections must carry a non-blank explanation.
pub fn require_rejection_notes(notes: Option<&str>) -> Result<String, CoreError> {
    normalize_review_notes(notes)?.ok_or_else(|| {
        CoreError::Validation("Review notes are required when rejecting a transaction".into())
    })
}

// ---------------------------------------------------------------------------
// Status transitions
// ---------------------------------------------------------------------------

/// Returns the set of statuses that `from_status` may transition to.
pub fn valid_transitions(from_status: &str) -> &'static [&'static str] {
    match from_status {
        STATUS_PENDING => &[STATUS_APPROVED, STATUS_REJECTED],
        STATUS_APPROVED => &[STATUS_CREDITED],
        _ => &[],
    }
}

fn can_transition(current: &str, next: &str) -> bool {
    valid_transitions(current).contains(&next)
}

/// Validate that a status string is one of the known statuses.
pub fn validate_status(status: &str) -> Result<(), CoreError> {
    if VALID_STATUSES.contains(&status) {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "Invalid credit status '{status}'. Must be one of: {}",
            VALID_STATUSES.join(", ")
        )))
    }
}

// ---------------------------------------------------------------------------
// Lifecycle preconditions
// ---------------------------------------------------------------------------

/// A booking may be submitted for credit only once it is completed and
/// flagged as credit-eligible.
pub fn ensure_submittable(booking_status: &str, is_credit_eligible: bool) -> Result<(), CoreError> {
    if booking_status != STATUS_COMPLETED {
        return Err(CoreError::Validation(format!(
            "Booking must be completed before submitting for credit (status is '{booking_status}')"
        )));
    }
    if !is_credit_eligible {
        return Err(CoreError::Validation(
            "Booking is not eligible for academic credit".into(),
        ));
    }
    Ok(())
}

/// Check that a reviewer may move a transaction in `status` to `decision`
/// (`approved` or `rejected`). Only `pending` transactions qualify.
pub fn ensure_reviewable(status: &str, decision: &str) -> Result<(), CoreError> {
    if can_transition(status, decision) {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "Transaction has already been reviewed (status is '{status}')"
        )))
    }
}

/// Crediting requires an `approved` transaction that has never been
/// credited. Double-credit attempts are conflicts, anything else is a
/// validation failure.
pub fn ensure_creditable(status: &str, already_credited: bool) -> Result<(), CoreError> {
    if status == STATUS_CREDITED || already_credited {
        return Err(CoreError::Conflict(
            "Transaction has already been credited".into(),
        ));
    }
    if !can_transition(status, STATUS_CREDITED) {
        return Err(CoreError::Validation(format!(
            "Transaction must be approved before crediting (status is '{status}')"
        )));
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
