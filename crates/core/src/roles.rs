//! Well-known user role names and the credit-review permission check.
//!
//! These must match the `CHECK` constraint on `users.role` in
//! `20260301000002_create_users.sql`.

use crate::error::CoreError;

pub const ROLE_STUDENT: &str = "student";
pub const ROLE_TUTOR: &str = "tutor";
pub const ROLE_FACULTY_COORDINATOR: &str = "faculty_coordinator";
pub const ROLE_INSTITUTION_ADMIN: &str = "institution_admin";
pub const ROLE_ADMIN: &str = "admin";

/// All valid role names.
pub const VALID_ROLES: &[&str] = &[
    ROLE_STUDENT,
    ROLE_TUTOR,
    ROLE_FACULTY_COORDINATOR,
    ROLE_INSTITUTION_ADMIN,
    ROLE_ADMIN,
];

/// Roles allowed to approve or reject credit transactions.
pub const CREDIT_REVIEWER_ROLES: &[&str] =
    &[ROLE_FACULTY_COORDINATOR, ROLE_INSTITUTION_ADMIN, ROLE_ADMIN];

/// Validate that a role string is one of the known roles.
pub fn validate_role(role: &str) -> Result<(), CoreError> {
    if VALID_ROLES.contains(&role) {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "Invalid role '{role}'. Must be one of: {}",
            VALID_ROLES.join(", ")
        )))
    }
}

pub fn can_review_credits(role: &str) -> bool {
    CREDIT_REVIEWER_ROLES.contains(&role)
}

/// Reject with 403 unless `role` may review credit transactions.
pub fn ensure_credit_reviewer(role: &str) -> Result<(), CoreError> {
    if can_review_credits(role) {
        Ok(())
    } else {
        Err(CoreError::Forbidden(format!(
            "Role '{role}' is not authorized to review credit transactions"
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn all_roles_are_valid() {
        for role in VALID_ROLES {
            assert!(validate_role(role).is_ok(), "Role '{role}' should be valid");
        }
    }

    #[test]
    fn unknown_role_is_invalid() {
        assert!(validate_role("superuser").is_err());
        assert!(validate_role("").is_err());
        assert!(validate_role("Admin").is_err());
    }

    #[test]
    fn reviewer_roles_can_review() {
        assert!(can_review_credits(ROLE_FACULTY_COORDINATOR));
        assert!(can_review_credits(ROLE_INSTITUTION_ADMIN));
        assert!(can_review_credits(ROLE_ADMIN));
    }

    #[test]
    fn students_and_tutors_cannot_review() {
        assert!(!can_review_credits(ROLE_STUDENT));
        assert!(!can_review_credits(ROLE_TUTOR));
    }

    #[test]
    fn ensure_credit_reviewer_returns_forbidden() {
        assert_matches!(
            ensure_credit_reviewer(ROLE_STUDENT),
            Err(CoreError::Forbidden(msg)) if msg.contains("student")
        );
        assert!(ensure_credit_reviewer(ROLE_ADMIN).is_ok());
    }
}
