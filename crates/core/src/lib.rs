//! Domain rules for the TutorHub credits service.
//!
//! Everything here is pure: status tables, role checks, validation helpers.
//! The `db` and `api` crates call into these so that the same rules apply
//! whether a request arrives over HTTP or a test drives a repository.

pub mod booking;
pub mod credit;
pub mod error;
pub mod pagination;
pub mod roles;
pub mod types;
