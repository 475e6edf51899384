//! Row models and request DTOs, one module per table.
//!
//! Rows derive `FromRow` + `Serialize`; DTOs derive `Deserialize`. All JSON
//! uses camelCase field names.

pub mod booking;
pub mod credit_transaction;
pub mod institution;
pub mod user;
