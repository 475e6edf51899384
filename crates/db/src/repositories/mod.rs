//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async methods that
//! accept `&PgPool` as the first argument.

pub mod booking_repo;
pub mod credit_transaction_repo;
pub mod institution_repo;
pub mod user_repo;

pub use booking_repo::BookingRepo;
pub use credit_transaction_repo::CreditTransactionRepo;
pub use institution_repo::InstitutionRepo;
pub use user_repo::UserRepo;
