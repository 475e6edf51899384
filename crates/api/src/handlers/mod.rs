pub mod bookings;
pub mod credits;
pub mod institutions;
pub mod users;
