pub mod booking_detail;
pub mod bookings;
pub mod not_found;
