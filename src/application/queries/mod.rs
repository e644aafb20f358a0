pub mod bookings;
pub mod guests;
pub mod rooms;
