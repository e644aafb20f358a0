pub mod entity;
pub mod repository;
pub mod value_objects;

pub use entity::{Booking, BookingChanges, BookingFilter, NewBooking};
pub use repository::{BOOKING_SLOT_UNIQUE, BookingRepository};
pub use value_objects::{BookingId, BookingStatus, GuestCount, Stay};
