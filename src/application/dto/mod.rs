pub mod bookings;
pub mod guests;
pub mod rooms;

pub use bookings::BookingDto;
pub use guests::GuestDto;
pub use rooms::RoomDto;
