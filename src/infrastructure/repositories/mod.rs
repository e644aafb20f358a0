// src/infrastructure/repositories/mod.rs
mod error;
mod sqlite_booking;
mod sqlite_guest;
mod sqlite_room;

pub use sqlite_booking::SqliteBookingRepository;
pub use sqlite_guest::SqliteGuestRepository;
pub use sqlite_room::SqliteRoomRepository;
