// src/presentation/http/controllers/mod.rs
pub mod bookings;
pub mod guests;
pub mod rooms;
pub mod system;
