pub mod booking;
pub mod errors;
pub mod guest;
pub mod id;
pub mod room;
