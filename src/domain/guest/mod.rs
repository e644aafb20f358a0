pub mod entity;
pub mod repository;
pub mod value_objects;

pub use entity::{Guest, GuestChanges, GuestFilter, NewGuest};
pub use repository::{GUEST_EMAIL_UNIQUE, GuestRepository};
pub use value_objects::{Email, GuestId, PersonName, Phone};
