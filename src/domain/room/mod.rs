pub mod entity;
pub mod repository;
pub mod value_objects;

pub use entity::{NewRoom, Room, RoomChanges, RoomFilter};
pub use repository::{ROOM_NUMBER_UNIQUE, RoomRepository};
pub use value_objects::{Capacity, Price, RoomId, RoomNumber, RoomType};
