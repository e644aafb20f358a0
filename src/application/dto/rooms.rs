use crate::domain::room::{Room, RoomType};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoomDto {
    pub id: String,
    pub number: String,
    pub room_type: RoomType,
    pub price: f64,
    pub capacity: u32,
    #[serde(default)]
    pub floor: Option<i32>,
    pub amenities: Vec<String>,
    #[serde(default)]
    pub description: Option<String>,
    pub is_available: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Room> for RoomDto {
    fn from(room: Room) -> Self {
        Self {
            id: room.id.into(),
            number: room.number.into_inner(),
            room_type: room.room_type,
            price: room.price.value(),
            capacity: room.capacity.value(),
            floor: room.floor,
            amenities: room.amenities,
            description: room.description,
            is_available: room.is_available,
            created_at: room.created_at,
            updated_at: room.updated_at,
        }
    }
}
