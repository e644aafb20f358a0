// src/domain/room/entity.rs
use crate::domain::room::value_objects::{Capacity, Price, RoomId, RoomNumber, RoomType};
use chrono::{DateTime, Utc};

#[derive(Debug, Clone)]
pub struct Room {
    pub id: RoomId,
    pub number: RoomNumber,
    pub room_type: RoomType,
    pub price: Price,
    pub capacity: Capacity,
    pub floor: Option<i32>,
    pub amenities: Vec<String>,
    pub description: Option<String>,
    pub is_available: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewRoom {
    pub number: RoomNumber,
    pub room_type: RoomType,
    pub price: Price,
    pub capacity: Capacity,
    pub floor: Option<i32>,
    pub amenities: Vec<String>,
    pub description: Option<String>,
    pub is_available: bool,
}

/// Validated partial update. `None` leaves the field untouched.
#[derive(Debug, Clone, Default)]
pub struct RoomChanges {
    pub number: Option<RoomNumber>,
    pub room_type: Option<RoomType>,
    pub price: Option<Price>,
    pub capacity: Option<Capacity>,
    pub floor: Option<i32>,
    pub amenities: Option<Vec<String>>,
    pub description: Option<String>,
    pub is_available: Option<bool>,
}

impl Room {
    pub fn create(id: RoomId, new: NewRoom, now: DateTime<Utc>) -> Self {
        Self {
            id,
            number: new.number,
            room_type: new.room_type,
            price: new.price,
            capacity: new.capacity,
            floor: new.floor,
            amenities: new.amenities,
            description: new.description,
            is_available: new.is_available,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn apply(&mut self, changes: RoomChanges, now: DateTime<Utc>) {
        let RoomChanges {
            number,
            room_type,
            price,
            capacity,
            floor,
            amenities,
            description,
            is_available,
        } = changes;

        if let Some(number) = number {
            self.number = number;
        }
        if let Some(room_type) = room_type {
            self.room_type = room_type;
        }
        if let Some(price) = price {
            self.price = price;
        }
        if let Some(capacity) = capacity {
            self.capacity = capacity;
        }
        if floor.is_some() {
            self.floor = floor;
        }
        if let Some(amenities) = amenities {
            self.amenities = amenities;
        }
        if description.is_some() {
            self.description = description;
        }
        if let Some(is_available) = is_available {
            self.is_available = is_available;
        }
        self.updated_at = now;
    }
}

#[derive(Debug, Clone, Default)]
pub struct RoomFilter {
    pub room_type: Option<RoomType>,
    pub is_available: Option<bool>,
    pub min_price: Option<f64>,
    pub max_price: Option<f64>,
}
