use crate::{
    application::{
        dto::RoomDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        errors::{FieldViolation, Resource, ValidationErrors},
        room::{RoomFilter, RoomId, RoomRepository, RoomType},
    },
};
use std::sync::Arc;

#[derive(Debug, Default)]
pub struct ListRoomsQuery {
    pub room_type: Option<String>,
    pub is_available: Option<bool>,
    pub min_price: Option<f64>,
    pub max_price: Option<f64>,
}

pub struct GetRoomQuery {
    pub id: RoomId,
}

fn price_bound(field: &'static str, value: f64) -> Result<f64, FieldViolation> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(FieldViolation::new(field, format!("{field} must be a finite number")))
    }
}

impl ListRoomsQuery {
    fn into_filter(self) -> Result<RoomFilter, ValidationErrors> {
        let mut errors = ValidationErrors::new();
        let room_type = errors.optional(self.room_type, |value| RoomType::parse(&value));
        let min_price = errors.optional(self.min_price, |value| price_bound("min_price", value));
        let max_price = errors.optional(self.max_price, |value| price_bound("max_price", value));

        if let (Some(min), Some(max)) = (min_price, max_price) {
            if min > max {
                errors.push(FieldViolation::new(
                    "min_price",
                    "min_price cannot exceed max_price",
                ));
            }
        }

        if !errors.is_empty() {
            return Err(errors);
        }
        Ok(RoomFilter {
            room_type,
            is_available: self.is_available,
            min_price,
            max_price,
        })
    }
}

pub struct RoomQueryService {
    repo: Arc<dyn RoomRepository>,
}

impl RoomQueryService {
    pub fn new(repo: Arc<dyn RoomRepository>) -> Self {
        Self { repo }
    }

    pub async fn list_rooms(&self, query: ListRoomsQuery) -> ApplicationResult<Vec<RoomDto>> {
        let filter = query.into_filter()?;
        let rooms = self.repo.list(filter).await?;
        Ok(rooms.into_iter().map(Into::into).collect())
    }

    pub async fn get_room(&self, query: GetRoomQuery) -> ApplicationResult<RoomDto> {
        self.repo
            .find_by_id(query.id)
            .await?
            .map(Into::into)
            .ok_or_else(|| ApplicationError::not_found(Resource::Room, query.id))
    }
}
