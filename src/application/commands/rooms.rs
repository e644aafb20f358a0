// src/application/commands/rooms.rs
use crate::{
    application::{
        commands::optional_text,
        dto::RoomDto,
        error::{ApplicationError, ApplicationResult},
        ports::ClockPort,
    },
    domain::{
        errors::{Resource, ValidationErrors},
        id::EntityId,
        room::{
            Capacity, NewRoom, Price, Room, RoomChanges, RoomId, RoomNumber, RoomRepository,
            RoomType, value_objects::normalize_amenities,
        },
    },
};
use std::sync::Arc;

#[derive(Debug, Default)]
pub struct CreateRoomCommand {
    pub number: Option<String>,
    pub room_type: Option<String>,
    pub price: Option<f64>,
    pub capacity: Option<i64>,
    pub floor: Option<i32>,
    pub amenities: Option<Vec<String>>,
    pub description: Option<String>,
    pub is_available: Option<bool>,
}

#[derive(Debug)]
pub struct UpdateRoomCommand {
    pub id: RoomId,
    pub number: Option<String>,
    pub room_type: Option<String>,
    pub price: Option<f64>,
    pub capacity: Option<i64>,
    pub floor: Option<i32>,
    pub amenities: Option<Vec<String>>,
    pub description: Option<String>,
    pub is_available: Option<bool>,
}

pub struct DeleteRoomCommand {
    pub id: RoomId,
}

impl CreateRoomCommand {
    fn validate(self) -> Result<NewRoom, ValidationErrors> {
        let mut errors = ValidationErrors::new();

        let number = errors
            .required("number", self.number)
            .and_then(|value| errors.check(RoomNumber::new(value)));
        let room_type = errors
            .required("room_type", self.room_type)
            .and_then(|value| errors.check(RoomType::parse(&value)));
        let price = errors
            .required("price", self.price)
            .and_then(|value| errors.check(Price::new(value)));
        let capacity = errors
            .required("capacity", self.capacity)
            .and_then(|value| errors.check(Capacity::new(value)));

        let (Some(number), Some(room_type), Some(price), Some(capacity)) =
            (number, room_type, price, capacity)
        else {
            return Err(errors);
        };

        Ok(NewRoom {
            number,
            room_type,
            price,
            capacity,
            floor: self.floor,
            amenities: normalize_amenities(self.amenities.unwrap_or_default()),
            description: optional_text(self.description),
            is_available: self.is_available.unwrap_or(true),
        })
    }
}

impl UpdateRoomCommand {
    fn validate(self) -> Result<(RoomId, RoomChanges), ValidationErrors> {
        let mut errors = ValidationErrors::new();

        let changes = RoomChanges {
            number: errors.optional(self.number, RoomNumber::new),
            room_type: errors.optional(self.room_type, |value| RoomType::parse(&value)),
            price: errors.optional(self.price, Price::new),
            capacity: errors.optional(self.capacity, Capacity::new),
            floor: self.floor,
            amenities: self.amenities.map(normalize_amenities),
            description: optional_text(self.description),
            is_available: self.is_available,
        };

        if errors.is_empty() {
            Ok((self.id, changes))
        } else {
            Err(errors)
        }
    }
}

pub struct RoomCommandService {
    repo: Arc<dyn RoomRepository>,
    clock: Arc<ClockPort>,
}

impl RoomCommandService {
    pub fn new(repo: Arc<dyn RoomRepository>, clock: Arc<ClockPort>) -> Self {
        Self { repo, clock }
    }

    pub async fn create_room(&self, command: CreateRoomCommand) -> ApplicationResult<RoomDto> {
        let new_room = command.validate()?;
        let room = Room::create(RoomId::generate(), new_room, self.clock.now());

        let created = self.repo.insert(room).await?;
        tracing::info!(room_id = %created.id, number = %created.number, "room created");
        Ok(created.into())
    }

    pub async fn update_room(&self, command: UpdateRoomCommand) -> ApplicationResult<RoomDto> {
        let (id, changes) = command.validate()?;
        let mut room = self
            .repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found(Resource::Room, id))?;

        room.apply(changes, self.clock.now());
        let updated = self.repo.update(room).await?;
        Ok(updated.into())
    }

    pub async fn delete_room(&self, command: DeleteRoomCommand) -> ApplicationResult<()> {
        self.repo.delete(command.id).await?;
        tracing::info!(room_id = %command.id, "room deleted");
        Ok(())
    }
}
