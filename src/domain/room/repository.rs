use crate::domain::errors::{DomainResult, Resource, UniqueConstraint};
use crate::domain::room::entity::{Room, RoomFilter};
use crate::domain::room::value_objects::RoomId;
use async_trait::async_trait;

pub const ROOM_NUMBER_UNIQUE: UniqueConstraint = UniqueConstraint::new(Resource::Room, &["number"]);

#[async_trait]
pub trait RoomRepository: Send + Sync {
    async fn insert(&self, room: Room) -> DomainResult<Room>;
    /// Fails with `NotFound` when no row carries `room.id`.
    async fn update(&self, room: Room) -> DomainResult<Room>;
    /// Removes the room together with its bookings.
    async fn delete(&self, id: RoomId) -> DomainResult<()>;
    async fn find_by_id(&self, id: RoomId) -> DomainResult<Option<Room>>;
    async fn list(&self, filter: RoomFilter) -> DomainResult<Vec<Room>>;
}
