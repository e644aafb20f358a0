use crate::domain::booking::entity::{Booking, BookingFilter};
use crate::domain::booking::value_objects::BookingId;
use crate::domain::errors::{DomainResult, Resource, UniqueConstraint};
use async_trait::async_trait;

pub const BOOKING_SLOT_UNIQUE: UniqueConstraint =
    UniqueConstraint::new(Resource::Booking, &["room_id", "check_in"]);

#[async_trait]
pub trait BookingRepository: Send + Sync {
    async fn insert(&self, booking: Booking) -> DomainResult<Booking>;
    async fn update(&self, booking: Booking) -> DomainResult<Booking>;
    async fn delete(&self, id: BookingId) -> DomainResult<()>;
    async fn find_by_id(&self, id: BookingId) -> DomainResult<Option<Booking>>;
    async fn list(&self, filter: BookingFilter) -> DomainResult<Vec<Booking>>;
}
