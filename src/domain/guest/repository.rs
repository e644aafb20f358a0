use crate::domain::errors::{DomainResult, Resource, UniqueConstraint};
use crate::domain::guest::entity::{Guest, GuestFilter};
use crate::domain::guest::value_objects::GuestId;
use async_trait::async_trait;

pub const GUEST_EMAIL_UNIQUE: UniqueConstraint = UniqueConstraint::new(Resource::Guest, &["email"]);

#[async_trait]
pub trait GuestRepository: Send + Sync {
    async fn insert(&self, guest: Guest) -> DomainResult<Guest>;
    async fn update(&self, guest: Guest) -> DomainResult<Guest>;
    /// Removes the guest together with their bookings.
    async fn delete(&self, id: GuestId) -> DomainResult<()>;
    async fn find_by_id(&self, id: GuestId) -> DomainResult<Option<Guest>>;
    async fn list(&self, filter: GuestFilter) -> DomainResult<Vec<Guest>>;
}
