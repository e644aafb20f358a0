// tests/support/mocks.rs
use async_trait::async_trait;
use chrono::{DateTime, TimeZone, Utc};
use hotel_api::application::ports::time::Clock;
use hotel_api::domain::booking::{Booking, BookingFilter, BookingId, BookingRepository};
use hotel_api::domain::errors::{DomainError, DomainResult, Resource};
use hotel_api::domain::guest::{Guest, GuestFilter, GuestId, GuestRepository};
use hotel_api::domain::room::{Room, RoomFilter, RoomId, RoomRepository};

pub struct FixedClock;

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap()
    }
}

fn unavailable<T>() -> DomainResult<T> {
    Err(DomainError::Persistence(
        "database is locked: connection to /var/lib/hotel.db lost".into(),
    ))
}

/// Every call fails the way a lost database connection does.
pub struct UnavailableRoomRepo;

#[async_trait]
impl RoomRepository for UnavailableRoomRepo {
    async fn insert(&self, _room: Room) -> DomainResult<Room> {
        unavailable()
    }
    async fn update(&self, _room: Room) -> DomainResult<Room> {
        unavailable()
    }
    async fn delete(&self, _id: RoomId) -> DomainResult<()> {
        unavailable()
    }
    async fn find_by_id(&self, _id: RoomId) -> DomainResult<Option<Room>> {
        unavailable()
    }
    async fn list(&self, _filter: RoomFilter) -> DomainResult<Vec<Room>> {
        unavailable()
    }
}

/// Panics on listing, to exercise panic recovery.
pub struct PanickingRoomRepo;

#[async_trait]
impl RoomRepository for PanickingRoomRepo {
    async fn insert(&self, _room: Room) -> DomainResult<Room> {
        unavailable()
    }
    async fn update(&self, _room: Room) -> DomainResult<Room> {
        unavailable()
    }
    async fn delete(&self, _id: RoomId) -> DomainResult<()> {
        unavailable()
    }
    async fn find_by_id(&self, _id: RoomId) -> DomainResult<Option<Room>> {
        Ok(None)
    }
    async fn list(&self, _filter: RoomFilter) -> DomainResult<Vec<Room>> {
        panic!("room index corrupted");
    }
}

pub struct EmptyGuestRepo;

#[async_trait]
impl GuestRepository for EmptyGuestRepo {
    async fn insert(&self, guest: Guest) -> DomainResult<Guest> {
        Ok(guest)
    }
    async fn update(&self, guest: Guest) -> DomainResult<Guest> {
        Ok(guest)
    }
    async fn delete(&self, id: GuestId) -> DomainResult<()> {
        Err(DomainError::not_found(Resource::Guest, id))
    }
    async fn find_by_id(&self, _id: GuestId) -> DomainResult<Option<Guest>> {
        Ok(None)
    }
    async fn list(&self, _filter: GuestFilter) -> DomainResult<Vec<Guest>> {
        Ok(Vec::new())
    }
}

pub struct EmptyBookingRepo;

#[async_trait]
impl BookingRepository for EmptyBookingRepo {
    async fn insert(&self, booking: Booking) -> DomainResult<Booking> {
        Ok(booking)
    }
    async fn update(&self, booking: Booking) -> DomainResult<Booking> {
        Ok(booking)
    }
    async fn delete(&self, id: BookingId) -> DomainResult<()> {
        Err(DomainError::not_found(Resource::Booking, id))
    }
    async fn find_by_id(&self, _id: BookingId) -> DomainResult<Option<Booking>> {
        Ok(None)
    }
    async fn list(&self, _filter: BookingFilter) -> DomainResult<Vec<Booking>> {
        Ok(Vec::new())
    }
}
