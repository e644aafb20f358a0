use crate::{
    application::{
        dto::BookingDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        booking::{BookingFilter, BookingId, BookingRepository, BookingStatus},
        errors::{Resource, ValidationErrors},
        guest::GuestId,
        id::EntityId,
        room::RoomId,
    },
};
use std::sync::Arc;

#[derive(Debug, Default)]
pub struct ListBookingsQuery {
    pub status: Option<String>,
    pub room_id: Option<String>,
    pub guest_id: Option<String>,
}

pub struct GetBookingQuery {
    pub id: BookingId,
}

pub struct BookingQueryService {
    repo: Arc<dyn BookingRepository>,
}

impl BookingQueryService {
    pub fn new(repo: Arc<dyn BookingRepository>) -> Self {
        Self { repo }
    }

    pub async fn list_bookings(
        &self,
        query: ListBookingsQuery,
    ) -> ApplicationResult<Vec<BookingDto>> {
        let status = match query.status {
            Some(value) => Some(BookingStatus::parse(&value).map_err(ValidationErrors::from)?),
            None => None,
        };
        // Identifiers in the query string are malformed identifiers, not field violations.
        let room_id = query.room_id.as_deref().map(RoomId::parse).transpose()?;
        let guest_id = query.guest_id.as_deref().map(GuestId::parse).transpose()?;

        let bookings = self
            .repo
            .list(BookingFilter {
                status,
                room_id,
                guest_id,
            })
            .await?;
        Ok(bookings.into_iter().map(Into::into).collect())
    }

    pub async fn get_booking(&self, query: GetBookingQuery) -> ApplicationResult<BookingDto> {
        self.repo
            .find_by_id(query.id)
            .await?
            .map(Into::into)
            .ok_or_else(|| ApplicationError::not_found(Resource::Booking, query.id))
    }
}
