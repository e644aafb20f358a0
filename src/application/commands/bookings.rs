// src/application/commands/bookings.rs
use crate::{
    application::{
        commands::optional_text,
        dto::BookingDto,
        error::{ApplicationError, ApplicationResult},
        ports::ClockPort,
    },
    domain::{
        booking::{
            Booking, BookingChanges, BookingId, BookingRepository, BookingStatus, GuestCount,
            NewBooking, Stay, value_objects::parse_date,
        },
        errors::{FieldViolation, Resource, ValidationErrors},
        guest::{GuestId, GuestRepository},
        id::EntityId,
        room::{Room, RoomId, RoomRepository},
    },
};
use chrono::NaiveDate;
use std::sync::Arc;

#[derive(Debug, Default)]
pub struct CreateBookingCommand {
    pub room_id: Option<String>,
    pub guest_id: Option<String>,
    pub check_in: Option<String>,
    pub check_out: Option<String>,
    pub number_of_guests: Option<i64>,
    pub status: Option<String>,
    pub special_requests: Option<String>,
}

#[derive(Debug)]
pub struct UpdateBookingCommand {
    pub id: BookingId,
    pub room_id: Option<String>,
    pub guest_id: Option<String>,
    pub check_in: Option<String>,
    pub check_out: Option<String>,
    pub number_of_guests: Option<i64>,
    pub status: Option<String>,
    pub special_requests: Option<String>,
}

pub struct DeleteBookingCommand {
    pub id: BookingId,
}

/// Syntactically valid update; dates are checked against the stored stay later.
struct BookingPatch {
    room_id: Option<RoomId>,
    guest_id: Option<GuestId>,
    check_in: Option<NaiveDate>,
    check_out: Option<NaiveDate>,
    number_of_guests: Option<GuestCount>,
    status: Option<BookingStatus>,
    special_requests: Option<String>,
}

fn parse_reference<T: EntityId>(field: &'static str, value: &str) -> Result<T, FieldViolation> {
    T::parse(value)
        .map_err(|_| FieldViolation::new(field, format!("{field} must be a valid identifier")))
}

impl CreateBookingCommand {
    fn validate(self) -> Result<NewBooking, ValidationErrors> {
        let mut errors = ValidationErrors::new();

        let room_id = errors
            .required("room_id", self.room_id)
            .and_then(|value| errors.check(parse_reference::<RoomId>("room_id", &value)));
        let guest_id = errors
            .required("guest_id", self.guest_id)
            .and_then(|value| errors.check(parse_reference::<GuestId>("guest_id", &value)));
        let check_in = errors
            .required("check_in", self.check_in)
            .and_then(|value| errors.check(parse_date("check_in", &value)));
        let check_out = errors
            .required("check_out", self.check_out)
            .and_then(|value| errors.check(parse_date("check_out", &value)));
        let stay = match (check_in, check_out) {
            (Some(check_in), Some(check_out)) => errors.check(Stay::new(check_in, check_out)),
            _ => None,
        };
        let number_of_guests = errors
            .required("number_of_guests", self.number_of_guests)
            .and_then(|value| errors.check(GuestCount::new(value)));
        let status = errors.optional(self.status, |value| BookingStatus::parse(&value));

        let (Some(room_id), Some(guest_id), Some(stay), Some(number_of_guests)) =
            (room_id, guest_id, stay, number_of_guests)
        else {
            return Err(errors);
        };
        if !errors.is_empty() {
            return Err(errors);
        }

        Ok(NewBooking {
            room_id,
            guest_id,
            stay,
            number_of_guests,
            status: status.unwrap_or_default(),
            special_requests: optional_text(self.special_requests),
        })
    }
}

impl UpdateBookingCommand {
    fn validate(self) -> Result<(BookingId, BookingPatch), ValidationErrors> {
        let mut errors = ValidationErrors::new();

        let patch = BookingPatch {
            room_id: errors.optional(self.room_id, |value| parse_reference("room_id", &value)),
            guest_id: errors.optional(self.guest_id, |value| parse_reference("guest_id", &value)),
            check_in: errors.optional(self.check_in, |value| parse_date("check_in", &value)),
            check_out: errors.optional(self.check_out, |value| parse_date("check_out", &value)),
            number_of_guests: errors.optional(self.number_of_guests, GuestCount::new),
            status: errors.optional(self.status, |value| BookingStatus::parse(&value)),
            special_requests: optional_text(self.special_requests),
        };

        if errors.is_empty() {
            Ok((self.id, patch))
        } else {
            Err(errors)
        }
    }
}

fn ensure_capacity(room: &Room, guests: GuestCount) -> Result<(), ValidationErrors> {
    if guests.value() > room.capacity.value() {
        return Err(ValidationErrors::single(
            "number_of_guests",
            format!(
                "number_of_guests exceeds room capacity of {}",
                room.capacity.value()
            ),
        ));
    }
    Ok(())
}

pub struct BookingCommandService {
    repo: Arc<dyn BookingRepository>,
    room_repo: Arc<dyn RoomRepository>,
    guest_repo: Arc<dyn GuestRepository>,
    clock: Arc<ClockPort>,
}

impl BookingCommandService {
    pub fn new(
        repo: Arc<dyn BookingRepository>,
        room_repo: Arc<dyn RoomRepository>,
        guest_repo: Arc<dyn GuestRepository>,
        clock: Arc<ClockPort>,
    ) -> Self {
        Self {
            repo,
            room_repo,
            guest_repo,
            clock,
        }
    }

    async fn load_room(&self, id: RoomId) -> ApplicationResult<Room> {
        self.room_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found(Resource::Room, id))
    }

    async fn ensure_guest(&self, id: GuestId) -> ApplicationResult<()> {
        self.guest_repo
            .find_by_id(id)
            .await?
            .map(|_| ())
            .ok_or_else(|| ApplicationError::not_found(Resource::Guest, id))
    }

    pub async fn create_booking(
        &self,
        command: CreateBookingCommand,
    ) -> ApplicationResult<BookingDto> {
        let new_booking = command.validate()?;
        let room = self.load_room(new_booking.room_id).await?;
        self.ensure_guest(new_booking.guest_id).await?;
        ensure_capacity(&room, new_booking.number_of_guests)?;

        let booking = Booking::create(
            BookingId::generate(),
            new_booking,
            room.price,
            self.clock.now(),
        )
        .map_err(ValidationErrors::from)?;
        let created = self.repo.insert(booking).await?;
        tracing::info!(
            booking_id = %created.id,
            room_id = %created.room_id,
            guest_id = %created.guest_id,
            "booking created"
        );
        Ok(created.into())
    }

    pub async fn update_booking(
        &self,
        command: UpdateBookingCommand,
    ) -> ApplicationResult<BookingDto> {
        let (id, patch) = command.validate()?;
        let mut booking = self
            .repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found(Resource::Booking, id))?;

        let stay = match (patch.check_in, patch.check_out) {
            (None, None) => None,
            (check_in, check_out) => Some(
                Stay::new(
                    check_in.unwrap_or(booking.stay.check_in()),
                    check_out.unwrap_or(booking.stay.check_out()),
                )
                .map_err(ValidationErrors::from)?,
            ),
        };

        let changes = BookingChanges {
            room_id: patch.room_id,
            guest_id: patch.guest_id,
            stay,
            number_of_guests: patch.number_of_guests,
            status: patch.status,
            special_requests: patch.special_requests,
        };

        if let Some(guest_id) = changes.guest_id {
            self.ensure_guest(guest_id).await?;
        }

        let rate = if changes.reprices() || changes.number_of_guests.is_some() {
            let room = self
                .load_room(changes.room_id.unwrap_or(booking.room_id))
                .await?;
            ensure_capacity(
                &room,
                changes.number_of_guests.unwrap_or(booking.number_of_guests),
            )?;
            Some(room.price)
        } else {
            None
        };

        booking
            .apply(changes, rate, self.clock.now())
            .map_err(ValidationErrors::from)?;
        let updated = self.repo.update(booking).await?;
        Ok(updated.into())
    }

    pub async fn delete_booking(&self, command: DeleteBookingCommand) -> ApplicationResult<()> {
        self.repo.delete(command.id).await?;
        tracing::info!(booking_id = %command.id, "booking deleted");
        Ok(())
    }
}
