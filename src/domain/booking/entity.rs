// src/domain/booking/entity.rs
use crate::domain::booking::value_objects::{BookingId, BookingStatus, GuestCount, Stay};
use crate::domain::guest::GuestId;
use crate::domain::room::{Price, RoomId};
use crate::domain::errors::FieldViolation;
use chrono::{DateTime, Utc};

#[derive(Debug, Clone)]
pub struct Booking {
    pub id: BookingId,
    pub room_id: RoomId,
    pub guest_id: GuestId,
    pub stay: Stay,
    pub number_of_guests: GuestCount,
    pub total_price: f64,
    pub status: BookingStatus,
    pub special_requests: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewBooking {
    pub room_id: RoomId,
    pub guest_id: GuestId,
    pub stay: Stay,
    pub number_of_guests: GuestCount,
    pub status: BookingStatus,
    pub special_requests: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct BookingChanges {
    pub room_id: Option<RoomId>,
    pub guest_id: Option<GuestId>,
    pub stay: Option<Stay>,
    pub number_of_guests: Option<GuestCount>,
    pub status: Option<BookingStatus>,
    pub special_requests: Option<String>,
}

impl BookingChanges {
    /// Whether applying these changes alters the price of the stay.
    pub fn reprices(&self) -> bool {
        self.room_id.is_some() || self.stay.is_some()
    }
}

/// Nightly rate multiplied by the number of nights. The total must stay a
/// finite number.
pub fn quote(rate: Price, stay: &Stay) -> Result<f64, FieldViolation> {
    let total = rate.value() * stay.nights() as f64;
    if !total.is_finite() {
        return Err(FieldViolation::new(
            "total_price",
            "total_price exceeds the supported range",
        ));
    }
    Ok(total)
}

impl Booking {
    pub fn create(
        id: BookingId,
        new: NewBooking,
        rate: Price,
        now: DateTime<Utc>,
    ) -> Result<Self, FieldViolation> {
        Ok(Self {
            id,
            room_id: new.room_id,
            guest_id: new.guest_id,
            total_price: quote(rate, &new.stay)?,
            stay: new.stay,
            number_of_guests: new.number_of_guests,
            status: new.status,
            special_requests: new.special_requests,
            created_at: now,
            updated_at: now,
        })
    }

    /// `rate` is the nightly price of the room the booking points at after the
    /// changes; it is only consulted when the changes reprice the stay. The
    /// booking is left untouched when the new total cannot be quoted.
    pub fn apply(
        &mut self,
        changes: BookingChanges,
        rate: Option<Price>,
        now: DateTime<Utc>,
    ) -> Result<(), FieldViolation> {
        let total_price = match (changes.reprices(), rate) {
            (true, Some(rate)) => {
                let stay = changes.stay.as_ref().unwrap_or(&self.stay);
                Some(quote(rate, stay)?)
            }
            _ => None,
        };
        if let Some(room_id) = changes.room_id {
            self.room_id = room_id;
        }
        if let Some(guest_id) = changes.guest_id {
            self.guest_id = guest_id;
        }
        if let Some(stay) = changes.stay {
            self.stay = stay;
        }
        if let Some(number_of_guests) = changes.number_of_guests {
            self.number_of_guests = number_of_guests;
        }
        if let Some(status) = changes.status {
            self.status = status;
        }
        if changes.special_requests.is_some() {
            self.special_requests = changes.special_requests;
        }
        if let Some(total_price) = total_price {
            self.total_price = total_price;
        }
        self.updated_at = now;
        Ok(())
    }
}

#[derive(Debug, Clone, Default)]
pub struct BookingFilter {
    pub status: Option<BookingStatus>,
    pub room_id: Option<RoomId>,
    pub guest_id: Option<GuestId>,
}
