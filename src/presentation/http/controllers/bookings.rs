// src/presentation/http/controllers/bookings.rs
use crate::application::{
    commands::bookings::{CreateBookingCommand, DeleteBookingCommand, UpdateBookingCommand},
    dto::BookingDto,
    queries::bookings::{GetBookingQuery, ListBookingsQuery},
};
use crate::domain::booking::BookingId;
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::{IdPath, Payload, QueryParams};
use crate::presentation::http::response::{ApiResponse, Created};
use crate::presentation::http::state::HttpState;
use axum::Extension;
use serde::Deserialize;

#[derive(Debug, Default, Deserialize)]
pub struct BookingListParams {
    pub status: Option<String>,
    pub room_id: Option<String>,
    pub guest_id: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct BookingRequest {
    #[serde(alias = "room")]
    pub room_id: Option<String>,
    #[serde(alias = "guest")]
    pub guest_id: Option<String>,
    pub check_in: Option<String>,
    pub check_out: Option<String>,
    pub number_of_guests: Option<i64>,
    pub status: Option<String>,
    pub special_requests: Option<String>,
}

impl BookingRequest {
    fn into_create(self) -> CreateBookingCommand {
        CreateBookingCommand {
            room_id: self.room_id,
            guest_id: self.guest_id,
            check_in: self.check_in,
            check_out: self.check_out,
            number_of_guests: self.number_of_guests,
            status: self.status,
            special_requests: self.special_requests,
        }
    }

    fn into_update(self, id: BookingId) -> UpdateBookingCommand {
        UpdateBookingCommand {
            id,
            room_id: self.room_id,
            guest_id: self.guest_id,
            check_in: self.check_in,
            check_out: self.check_out,
            number_of_guests: self.number_of_guests,
            status: self.status,
            special_requests: self.special_requests,
        }
    }
}

pub async fn create_booking(
    Extension(state): Extension<HttpState>,
    Payload(payload): Payload<BookingRequest>,
) -> HttpResult<Created<BookingDto>> {
    let booking = state
        .services
        .booking_commands
        .create_booking(payload.into_create())
        .await
        .into_http()?;

    Ok(Created(ApiResponse::with_message(
        "Booking created successfully",
        booking,
    )))
}

pub async fn list_bookings(
    Extension(state): Extension<HttpState>,
    QueryParams(params): QueryParams<BookingListParams>,
) -> HttpResult<ApiResponse<Vec<BookingDto>>> {
    let query = ListBookingsQuery {
        status: params.status,
        room_id: params.room_id,
        guest_id: params.guest_id,
    };

    state
        .services
        .booking_queries
        .list_bookings(query)
        .await
        .into_http()
        .map(ApiResponse::list)
}

pub async fn get_booking(
    Extension(state): Extension<HttpState>,
    IdPath(id): IdPath<BookingId>,
) -> HttpResult<ApiResponse<BookingDto>> {
    state
        .services
        .booking_queries
        .get_booking(GetBookingQuery { id })
        .await
        .into_http()
        .map(ApiResponse::ok)
}

pub async fn update_booking(
    Extension(state): Extension<HttpState>,
    IdPath(id): IdPath<BookingId>,
    Payload(payload): Payload<BookingRequest>,
) -> HttpResult<ApiResponse<BookingDto>> {
    let booking = state
        .services
        .booking_commands
        .update_booking(payload.into_update(id))
        .await
        .into_http()?;

    Ok(ApiResponse::with_message(
        "Booking updated successfully",
        booking,
    ))
}

pub async fn delete_booking(
    Extension(state): Extension<HttpState>,
    IdPath(id): IdPath<BookingId>,
) -> HttpResult<ApiResponse<()>> {
    state
        .services
        .booking_commands
        .delete_booking(DeleteBookingCommand { id })
        .await
        .into_http()?;

    Ok(ApiResponse::message_only("Booking deleted successfully"))
}
