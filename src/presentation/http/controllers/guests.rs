// src/presentation/http/controllers/guests.rs
use crate::application::{
    commands::guests::{CreateGuestCommand, DeleteGuestCommand, UpdateGuestCommand},
    dto::GuestDto,
    queries::guests::{GetGuestQuery, ListGuestsQuery},
};
use crate::domain::guest::GuestId;
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::{IdPath, Payload, QueryParams};
use crate::presentation::http::response::{ApiResponse, Created};
use crate::presentation::http::state::HttpState;
use axum::Extension;
use serde::Deserialize;

#[derive(Debug, Default, Deserialize)]
pub struct GuestListParams {
    pub search: Option<String>,
    pub email: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct GuestRequest {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub nationality: Option<String>,
}

impl GuestRequest {
    fn into_create(self) -> CreateGuestCommand {
        CreateGuestCommand {
            first_name: self.first_name,
            last_name: self.last_name,
            email: self.email,
            phone: self.phone,
            address: self.address,
            nationality: self.nationality,
        }
    }

    fn into_update(self, id: GuestId) -> UpdateGuestCommand {
        UpdateGuestCommand {
            id,
            first_name: self.first_name,
            last_name: self.last_name,
            email: self.email,
            phone: self.phone,
            address: self.address,
            nationality: self.nationality,
        }
    }
}

pub async fn create_guest(
    Extension(state): Extension<HttpState>,
    Payload(payload): Payload<GuestRequest>,
) -> HttpResult<Created<GuestDto>> {
    let guest = state
        .services
        .guest_commands
        .create_guest(payload.into_create())
        .await
        .into_http()?;

    Ok(Created(ApiResponse::with_message(
        "Guest created successfully",
        guest,
    )))
}

pub async fn list_guests(
    Extension(state): Extension<HttpState>,
    QueryParams(params): QueryParams<GuestListParams>,
) -> HttpResult<ApiResponse<Vec<GuestDto>>> {
    state
        .services
        .guest_queries
        .list_guests(ListGuestsQuery {
            search: params.search,
            email: params.email,
        })
        .await
        .into_http()
        .map(ApiResponse::list)
}

pub async fn get_guest(
    Extension(state): Extension<HttpState>,
    IdPath(id): IdPath<GuestId>,
) -> HttpResult<ApiResponse<GuestDto>> {
    state
        .services
        .guest_queries
        .get_guest(GetGuestQuery { id })
        .await
        .into_http()
        .map(ApiResponse::ok)
}

pub async fn update_guest(
    Extension(state): Extension<HttpState>,
    IdPath(id): IdPath<GuestId>,
    Payload(payload): Payload<GuestRequest>,
) -> HttpResult<ApiResponse<GuestDto>> {
    let guest = state
        .services
        .guest_commands
        .update_guest(payload.into_update(id))
        .await
        .into_http()?;

    Ok(ApiResponse::with_message("Guest updated successfully", guest))
}

pub async fn delete_guest(
    Extension(state): Extension<HttpState>,
    IdPath(id): IdPath<GuestId>,
) -> HttpResult<ApiResponse<()>> {
    state
        .services
        .guest_commands
        .delete_guest(DeleteGuestCommand { id })
        .await
        .into_http()?;

    Ok(ApiResponse::message_only("Guest deleted successfully"))
}
