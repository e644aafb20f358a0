// src/presentation/http/controllers/rooms.rs
use crate::application::{
    commands::rooms::{CreateRoomCommand, DeleteRoomCommand, UpdateRoomCommand},
    dto::RoomDto,
    queries::rooms::{GetRoomQuery, ListRoomsQuery},
};
use crate::domain::room::RoomId;
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::{IdPath, Payload, QueryParams};
use crate::presentation::http::response::{ApiResponse, Created};
use crate::presentation::http::state::HttpState;
use axum::Extension;
use serde::Deserialize;

#[derive(Debug, Default, Deserialize)]
pub struct RoomListParams {
    pub room_type: Option<String>,
    pub is_available: Option<bool>,
    pub min_price: Option<f64>,
    pub max_price: Option<f64>,
}

/// Body for both create and update; update treats every field as optional.
#[derive(Debug, Default, Deserialize)]
pub struct RoomRequest {
    pub number: Option<String>,
    #[serde(alias = "type")]
    pub room_type: Option<String>,
    pub price: Option<f64>,
    pub capacity: Option<i64>,
    pub floor: Option<i32>,
    pub amenities: Option<Vec<String>>,
    pub description: Option<String>,
    pub is_available: Option<bool>,
}

impl RoomRequest {
    fn into_create(self) -> CreateRoomCommand {
        CreateRoomCommand {
            number: self.number,
            room_type: self.room_type,
            price: self.price,
            capacity: self.capacity,
            floor: self.floor,
            amenities: self.amenities,
            description: self.description,
            is_available: self.is_available,
        }
    }

    fn into_update(self, id: RoomId) -> UpdateRoomCommand {
        UpdateRoomCommand {
            id,
            number: self.number,
            room_type: self.room_type,
            price: self.price,
            capacity: self.capacity,
            floor: self.floor,
            amenities: self.amenities,
            description: self.description,
            is_available: self.is_available,
        }
    }
}

pub async fn create_room(
    Extension(state): Extension<HttpState>,
    Payload(payload): Payload<RoomRequest>,
) -> HttpResult<Created<RoomDto>> {
    let room = state
        .services
        .room_commands
        .create_room(payload.into_create())
        .await
        .into_http()?;

    Ok(Created(ApiResponse::with_message(
        "Room created successfully",
        room,
    )))
}

pub async fn list_rooms(
    Extension(state): Extension<HttpState>,
    QueryParams(params): QueryParams<RoomListParams>,
) -> HttpResult<ApiResponse<Vec<RoomDto>>> {
    let query = ListRoomsQuery {
        room_type: params.room_type,
        is_available: params.is_available,
        min_price: params.min_price,
        max_price: params.max_price,
    };

    state
        .services
        .room_queries
        .list_rooms(query)
        .await
        .into_http()
        .map(ApiResponse::list)
}

pub async fn get_room(
    Extension(state): Extension<HttpState>,
    IdPath(id): IdPath<RoomId>,
) -> HttpResult<ApiResponse<RoomDto>> {
    state
        .services
        .room_queries
        .get_room(GetRoomQuery { id })
        .await
        .into_http()
        .map(ApiResponse::ok)
}

pub async fn update_room(
    Extension(state): Extension<HttpState>,
    IdPath(id): IdPath<RoomId>,
    Payload(payload): Payload<RoomRequest>,
) -> HttpResult<ApiResponse<RoomDto>> {
    let room = state
        .services
        .room_commands
        .update_room(payload.into_update(id))
        .await
        .into_http()?;

    Ok(ApiResponse::with_message("Room updated successfully", room))
}

pub async fn delete_room(
    Extension(state): Extension<HttpState>,
    IdPath(id): IdPath<RoomId>,
) -> HttpResult<ApiResponse<()>> {
    state
        .services
        .room_commands
        .delete_room(DeleteRoomCommand { id })
        .await
        .into_http()?;

    Ok(ApiResponse::message_only("Room deleted successfully"))
}
