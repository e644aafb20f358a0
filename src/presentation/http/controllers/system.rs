// src/presentation/http/controllers/system.rs
use crate::presentation::http::error::ROUTE_NOT_FOUND_MESSAGE;
use crate::presentation::http::response::{ApiResponse, error_response};
use axum::{
    Json,
    http::StatusCode,
    response::Response,
};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct Endpoints {
    pub rooms: &'static str,
    pub guests: &'static str,
    pub bookings: &'static str,
}

#[derive(Debug, Serialize)]
pub struct ApiInfo {
    pub success: bool,
    pub message: &'static str,
    pub version: &'static str,
    pub endpoints: Endpoints,
}

pub async fn index() -> Json<ApiInfo> {
    Json(ApiInfo {
        success: true,
        message: "Hotel Management API",
        version: env!("CARGO_PKG_VERSION"),
        endpoints: Endpoints {
            rooms: "/api/rooms",
            guests: "/api/guests",
            bookings: "/api/bookings",
        },
    })
}

/// Reserved path for a future real-time channel. No upgrade happens here.
pub async fn ws_placeholder() -> ApiResponse<()> {
    ApiResponse::message_only("WebSocket placeholder endpoint")
}

pub async fn route_not_found() -> Response {
    error_response(StatusCode::NOT_FOUND, ROUTE_NOT_FOUND_MESSAGE)
}
