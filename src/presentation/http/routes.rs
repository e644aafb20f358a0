// src/presentation/http/routes.rs
use crate::presentation::http::controllers::{bookings, guests, rooms, system};
use crate::presentation::http::state::HttpState;
use axum::{Extension, Router, routing::get};

/// Base route, placeholder route and the three resource routers. Middleware,
/// static files and fallbacks are added by the pipeline.
pub fn build_routes(state: HttpState) -> Router {
    Router::new()
        .route("/", get(system::index))
        .route("/ws/ws", get(system::ws_placeholder))
        .merge(room_routes())
        .merge(guest_routes())
        .merge(booking_routes())
        .layer(Extension(state))
}

fn room_routes() -> Router {
    Router::new()
        .route(
            "/api/rooms",
            get(rooms::list_rooms).post(rooms::create_room),
        )
        .route(
            "/api/rooms/{id}",
            get(rooms::get_room)
                .put(rooms::update_room)
                .delete(rooms::delete_room),
        )
}

fn guest_routes() -> Router {
    Router::new()
        .route(
            "/api/guests",
            get(guests::list_guests).post(guests::create_guest),
        )
        .route(
            "/api/guests/{id}",
            get(guests::get_guest)
                .put(guests::update_guest)
                .delete(guests::delete_guest),
        )
}

fn booking_routes() -> Router {
    Router::new()
        .route(
            "/api/bookings",
            get(bookings::list_bookings).post(bookings::create_booking),
        )
        .route(
            "/api/bookings/{id}",
            get(bookings::get_booking)
                .put(bookings::update_booking)
                .delete(bookings::delete_booking),
        )
}
