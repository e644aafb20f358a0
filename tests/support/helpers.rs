// tests/support/helpers.rs
use super::mocks;
use axum::Router;
use axum::body::{self, Body};
use axum::http::{Method, Request, StatusCode, header::CONTENT_TYPE};
use axum::response::Response;
use hotel_api::application::ports::time::Clock;
use hotel_api::application::services::ApplicationServices;
use hotel_api::config::{AppConfig, Environment};
use hotel_api::domain::{
    booking::BookingRepository, guest::GuestRepository, room::RoomRepository,
};
use hotel_api::infrastructure::{
    database,
    repositories::{SqliteBookingRepository, SqliteGuestRepository, SqliteRoomRepository},
};
use hotel_api::presentation::http::{pipeline::Pipeline, routes::build_routes, state::HttpState};
use serde_json::Value;
use std::path::Path;
use std::sync::Arc;
use tower::util::ServiceExt as _;

const MISSING_STATIC_DIR: &str = "target/no-static-files-here";

pub fn test_config(static_dir: &Path) -> AppConfig {
    AppConfig::from_lookup(|_| None)
        .expect("default config")
        .with_environment(Environment::Test)
        .with_database_url("sqlite::memory:")
        .with_static_dir(static_dir)
}

pub fn router_with_services(services: ApplicationServices, config: &AppConfig) -> Router {
    let state = HttpState {
        services: Arc::new(services),
    };
    Pipeline::for_config(config)
        .expect("standard pipeline")
        .into_router(build_routes(state))
}

/// Router backed by a fresh in-memory SQLite database.
pub async fn make_test_router_with_static(static_dir: &Path) -> Router {
    let config = test_config(static_dir);
    let pool = database::init_pool(config.database_url())
        .await
        .expect("in-memory pool");
    database::run_migrations(&pool).await.expect("migrations");
    let pool = Arc::new(pool);

    let room_repo: Arc<dyn RoomRepository> =
        Arc::new(SqliteRoomRepository::new(Arc::clone(&pool)));
    let guest_repo: Arc<dyn GuestRepository> =
        Arc::new(SqliteGuestRepository::new(Arc::clone(&pool)));
    let booking_repo: Arc<dyn BookingRepository> =
        Arc::new(SqliteBookingRepository::new(Arc::clone(&pool)));
    let clock: Arc<dyn Clock> = Arc::new(mocks::FixedClock);

    let services = ApplicationServices::new(room_repo, guest_repo, booking_repo, clock);
    router_with_services(services, &config)
}

pub async fn make_test_router() -> Router {
    make_test_router_with_static(Path::new(MISSING_STATIC_DIR)).await
}

/// Router whose room repository is replaced by `room_repo`.
pub fn make_router_with_room_repo(room_repo: Arc<dyn RoomRepository>) -> Router {
    let config = test_config(Path::new(MISSING_STATIC_DIR));
    let services = ApplicationServices::new(
        room_repo,
        Arc::new(mocks::EmptyGuestRepo),
        Arc::new(mocks::EmptyBookingRepo),
        Arc::new(mocks::FixedClock),
    );
    router_with_services(services, &config)
}

pub fn json_request(method: Method, uri: &str, body: Option<Value>) -> Request<Body> {
    let builder = Request::builder().method(method).uri(uri);
    match body {
        Some(body) => builder
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    }
}

pub async fn read_json(resp: Response) -> Value {
    let bytes = body::to_bytes(resp.into_body(), 1024 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&bytes).expect("expected a JSON body")
}

pub async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let resp = app
        .clone()
        .oneshot(json_request(method, uri, body))
        .await
        .unwrap();
    let status = resp.status();
    (status, read_json(resp).await)
}

/// Assert that a response is an error envelope with the expected status and message.
pub async fn assert_error_response(resp: Response, expected_status: StatusCode, expected_message: &str) {
    assert_eq!(resp.status(), expected_status);
    let ct = resp
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("")
        .to_string();
    assert!(ct.starts_with("application/json"), "unexpected content-type: {ct}");

    let json = read_json(resp).await;
    assert_eq!(json["success"], Value::Bool(false), "body: {json}");
    assert_eq!(json["message"], expected_message, "body: {json}");
    assert_eq!(json.as_object().map(|o| o.len()), Some(2), "extra fields in {json}");
}

pub fn room_body(number: &str) -> Value {
    serde_json::json!({
        "number": number,
        "room_type": "double",
        "price": 120.0,
        "capacity": 2,
        "floor": 1,
        "amenities": ["wifi", "tv"],
    })
}

pub fn guest_body(email: &str) -> Value {
    serde_json::json!({
        "first_name": "Ada",
        "last_name": "Lovelace",
        "email": email,
        "phone": "+44 20 7946 0000",
    })
}

pub async fn create_room(app: &Router, number: &str) -> Value {
    let (status, json) = send(app, Method::POST, "/api/rooms", Some(room_body(number))).await;
    assert_eq!(status, StatusCode::CREATED, "body: {json}");
    json["data"].clone()
}

pub async fn create_guest(app: &Router, email: &str) -> Value {
    let (status, json) = send(app, Method::POST, "/api/guests", Some(guest_body(email))).await;
    assert_eq!(status, StatusCode::CREATED, "body: {json}");
    json["data"].clone()
}

pub async fn create_booking(app: &Router, room_id: &str, guest_id: &str, check_in: &str, check_out: &str) -> (StatusCode, Value) {
    send(
        app,
        Method::POST,
        "/api/bookings",
        Some(serde_json::json!({
            "room_id": room_id,
            "guest_id": guest_id,
            "check_in": check_in,
            "check_out": check_out,
            "number_of_guests": 2,
        })),
    )
    .await
}
