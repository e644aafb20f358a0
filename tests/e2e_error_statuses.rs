use axum::body::Body;
use axum::http::{Method, Request, StatusCode, header::CONTENT_TYPE};
use serde_json::json;
use std::sync::Arc;
use tower::util::ServiceExt as _;

mod support;

#[tokio::test]
async fn e2e_create_room_missing_field_returns_400() {
    let app = support::make_test_router().await;

    let mut body = support::room_body("101");
    body.as_object_mut().unwrap().remove("price");
    let resp = app
        .clone()
        .oneshot(support::json_request(Method::POST, "/api/rooms", Some(body)))
        .await
        .unwrap();
    support::assert_error_response(resp, StatusCode::BAD_REQUEST, "price is required").await;
}

#[tokio::test]
async fn e2e_create_room_empty_body_lists_all_required_fields() {
    let app = support::make_test_router().await;

    let req = Request::builder()
        .method(Method::POST)
        .uri("/api/rooms")
        .body(Body::empty())
        .unwrap();
    let resp = app.clone().oneshot(req).await.unwrap();
    support::assert_error_response(
        resp,
        StatusCode::BAD_REQUEST,
        "number is required, room_type is required, price is required, capacity is required",
    )
    .await;
}

#[tokio::test]
async fn e2e_reused_room_number_returns_409() {
    let app = support::make_test_router().await;
    support::create_room(&app, "101").await;

    let resp = app
        .clone()
        .oneshot(support::json_request(
            Method::POST,
            "/api/rooms",
            Some(support::room_body("101")),
        ))
        .await
        .unwrap();
    support::assert_error_response(resp, StatusCode::CONFLICT, "Room number already exists").await;
}

#[tokio::test]
async fn e2e_unknown_booking_returns_404() {
    let app = support::make_test_router().await;

    let resp = app
        .clone()
        .oneshot(support::json_request(
            Method::GET,
            "/api/bookings/0f8fad5b-d9cb-469f-a165-70867728950e",
            None,
        ))
        .await
        .unwrap();
    support::assert_error_response(resp, StatusCode::NOT_FOUND, "Booking not found").await;
}

#[tokio::test]
async fn e2e_malformed_id_returns_400() {
    let app = support::make_test_router().await;

    for (uri, message) in [
        ("/api/rooms/abc", "Invalid room id format"),
        ("/api/guests/12345", "Invalid guest id format"),
        ("/api/bookings/not-an-id", "Invalid booking id format"),
    ] {
        let resp = app
            .clone()
            .oneshot(support::json_request(Method::GET, uri, None))
            .await
            .unwrap();
        support::assert_error_response(resp, StatusCode::BAD_REQUEST, message).await;
    }
}

#[tokio::test]
async fn e2e_unknown_route_returns_404() {
    let app = support::make_test_router().await;

    let resp = app
        .clone()
        .oneshot(support::json_request(Method::GET, "/api/nonexistent", None))
        .await
        .unwrap();
    support::assert_error_response(resp, StatusCode::NOT_FOUND, "Route not found").await;

    let resp = app
        .clone()
        .oneshot(support::json_request(Method::POST, "/does/not/exist", Some(json!({}))))
        .await
        .unwrap();
    support::assert_error_response(resp, StatusCode::NOT_FOUND, "Route not found").await;
}

#[tokio::test]
async fn e2e_method_mismatch_returns_route_not_found() {
    let app = support::make_test_router().await;

    let resp = app
        .clone()
        .oneshot(support::json_request(Method::PATCH, "/api/rooms", Some(json!({}))))
        .await
        .unwrap();
    support::assert_error_response(resp, StatusCode::NOT_FOUND, "Route not found").await;
}

#[tokio::test]
async fn e2e_malformed_json_returns_400() {
    let app = support::make_test_router().await;

    let req = Request::builder()
        .method(Method::POST)
        .uri("/api/guests")
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from("{\"first_name\": \"Ada\""))
        .unwrap();
    let resp = app.clone().oneshot(req).await.unwrap();
    support::assert_error_response(resp, StatusCode::BAD_REQUEST, "Malformed JSON body").await;
}

#[tokio::test]
async fn e2e_invalid_query_value_returns_400() {
    let app = support::make_test_router().await;

    let resp = app
        .clone()
        .oneshot(support::json_request(
            Method::GET,
            "/api/rooms?min_price=cheap",
            None,
        ))
        .await
        .unwrap();
    support::assert_error_response(resp, StatusCode::BAD_REQUEST, "Invalid query parameters")
        .await;
}

#[tokio::test]
async fn e2e_wrongly_shaped_json_does_not_echo_decoder_text() {
    let app = support::make_test_router().await;

    let req = Request::builder()
        .method(Method::POST)
        .uri("/api/guests")
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from("[1,2]"))
        .unwrap();
    let resp = app.clone().oneshot(req).await.unwrap();
    support::assert_error_response(resp, StatusCode::BAD_REQUEST, "Invalid request body").await;
}

#[tokio::test]
async fn e2e_storage_failure_returns_generic_500() {
    let app = support::make_router_with_room_repo(Arc::new(support::UnavailableRoomRepo));

    let resp = app
        .clone()
        .oneshot(support::json_request(Method::GET, "/api/rooms", None))
        .await
        .unwrap();
    support::assert_error_response(
        resp,
        StatusCode::INTERNAL_SERVER_ERROR,
        "Internal server error",
    )
    .await;
}

#[tokio::test]
async fn e2e_handler_panic_returns_generic_500() {
    let app = support::make_router_with_room_repo(Arc::new(support::PanickingRoomRepo));

    let resp = app
        .clone()
        .oneshot(support::json_request(Method::GET, "/api/rooms", None))
        .await
        .unwrap();
    support::assert_error_response(
        resp,
        StatusCode::INTERNAL_SERVER_ERROR,
        "Internal server error",
    )
    .await;
}

#[tokio::test]
async fn e2e_oversized_body_returns_400() {
    let app = support::make_test_router().await;

    let description = "x".repeat(2 * 1024 * 1024);
    let mut body = support::room_body("101");
    body["description"] = json!(description);
    let resp = app
        .clone()
        .oneshot(support::json_request(Method::POST, "/api/rooms", Some(body)))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let json = support::read_json(resp).await;
    assert_eq!(json["success"], false);
}
