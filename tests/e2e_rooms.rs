use axum::body::Body;
use axum::http::{Method, Request, StatusCode, header::CONTENT_TYPE};
use serde_json::json;
use tower::util::ServiceExt as _;

mod support;

#[tokio::test]
async fn e2e_create_room_returns_201_with_defaults() {
    let app = support::make_test_router().await;

    let (status, json) = support::send(
        &app,
        Method::POST,
        "/api/rooms",
        Some(json!({ "number": "101", "room_type": "Suite", "price": 250, "capacity": 4 })),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(json["success"], true);
    assert_eq!(json["message"], "Room created successfully");
    let room = &json["data"];
    assert_eq!(room["number"], "101");
    assert_eq!(room["room_type"], "suite");
    assert_eq!(room["price"], 250.0);
    assert_eq!(room["is_available"], true);
    assert_eq!(room["amenities"], json!([]));
    assert!(room["id"].as_str().is_some_and(|id| id.len() == 36));
}

#[tokio::test]
async fn e2e_create_room_accepts_form_bodies() {
    let app = support::make_test_router().await;

    let req = Request::builder()
        .method(Method::POST)
        .uri("/api/rooms")
        .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from("number=202&room_type=single&price=80&capacity=1"))
        .unwrap();
    let resp = app.clone().oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::CREATED);

    let json = support::read_json(resp).await;
    assert_eq!(json["data"]["number"], "202");
    assert_eq!(json["data"]["capacity"], 1);
}

#[tokio::test]
async fn e2e_list_rooms_reports_count_and_filters() {
    let app = support::make_test_router().await;
    support::create_room(&app, "101").await;
    support::create_room(&app, "102").await;
    support::send(
        &app,
        Method::POST,
        "/api/rooms",
        Some(json!({
            "number": "301",
            "room_type": "deluxe",
            "price": 400,
            "capacity": 3,
            "is_available": false
        })),
    )
    .await;

    let (status, json) = support::send(&app, Method::GET, "/api/rooms", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["count"], 3);

    let (_, json) = support::send(&app, Method::GET, "/api/rooms?room_type=deluxe", None).await;
    assert_eq!(json["count"], 1);
    assert_eq!(json["data"][0]["number"], "301");

    let (_, json) = support::send(&app, Method::GET, "/api/rooms?is_available=true", None).await;
    assert_eq!(json["count"], 2);

    let (_, json) =
        support::send(&app, Method::GET, "/api/rooms?min_price=100&max_price=200", None).await;
    assert_eq!(json["count"], 2);
}

#[tokio::test]
async fn e2e_list_rooms_rejects_inverted_price_range() {
    let app = support::make_test_router().await;

    let resp = app
        .clone()
        .oneshot(support::json_request(
            Method::GET,
            "/api/rooms?min_price=300&max_price=100",
            None,
        ))
        .await
        .unwrap();
    support::assert_error_response(
        resp,
        StatusCode::BAD_REQUEST,
        "min_price cannot exceed max_price",
    )
    .await;
}

#[tokio::test]
async fn e2e_list_rooms_rejects_non_finite_price_bounds() {
    let app = support::make_test_router().await;
    support::create_room(&app, "101").await;

    let resp = app
        .clone()
        .oneshot(support::json_request(Method::GET, "/api/rooms?min_price=NaN", None))
        .await
        .unwrap();
    support::assert_error_response(
        resp,
        StatusCode::BAD_REQUEST,
        "min_price must be a finite number",
    )
    .await;

    let resp = app
        .clone()
        .oneshot(support::json_request(
            Method::GET,
            "/api/rooms?min_price=NaN&max_price=inf",
            None,
        ))
        .await
        .unwrap();
    support::assert_error_response(
        resp,
        StatusCode::BAD_REQUEST,
        "min_price must be a finite number, max_price must be a finite number",
    )
    .await;
}

#[tokio::test]
async fn e2e_get_room_by_id() {
    let app = support::make_test_router().await;
    let room = support::create_room(&app, "101").await;
    let id = room["id"].as_str().unwrap();

    let (status, json) = support::send(&app, Method::GET, &format!("/api/rooms/{id}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["success"], true);
    assert_eq!(json["data"]["id"], id);
    assert_eq!(json["data"]["amenities"], json!(["wifi", "tv"]));
}

#[tokio::test]
async fn e2e_update_room_touches_only_given_fields() {
    let app = support::make_test_router().await;
    let room = support::create_room(&app, "101").await;
    let id = room["id"].as_str().unwrap();

    let (status, json) = support::send(
        &app,
        Method::PUT,
        &format!("/api/rooms/{id}"),
        Some(json!({ "price": 99.5, "is_available": false })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["message"], "Room updated successfully");
    assert_eq!(json["data"]["price"], 99.5);
    assert_eq!(json["data"]["is_available"], false);
    assert_eq!(json["data"]["number"], "101");
    assert_eq!(json["data"]["room_type"], "double");
}

#[tokio::test]
async fn e2e_update_room_rejects_invalid_values() {
    let app = support::make_test_router().await;
    let room = support::create_room(&app, "101").await;
    let id = room["id"].as_str().unwrap();

    let resp = app
        .clone()
        .oneshot(support::json_request(
            Method::PUT,
            &format!("/api/rooms/{id}"),
            Some(json!({ "capacity": 0, "room_type": "penthouse" })),
        ))
        .await
        .unwrap();
    support::assert_error_response(
        resp,
        StatusCode::BAD_REQUEST,
        "room_type must be one of single, double, suite, deluxe, capacity must be between 1 and 20",
    )
    .await;
}

#[tokio::test]
async fn e2e_update_room_to_taken_number_conflicts() {
    let app = support::make_test_router().await;
    support::create_room(&app, "101").await;
    let room = support::create_room(&app, "102").await;
    let id = room["id"].as_str().unwrap();

    let resp = app
        .clone()
        .oneshot(support::json_request(
            Method::PUT,
            &format!("/api/rooms/{id}"),
            Some(json!({ "number": "101" })),
        ))
        .await
        .unwrap();
    support::assert_error_response(resp, StatusCode::CONFLICT, "Room number already exists").await;
}

#[tokio::test]
async fn e2e_delete_room_then_get_returns_404() {
    let app = support::make_test_router().await;
    let room = support::create_room(&app, "101").await;
    let id = room["id"].as_str().unwrap();

    let (status, json) =
        support::send(&app, Method::DELETE, &format!("/api/rooms/{id}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json, json!({ "success": true, "message": "Room deleted successfully" }));

    let resp = app
        .clone()
        .oneshot(support::json_request(Method::GET, &format!("/api/rooms/{id}"), None))
        .await
        .unwrap();
    support::assert_error_response(resp, StatusCode::NOT_FOUND, "Room not found").await;

    let resp = app
        .clone()
        .oneshot(support::json_request(Method::DELETE, &format!("/api/rooms/{id}"), None))
        .await
        .unwrap();
    support::assert_error_response(resp, StatusCode::NOT_FOUND, "Room not found").await;
}
