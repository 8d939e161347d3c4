//! End-to-end tests for the full innkeepd stack.
//!
//! Each test spins up the complete application (in-memory `SQLite`, real repos,
//! real services, real axum router) and exercises the HTTP layer via
//! `tower::ServiceExt::oneshot`: no TCP port is bound.

use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use http_body_util::BodyExt;
use innkeep_adapter_http_axum::router;
use innkeep_adapter_http_axum::state::AppState;
use innkeep_adapter_storage_sqlite_sqlx::{
    Config, SqliteHotelRepository, SqliteRoomRepository, SqliteRoomTypeRepository,
};
use serde_json::{Value, json};
use tower::ServiceExt;

/// Build a fully-wired router backed by an in-memory `SQLite` database.
async fn app() -> axum::Router {
    let db = Config {
        database_url: "sqlite::memory:".to_string(),
        max_connections: 1,
        log_queries: false,
    }
    .build()
    .await
    .expect("in-memory database should initialise");

    let pool = db.pool().clone();

    let state = AppState::new(
        SqliteHotelRepository::new(pool.clone()),
        SqliteRoomTypeRepository::new(pool.clone()),
        SqliteRoomRepository::new(pool),
    );

    router::build(state)
}

async fn call(app: &axum::Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, value)
}

async fn create_hotel(app: &axum::Router, name: &str) -> String {
    let (status, body) = call(
        app,
        "POST",
        "/v1/hotels",
        Some(json!({
            "name": name,
            "address": "1 Main Street",
            "country": "US",
            "state": "NY",
            "status": "open",
            "description": "Downtown landmark"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    body["id"].as_str().unwrap().to_string()
}

async fn create_room_type(app: &axum::Router, hotel_id: &str) -> String {
    let (status, body) = call(
        app,
        "POST",
        &format!("/v1/hotels/{hotel_id}/roomtypes"),
        Some(json!({
            "name": "Deluxe",
            "description": "Two queens, city view",
            "number_of_beds": 2,
            "bed_type": "queen",
            "max_occupancy": 4,
            "base_price": "150.00"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    body["id"].as_str().unwrap().to_string()
}

// ---------------------------------------------------------------------------
// Health check
// ---------------------------------------------------------------------------

#[tokio::test]
async fn should_return_ok_when_health_check_called() {
    let resp = app()
        .await
        .oneshot(
            Request::builder()
                .uri("/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
}

// ---------------------------------------------------------------------------
// Hotels
// ---------------------------------------------------------------------------

#[tokio::test]
async fn should_create_list_and_fetch_hotels() {
    let app = app().await;
    let (_, empty) = call(&app, "GET", "/v1/hotels", None).await;
    assert_eq!(empty, json!({ "results": [] }));

    let id = create_hotel(&app, "Grand Plaza").await;

    let (status, hotel) = call(&app, "GET", &format!("/v1/hotels/{id}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(hotel["name"], "Grand Plaza");
    assert_eq!(hotel["created_at"], hotel["updated_at"]);

    let (_, listed) = call(&app, "GET", "/v1/hotels", None).await;
    assert_eq!(listed["results"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn should_patch_only_given_hotel_fields() {
    let app = app().await;
    let id = create_hotel(&app, "Grand Plaza").await;

    let (status, patched) = call(
        &app,
        "PATCH",
        &format!("/v1/hotels/{id}"),
        Some(json!({ "description": "Renovated in 2024" })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(patched["description"], "Renovated in 2024");
    assert_eq!(patched["status"], "open");
    assert_eq!(patched["address"], "1 Main Street");
    assert_eq!(patched["version"], 2);

    let (_, fetched) = call(&app, "GET", &format!("/v1/hotels/{id}"), None).await;
    assert_eq!(fetched, patched);
}

#[tokio::test]
async fn should_return_not_found_for_unknown_hotel() {
    let app = app().await;
    let (status, body) = call(
        &app,
        "GET",
        "/v1/hotels/0190b5a4-0000-7000-8000-000000000000",
        None,
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["kind"], "not_found");
}

#[tokio::test]
async fn should_reject_hotel_without_name() {
    let app = app().await;
    let (status, body) = call(&app, "POST", "/v1/hotels", Some(json!({ "name": "" }))).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["kind"], "validation");
}

// ---------------------------------------------------------------------------
// Room types
// ---------------------------------------------------------------------------

#[tokio::test]
async fn should_keep_room_type_price_exact() {
    let app = app().await;
    let hotel_id = create_hotel(&app, "Grand Plaza").await;
    let room_type_id = create_room_type(&app, &hotel_id).await;

    let (status, patched) = call(
        &app,
        "PATCH",
        &format!("/v1/hotels/{hotel_id}/roomtypes/{room_type_id}"),
        Some(json!({ "base_price": "179.99", "bed_type": "king" })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(patched["base_price"], "179.99");
    assert_eq!(patched["bed_type"], "king");
    assert_eq!(patched["number_of_beds"], 2);

    let (_, listed) = call(
        &app,
        "GET",
        &format!("/v1/hotels/{hotel_id}/roomtypes"),
        None,
    )
    .await;
    assert_eq!(listed["results"][0]["base_price"], "179.99");
}

#[tokio::test]
async fn should_refuse_room_type_for_unknown_hotel() {
    let app = app().await;
    let (status, body) = call(
        &app,
        "POST",
        "/v1/hotels/0190b5a4-0000-7000-8000-000000000000/roomtypes",
        Some(json!({
            "name": "Deluxe",
            "number_of_beds": 2,
            "bed_type": "queen",
            "max_occupancy": 4,
            "base_price": "150.00"
        })),
    )
    .await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["error"], "hotel does not exist");
}

#[tokio::test]
async fn should_hide_room_type_of_another_hotel() {
    let app = app().await;
    let owner = create_hotel(&app, "Grand Plaza").await;
    let other = create_hotel(&app, "Seaside Inn").await;
    let room_type_id = create_room_type(&app, &owner).await;

    let (status, body) = call(
        &app,
        "GET",
        &format!("/v1/hotels/{other}/roomtypes/{room_type_id}"),
        None,
    )
    .await;

    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(
        body["error"],
        "hotel doesn't have any room type with the provided identifier"
    );
}

// ---------------------------------------------------------------------------
// Rooms
// ---------------------------------------------------------------------------

#[tokio::test]
async fn should_scope_rooms_to_their_hotel() {
    let app = app().await;
    let plaza = create_hotel(&app, "Grand Plaza").await;
    let seaside = create_hotel(&app, "Seaside Inn").await;
    let deluxe = create_room_type(&app, &plaza).await;

    let (status, room) = call(
        &app,
        "POST",
        &format!("/v1/hotels/{plaza}/rooms"),
        Some(json!({
            "room_type_id": deluxe,
            "floor": 3,
            "number": 301,
            "name": "Corner suite",
            "status": "available"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let room_id = room["id"].as_str().unwrap();

    let (status, fetched) = call(
        &app,
        "GET",
        &format!("/v1/hotels/{plaza}/rooms/{room_id}"),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched["hotel_id"], plaza.as_str());
    assert_eq!(fetched["room_type_id"], deluxe.as_str());
    assert_eq!(fetched["floor"], 3);
    assert_eq!(fetched["number"], 301);

    let (status, body) = call(
        &app,
        "GET",
        &format!("/v1/hotels/{seaside}/rooms/{room_id}"),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(body["kind"], "ownership_mismatch");
}

#[tokio::test]
async fn should_persist_nothing_when_room_hotel_is_unknown() {
    let app = app().await;
    let plaza = create_hotel(&app, "Grand Plaza").await;
    let deluxe = create_room_type(&app, &plaza).await;
    let unknown = "0190b5a4-0000-7000-8000-000000000000";

    let (status, body) = call(
        &app,
        "POST",
        &format!("/v1/hotels/{unknown}/rooms"),
        Some(json!({ "room_type_id": deluxe, "floor": 1, "number": 101 })),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["error"], "hotel does not exist");

    let (_, listed) = call(&app, "GET", &format!("/v1/hotels/{unknown}/rooms"), None).await;
    assert_eq!(listed, json!({ "results": [] }));
}

#[tokio::test]
async fn should_refuse_room_with_unknown_room_type() {
    let app = app().await;
    let plaza = create_hotel(&app, "Grand Plaza").await;

    let (status, body) = call(
        &app,
        "POST",
        &format!("/v1/hotels/{plaza}/rooms"),
        Some(json!({
            "room_type_id": "0190b5a4-0000-7000-8000-000000000000",
            "floor": 1,
            "number": 101
        })),
    )
    .await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["error"], "room type does not exist");
}

#[tokio::test]
async fn should_update_room_through_put_and_patch() {
    let app = app().await;
    let plaza = create_hotel(&app, "Grand Plaza").await;
    let deluxe = create_room_type(&app, &plaza).await;
    let suite = create_room_type(&app, &plaza).await;
    let (_, room) = call(
        &app,
        "POST",
        &format!("/v1/hotels/{plaza}/rooms"),
        Some(json!({ "room_type_id": deluxe, "floor": 3, "number": 301 })),
    )
    .await;
    let uri = format!("/v1/hotels/{plaza}/rooms/{}", room["id"].as_str().unwrap());

    let (status, put) = call(&app, "PUT", &uri, Some(json!({ "status": "maintenance" }))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(put["status"], "maintenance");
    assert_eq!(put["number"], 301);

    let (status, patched) = call(&app, "PATCH", &uri, Some(json!({ "room_type_id": suite }))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(patched["room_type_id"], suite.as_str());
    assert_eq!(patched["status"], "maintenance");
    assert_eq!(patched["version"], 3);
}

#[tokio::test]
async fn should_reject_malformed_room_id() {
    let app = app().await;
    let plaza = create_hotel(&app, "Grand Plaza").await;

    let (status, body) = call(
        &app,
        "GET",
        &format!("/v1/hotels/{plaza}/rooms/301"),
        None,
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["kind"], "malformed");
}
