//! JSON REST handlers for the rooms of a hotel.

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Deserialize;

use innkeep_app::ports::{HotelRepository, RoomRepository, RoomTypeRepository};
use innkeep_domain::id::{HotelId, RoomId, RoomTypeId};
use innkeep_domain::room::{Room, RoomPatch};

use super::{Results, parse_id};
use crate::error::ApiError;
use crate::state::AppState;

/// Request body for creating a room. The hotel comes from the path.
#[derive(Deserialize)]
pub struct CreateRoomRequest {
    pub room_type_id: RoomTypeId,
    #[serde(default)]
    pub floor: i32,
    pub number: i32,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub status: String,
}

/// Request body for partially updating a room.
#[derive(Deserialize)]
pub struct UpdateRoomRequest {
    pub room_type_id: Option<RoomTypeId>,
    pub floor: Option<i32>,
    pub number: Option<i32>,
    pub name: Option<String>,
    pub status: Option<String>,
}

impl From<UpdateRoomRequest> for RoomPatch {
    fn from(req: UpdateRoomRequest) -> Self {
        Self {
            room_type_id: req.room_type_id,
            floor: req.floor,
            number: req.number,
            name: req.name,
            status: req.status,
        }
    }
}

/// Possible responses from the list endpoint.
pub enum ListResponse {
    Ok(Json<Results<Room>>),
}

impl IntoResponse for ListResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the get and update endpoints.
pub enum GetResponse {
    Ok(Json<Room>),
}

impl IntoResponse for GetResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the create endpoint.
pub enum CreateResponse {
    Created(Json<Room>),
}

impl IntoResponse for CreateResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Created(json) => (StatusCode::CREATED, json).into_response(),
        }
    }
}

/// `GET /v1/hotels/{hotel_id}/rooms`
pub async fn list<HR, RTR, RR>(
    State(state): State<AppState<HR, RTR, RR>>,
    Path(hotel_id): Path<String>,
) -> Result<ListResponse, ApiError>
where
    HR: HotelRepository + Send + Sync + 'static,
    RTR: RoomTypeRepository + Send + Sync + 'static,
    RR: RoomRepository + Send + Sync + 'static,
{
    let hotel_id: HotelId = parse_id(&hotel_id, "hotel")?;
    let rooms = state.room_service.list_rooms(hotel_id).await?;
    Ok(ListResponse::Ok(Json(rooms.into())))
}

/// `GET /v1/hotels/{hotel_id}/rooms/{room_id}`
pub async fn get<HR, RTR, RR>(
    State(state): State<AppState<HR, RTR, RR>>,
    Path((hotel_id, room_id)): Path<(String, String)>,
) -> Result<GetResponse, ApiError>
where
    HR: HotelRepository + Send + Sync + 'static,
    RTR: RoomTypeRepository + Send + Sync + 'static,
    RR: RoomRepository + Send + Sync + 'static,
{
    let hotel_id: HotelId = parse_id(&hotel_id, "hotel")?;
    let room_id: RoomId = parse_id(&room_id, "room")?;
    let room = state.room_service.get_room(hotel_id, room_id).await?;
    Ok(GetResponse::Ok(Json(room)))
}

/// `POST /v1/hotels/{hotel_id}/rooms`
pub async fn create<HR, RTR, RR>(
    State(state): State<AppState<HR, RTR, RR>>,
    Path(hotel_id): Path<String>,
    body: Result<Json<CreateRoomRequest>, JsonRejection>,
) -> Result<CreateResponse, ApiError>
where
    HR: HotelRepository + Send + Sync + 'static,
    RTR: RoomTypeRepository + Send + Sync + 'static,
    RR: RoomRepository + Send + Sync + 'static,
{
    let hotel_id: HotelId = parse_id(&hotel_id, "hotel")?;
    let Json(req) = body?;
    let room = Room::builder()
        .hotel_id(hotel_id)
        .room_type_id(req.room_type_id)
        .floor(req.floor)
        .number(req.number)
        .name(req.name)
        .status(req.status)
        .build()?;

    let created = state.room_service.create_room(room).await?;
    Ok(CreateResponse::Created(Json(created)))
}

/// `PATCH` or `PUT /v1/hotels/{hotel_id}/rooms/{room_id}`
///
/// Both verbs merge only the fields present in the body.
pub async fn update<HR, RTR, RR>(
    State(state): State<AppState<HR, RTR, RR>>,
    Path((hotel_id, room_id)): Path<(String, String)>,
    body: Result<Json<UpdateRoomRequest>, JsonRejection>,
) -> Result<GetResponse, ApiError>
where
    HR: HotelRepository + Send + Sync + 'static,
    RTR: RoomTypeRepository + Send + Sync + 'static,
    RR: RoomRepository + Send + Sync + 'static,
{
    let hotel_id: HotelId = parse_id(&hotel_id, "hotel")?;
    let room_id: RoomId = parse_id(&room_id, "room")?;
    let Json(req) = body?;
    let updated = state
        .room_service
        .update_room(room_id, hotel_id, req.into())
        .await?;
    Ok(GetResponse::Ok(Json(updated)))
}
