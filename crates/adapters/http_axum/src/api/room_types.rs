//! JSON REST handlers for the room types of a hotel.

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use rust_decimal::Decimal;
use serde::Deserialize;

use innkeep_app::ports::{HotelRepository, RoomRepository, RoomTypeRepository};
use innkeep_domain::id::{HotelId, RoomTypeId};
use innkeep_domain::room_type::{BedType, RoomType, RoomTypePatch};

use super::{Results, parse_id};
use crate::error::ApiError;
use crate::state::AppState;

/// Request body for creating a room type. The hotel comes from the path.
#[derive(Deserialize)]
pub struct CreateRoomTypeRequest {
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub number_of_beds: i32,
    pub bed_type: BedType,
    pub max_occupancy: i32,
    pub base_price: Decimal,
}

/// Request body for partially updating a room type.
#[derive(Deserialize)]
pub struct UpdateRoomTypeRequest {
    pub name: Option<String>,
    pub description: Option<String>,
    pub number_of_beds: Option<i32>,
    pub bed_type: Option<BedType>,
    pub max_occupancy: Option<i32>,
    pub base_price: Option<Decimal>,
}

impl From<UpdateRoomTypeRequest> for RoomTypePatch {
    fn from(req: UpdateRoomTypeRequest) -> Self {
        Self {
            name: req.name,
            description: req.description,
            number_of_beds: req.number_of_beds,
            bed_type: req.bed_type,
            max_occupancy: req.max_occupancy,
            base_price: req.base_price,
        }
    }
}

/// Possible responses from the list endpoint.
pub enum ListResponse {
    Ok(Json<Results<RoomType>>),
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
    Ok(Json<RoomType>),
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
    Created(Json<RoomType>),
}

impl IntoResponse for CreateResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Created(json) => (StatusCode::CREATED, json).into_response(),
        }
    }
}

/// `GET /v1/hotels/{hotel_id}/roomtypes`
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
    let room_types = state.room_type_service.list_room_types(hotel_id).await?;
    Ok(ListResponse::Ok(Json(room_types.into())))
}

/// `GET /v1/hotels/{hotel_id}/roomtypes/{room_type_id}`
pub async fn get<HR, RTR, RR>(
    State(state): State<AppState<HR, RTR, RR>>,
    Path((hotel_id, room_type_id)): Path<(String, String)>,
) -> Result<GetResponse, ApiError>
where
    HR: HotelRepository + Send + Sync + 'static,
    RTR: RoomTypeRepository + Send + Sync + 'static,
    RR: RoomRepository + Send + Sync + 'static,
{
    let hotel_id: HotelId = parse_id(&hotel_id, "hotel")?;
    let room_type_id: RoomTypeId = parse_id(&room_type_id, "room type")?;
    let room_type = state
        .room_type_service
        .get_room_type(hotel_id, room_type_id)
        .await?;
    Ok(GetResponse::Ok(Json(room_type)))
}

/// `POST /v1/hotels/{hotel_id}/roomtypes`
pub async fn create<HR, RTR, RR>(
    State(state): State<AppState<HR, RTR, RR>>,
    Path(hotel_id): Path<String>,
    body: Result<Json<CreateRoomTypeRequest>, JsonRejection>,
) -> Result<CreateResponse, ApiError>
where
    HR: HotelRepository + Send + Sync + 'static,
    RTR: RoomTypeRepository + Send + Sync + 'static,
    RR: RoomRepository + Send + Sync + 'static,
{
    let hotel_id: HotelId = parse_id(&hotel_id, "hotel")?;
    let Json(req) = body?;
    let room_type = RoomType::builder()
        .hotel_id(hotel_id)
        .name(req.name)
        .description(req.description)
        .number_of_beds(req.number_of_beds)
        .bed_type(req.bed_type)
        .max_occupancy(req.max_occupancy)
        .base_price(req.base_price)
        .build()?;

    let created = state.room_type_service.create_room_type(room_type).await?;
    Ok(CreateResponse::Created(Json(created)))
}

/// `PATCH /v1/hotels/{hotel_id}/roomtypes/{room_type_id}`
pub async fn update<HR, RTR, RR>(
    State(state): State<AppState<HR, RTR, RR>>,
    Path((hotel_id, room_type_id)): Path<(String, String)>,
    body: Result<Json<UpdateRoomTypeRequest>, JsonRejection>,
) -> Result<GetResponse, ApiError>
where
    HR: HotelRepository + Send + Sync + 'static,
    RTR: RoomTypeRepository + Send + Sync + 'static,
    RR: RoomRepository + Send + Sync + 'static,
{
    let hotel_id: HotelId = parse_id(&hotel_id, "hotel")?;
    let room_type_id: RoomTypeId = parse_id(&room_type_id, "room type")?;
    let Json(req) = body?;
    let updated = state
        .room_type_service
        .update_room_type(room_type_id, hotel_id, req.into())
        .await?;
    Ok(GetResponse::Ok(Json(updated)))
}
