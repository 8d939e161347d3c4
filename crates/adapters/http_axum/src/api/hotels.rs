//! JSON REST handlers for hotels.

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Deserialize;

use innkeep_app::ports::{HotelRepository, RoomRepository, RoomTypeRepository};
use innkeep_domain::hotel::{Hotel, HotelPatch};
use innkeep_domain::id::HotelId;

use super::{Results, parse_id};
use crate::error::ApiError;
use crate::state::AppState;

/// Request body for creating a hotel.
#[derive(Deserialize)]
pub struct CreateHotelRequest {
    pub name: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub country: String,
    #[serde(default)]
    pub state: String,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub description: String,
}

/// Request body for partially updating a hotel. Absent fields are kept.
#[derive(Deserialize)]
pub struct UpdateHotelRequest {
    pub name: Option<String>,
    pub address: Option<String>,
    pub status: Option<String>,
    pub description: Option<String>,
}

impl From<UpdateHotelRequest> for HotelPatch {
    fn from(req: UpdateHotelRequest) -> Self {
        Self {
            name: req.name,
            address: req.address,
            status: req.status,
            description: req.description,
        }
    }
}

/// Possible responses from the list endpoint.
pub enum ListResponse {
    Ok(Json<Results<Hotel>>),
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
    Ok(Json<Hotel>),
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
    Created(Json<Hotel>),
}

impl IntoResponse for CreateResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Created(json) => (StatusCode::CREATED, json).into_response(),
        }
    }
}

/// `GET /v1/hotels`
pub async fn list<HR, RTR, RR>(
    State(state): State<AppState<HR, RTR, RR>>,
) -> Result<ListResponse, ApiError>
where
    HR: HotelRepository + Send + Sync + 'static,
    RTR: RoomTypeRepository + Send + Sync + 'static,
    RR: RoomRepository + Send + Sync + 'static,
{
    let hotels = state.hotel_service.list_hotels().await?;
    Ok(ListResponse::Ok(Json(hotels.into())))
}

/// `GET /v1/hotels/{hotel_id}`
pub async fn get<HR, RTR, RR>(
    State(state): State<AppState<HR, RTR, RR>>,
    Path(hotel_id): Path<String>,
) -> Result<GetResponse, ApiError>
where
    HR: HotelRepository + Send + Sync + 'static,
    RTR: RoomTypeRepository + Send + Sync + 'static,
    RR: RoomRepository + Send + Sync + 'static,
{
    let hotel_id: HotelId = parse_id(&hotel_id, "hotel")?;
    let hotel = state.hotel_service.get_hotel(hotel_id).await?;
    Ok(GetResponse::Ok(Json(hotel)))
}

/// `POST /v1/hotels`
pub async fn create<HR, RTR, RR>(
    State(state): State<AppState<HR, RTR, RR>>,
    body: Result<Json<CreateHotelRequest>, JsonRejection>,
) -> Result<CreateResponse, ApiError>
where
    HR: HotelRepository + Send + Sync + 'static,
    RTR: RoomTypeRepository + Send + Sync + 'static,
    RR: RoomRepository + Send + Sync + 'static,
{
    let Json(req) = body?;
    let hotel = Hotel::builder()
        .name(req.name)
        .address(req.address)
        .country(req.country)
        .state(req.state)
        .status(req.status)
        .description(req.description)
        .build()?;

    let created = state.hotel_service.create_hotel(hotel).await?;
    Ok(CreateResponse::Created(Json(created)))
}

/// `PATCH /v1/hotels/{hotel_id}`
pub async fn update<HR, RTR, RR>(
    State(state): State<AppState<HR, RTR, RR>>,
    Path(hotel_id): Path<String>,
    body: Result<Json<UpdateHotelRequest>, JsonRejection>,
) -> Result<GetResponse, ApiError>
where
    HR: HotelRepository + Send + Sync + 'static,
    RTR: RoomTypeRepository + Send + Sync + 'static,
    RR: RoomRepository + Send + Sync + 'static,
{
    let hotel_id: HotelId = parse_id(&hotel_id, "hotel")?;
    let Json(req) = body?;
    let updated = state
        .hotel_service
        .update_hotel(hotel_id, req.into())
        .await?;
    Ok(GetResponse::Ok(Json(updated)))
}
