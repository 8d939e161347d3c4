//! JSON REST API handler modules.

#[allow(clippy::missing_errors_doc)]
pub mod hotels;
#[allow(clippy::missing_errors_doc)]
pub mod room_types;
#[allow(clippy::missing_errors_doc)]
pub mod rooms;

use std::str::FromStr;

use axum::Router;
use axum::routing::get;
use serde::Serialize;

use innkeep_app::ports::{HotelRepository, RoomRepository, RoomTypeRepository};

use crate::error::ApiError;
use crate::state::AppState;

/// Envelope of every list response: `{"results": [...]}`.
#[derive(Serialize)]
pub struct Results<T> {
    pub results: Vec<T>,
}

impl<T> From<Vec<T>> for Results<T> {
    fn from(results: Vec<T>) -> Self {
        Self { results }
    }
}

/// Parse an identifier taken from the request path.
pub(crate) fn parse_id<T: FromStr>(raw: &str, what: &str) -> Result<T, ApiError> {
    T::from_str(raw).map_err(|_| ApiError::Malformed(format!("invalid {what} id `{raw}`")))
}

/// Build the `/v1` sub-router.
pub fn routes<HR, RTR, RR>() -> Router<AppState<HR, RTR, RR>>
where
    HR: HotelRepository + Send + Sync + 'static,
    RTR: RoomTypeRepository + Send + Sync + 'static,
    RR: RoomRepository + Send + Sync + 'static,
{
    Router::new()
        // Hotels
        .route(
            "/hotels",
            get(hotels::list::<HR, RTR, RR>).post(hotels::create::<HR, RTR, RR>),
        )
        .route(
            "/hotels/{hotel_id}",
            get(hotels::get::<HR, RTR, RR>).patch(hotels::update::<HR, RTR, RR>),
        )
        // Room types
        .route(
            "/hotels/{hotel_id}/roomtypes",
            get(room_types::list::<HR, RTR, RR>).post(room_types::create::<HR, RTR, RR>),
        )
        .route(
            "/hotels/{hotel_id}/roomtypes/{room_type_id}",
            get(room_types::get::<HR, RTR, RR>).patch(room_types::update::<HR, RTR, RR>),
        )
        // Rooms
        .route(
            "/hotels/{hotel_id}/rooms",
            get(rooms::list::<HR, RTR, RR>).post(rooms::create::<HR, RTR, RR>),
        )
        .route(
            "/hotels/{hotel_id}/rooms/{room_id}",
            get(rooms::get::<HR, RTR, RR>)
                .patch(rooms::update::<HR, RTR, RR>)
                .put(rooms::update::<HR, RTR, RR>),
        )
}
