//! Shared application state for axum handlers.

use std::sync::Arc;

use innkeep_app::ports::{HotelRepository, RoomRepository, RoomTypeRepository};
use innkeep_app::services::hotel_service::HotelService;
use innkeep_app::services::room_service::RoomService;
use innkeep_app::services::room_type_service::RoomTypeService;

/// Room type service whose hotel check is answered by the shared hotel service.
pub type RoomTypes<HR, RTR> = RoomTypeService<RTR, Arc<HotelService<HR>>>;

/// Room service wired to the shared hotel and room type services.
pub type Rooms<HR, RTR, RR> = RoomService<RR, Arc<HotelService<HR>>, Arc<RoomTypes<HR, RTR>>>;

/// Application state shared across all axum handlers.
///
/// Generic over the three repository types to avoid dynamic dispatch.
/// `Clone` is implemented manually so the repositories themselves do not
/// need to be `Clone`; only the `Arc` wrappers are cloned.
pub struct AppState<HR, RTR, RR> {
    /// Hotel CRUD service, also the hotel validator of the other two.
    pub hotel_service: Arc<HotelService<HR>>,
    /// Room type CRUD service, also the room type validator of rooms.
    pub room_type_service: Arc<RoomTypes<HR, RTR>>,
    /// Room CRUD service.
    pub room_service: Arc<Rooms<HR, RTR, RR>>,
}

impl<HR, RTR, RR> Clone for AppState<HR, RTR, RR> {
    fn clone(&self) -> Self {
        Self {
            hotel_service: Arc::clone(&self.hotel_service),
            room_type_service: Arc::clone(&self.room_type_service),
            room_service: Arc::clone(&self.room_service),
        }
    }
}

impl<HR, RTR, RR> AppState<HR, RTR, RR>
where
    HR: HotelRepository + Send + Sync + 'static,
    RTR: RoomTypeRepository + Send + Sync + 'static,
    RR: RoomRepository + Send + Sync + 'static,
{
    /// Build the service graph on top of the given repositories.
    ///
    /// A single hotel service instance serves HTTP requests and answers the
    /// hotel checks of both dependent services; likewise for room types.
    pub fn new(hotel_repo: HR, room_type_repo: RTR, room_repo: RR) -> Self {
        let hotel_service = Arc::new(HotelService::new(hotel_repo));
        let room_type_service = Arc::new(RoomTypeService::new(
            room_type_repo,
            Arc::clone(&hotel_service),
        ));
        let room_service = Arc::new(RoomService::new(
            room_repo,
            Arc::clone(&hotel_service),
            Arc::clone(&room_type_service),
        ));

        Self {
            hotel_service,
            room_type_service,
            room_service,
        }
    }
}
