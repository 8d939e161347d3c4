//! Storage port: repository traits for persistence.
//!
//! Every method is a single round trip to the store. Absence is reported as
//! `Ok(None)` from `get_by_id`, never as an error.
//!
//! `update` overwrites the whole row, guarded by the entity's `version`:
//! implementations must only write when the stored version equals the one
//! carried by the argument, bump it by one, and otherwise fail with
//! [`InnkeepError::Conflict`].

use std::future::Future;

use innkeep_domain::error::InnkeepError;
use innkeep_domain::hotel::Hotel;
use innkeep_domain::id::{HotelId, RoomId, RoomTypeId};
use innkeep_domain::room::Room;
use innkeep_domain::room_type::RoomType;

/// Repository for persisting and querying [`Hotel`]s.
pub trait HotelRepository {
    /// Insert a new hotel.
    fn create(&self, hotel: Hotel) -> impl Future<Output = Result<Hotel, InnkeepError>> + Send;

    /// Overwrite an existing hotel, returning it with its new version.
    fn update(&self, hotel: Hotel) -> impl Future<Output = Result<Hotel, InnkeepError>> + Send;

    /// Delete a hotel by its unique identifier.
    fn delete(&self, id: HotelId) -> impl Future<Output = Result<(), InnkeepError>> + Send;

    /// Get every hotel.
    fn get_all(&self) -> impl Future<Output = Result<Vec<Hotel>, InnkeepError>> + Send;

    /// Get a hotel by its unique identifier.
    fn get_by_id(
        &self,
        id: HotelId,
    ) -> impl Future<Output = Result<Option<Hotel>, InnkeepError>> + Send;
}

/// Repository for persisting and querying [`RoomType`]s.
pub trait RoomTypeRepository {
    /// Insert a new room type.
    fn create(
        &self,
        room_type: RoomType,
    ) -> impl Future<Output = Result<RoomType, InnkeepError>> + Send;

    /// Overwrite an existing room type, returning it with its new version.
    fn update(
        &self,
        room_type: RoomType,
    ) -> impl Future<Output = Result<RoomType, InnkeepError>> + Send;

    /// Delete a room type by its unique identifier.
    fn delete(&self, id: RoomTypeId) -> impl Future<Output = Result<(), InnkeepError>> + Send;

    /// Get every room type of every hotel.
    fn get_all(&self) -> impl Future<Output = Result<Vec<RoomType>, InnkeepError>> + Send;

    /// Get a room type by its unique identifier, whatever hotel owns it.
    fn get_by_id(
        &self,
        id: RoomTypeId,
    ) -> impl Future<Output = Result<Option<RoomType>, InnkeepError>> + Send;

    /// Get the room types of one hotel, oldest first.
    fn get_by_hotel_id(
        &self,
        hotel_id: HotelId,
    ) -> impl Future<Output = Result<Vec<RoomType>, InnkeepError>> + Send;
}

/// Repository for persisting and querying [`Room`]s.
pub trait RoomRepository {
    /// Insert a new room.
    fn create(&self, room: Room) -> impl Future<Output = Result<Room, InnkeepError>> + Send;

    /// Overwrite an existing room, returning it with its new version.
    fn update(&self, room: Room) -> impl Future<Output = Result<Room, InnkeepError>> + Send;

    /// Delete a room by its unique identifier.
    fn delete(&self, id: RoomId) -> impl Future<Output = Result<(), InnkeepError>> + Send;

    /// Get every room of every hotel.
    fn get_all(&self) -> impl Future<Output = Result<Vec<Room>, InnkeepError>> + Send;

    /// Get a room by its unique identifier, whatever hotel owns it.
    fn get_by_id(
        &self,
        id: RoomId,
    ) -> impl Future<Output = Result<Option<Room>, InnkeepError>> + Send;

    /// Get the rooms of one hotel, oldest first.
    fn get_by_hotel_id(
        &self,
        hotel_id: HotelId,
    ) -> impl Future<Output = Result<Vec<Room>, InnkeepError>> + Send;
}
