//! Room service: use-cases for managing the physical rooms of a hotel.

use innkeep_domain::error::{InnkeepError, NotFoundError, OwnershipError, ValidationError};
use innkeep_domain::id::{HotelId, RoomId};
use innkeep_domain::room::{Room, RoomPatch};
use innkeep_domain::time::now;

use crate::ports::{HotelValidator, RoomRepository, RoomTypeValidator};

const ENTITY: &str = "room";

/// Application service for room CRUD operations.
///
/// Checks references through the [`HotelValidator`] and
/// [`RoomTypeValidator`] capabilities only.
pub struct RoomService<R, HV, RTV> {
    repo: R,
    hotels: HV,
    room_types: RTV,
}

impl<R, HV, RTV> RoomService<R, HV, RTV>
where
    R: RoomRepository,
    HV: HotelValidator,
    RTV: RoomTypeValidator,
{
    /// Create a new service backed by the given repository and validators.
    pub fn new(repo: R, hotels: HV, room_types: RTV) -> Self {
        Self {
            repo,
            hotels,
            room_types,
        }
    }

    /// List the rooms of a hotel, oldest first.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    #[tracing::instrument(skip(self))]
    pub async fn list_rooms(&self, hotel_id: HotelId) -> Result<Vec<Room>, InnkeepError> {
        self.repo
            .get_by_hotel_id(hotel_id)
            .await
            .inspect_err(|err| tracing::error!(%err, "failed to list rooms"))
    }

    /// Get a room, scoped to the hotel that owns it.
    ///
    /// # Errors
    ///
    /// Returns [`InnkeepError::NotFound`] if no room has this id, and
    /// [`InnkeepError::OwnershipMismatch`] if it belongs to another hotel.
    #[tracing::instrument(skip(self))]
    pub async fn get_room(&self, hotel_id: HotelId, room_id: RoomId) -> Result<Room, InnkeepError> {
        self.load_owned(hotel_id, room_id).await
    }

    /// Persist a freshly built room once both its hotel and its room type
    /// are confirmed to exist.
    ///
    /// The hotel is checked first; the room type check only runs when the
    /// hotel exists.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::HotelDoesNotExist`] or
    /// [`ValidationError::RoomTypeDoesNotExist`]. A failing check is
    /// propagated as-is. Nothing is persisted in any of these cases.
    #[tracing::instrument(
        skip(self, room),
        fields(room_id = %room.id, hotel_id = %room.hotel_id, room_type_id = %room.room_type_id)
    )]
    pub async fn create_room(&self, room: Room) -> Result<Room, InnkeepError> {
        room.validate()?;

        if !self.hotels.hotel_exists(room.hotel_id).await? {
            tracing::info!("refusing room for unknown hotel");
            return Err(ValidationError::HotelDoesNotExist.into());
        }
        if !self.room_types.room_type_exists(room.room_type_id).await? {
            tracing::info!("refusing room for unknown room type");
            return Err(ValidationError::RoomTypeDoesNotExist.into());
        }

        let created = self
            .repo
            .create(room)
            .await
            .inspect_err(|err| tracing::error!(%err, "failed to create room"))?;
        tracing::info!("room created");
        Ok(created)
    }

    /// Merge the fields present in `patch` onto a room of `hotel_id`.
    ///
    /// A new `room_type_id` must refer to an existing room type. Whether
    /// that room type belongs to the same hotel is not checked.
    ///
    /// # Errors
    ///
    /// Returns [`InnkeepError::NotFound`], [`InnkeepError::OwnershipMismatch`],
    /// [`ValidationError::RoomTypeDoesNotExist`], any other
    /// [`InnkeepError::Validation`] from the merged room, or
    /// [`InnkeepError::Conflict`] when it changed since it was read.
    #[tracing::instrument(skip(self, patch))]
    pub async fn update_room(
        &self,
        room_id: RoomId,
        hotel_id: HotelId,
        patch: RoomPatch,
    ) -> Result<Room, InnkeepError> {
        let mut room = self.load_owned(hotel_id, room_id).await?;

        if let Some(room_type_id) = patch.room_type_id {
            if !self.room_types.room_type_exists(room_type_id).await? {
                tracing::info!(%room_type_id, "refusing unknown room type");
                return Err(ValidationError::RoomTypeDoesNotExist.into());
            }
        }

        room.apply(patch, now());
        room.validate()?;

        let updated = self
            .repo
            .update(room)
            .await
            .inspect_err(|err| tracing::error!(%err, "failed updating room"))?;
        tracing::info!(version = updated.version, "room updated");
        Ok(updated)
    }

    async fn load_owned(&self, hotel_id: HotelId, room_id: RoomId) -> Result<Room, InnkeepError> {
        let room = self
            .repo
            .get_by_id(room_id)
            .await?
            .ok_or_else(|| NotFoundError {
                entity: ENTITY,
                id: room_id.to_string(),
            })?;

        if room.hotel_id != hotel_id {
            tracing::info!(owner = %room.hotel_id, "room belongs to another hotel");
            return Err(OwnershipError {
                entity: ENTITY,
                id: room_id.to_string(),
                hotel_id: hotel_id.to_string(),
            }
            .into());
        }

        Ok(room)
    }
}
