//! Room type service: use-cases for managing the room categories of a hotel.

use innkeep_domain::error::{InnkeepError, NotFoundError, OwnershipError, ValidationError};
use innkeep_domain::id::{HotelId, RoomTypeId};
use innkeep_domain::room_type::{RoomType, RoomTypePatch};
use innkeep_domain::time::now;

use crate::ports::{HotelValidator, RoomTypeRepository, RoomTypeValidator};

const ENTITY: &str = "room type";

/// Application service for room type CRUD operations.
///
/// Needs a [`HotelValidator`] to check the owning hotel on creation, and
/// provides the [`RoomTypeValidator`] capability to the room service.
pub struct RoomTypeService<R, HV> {
    repo: R,
    hotels: HV,
}

impl<R: RoomTypeRepository, HV: HotelValidator> RoomTypeService<R, HV> {
    /// Create a new service backed by the given repository and hotel validator.
    pub fn new(repo: R, hotels: HV) -> Self {
        Self { repo, hotels }
    }

    /// List the room types of a hotel, oldest first.
    ///
    /// An unknown hotel simply has no room types.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    #[tracing::instrument(skip(self))]
    pub async fn list_room_types(&self, hotel_id: HotelId) -> Result<Vec<RoomType>, InnkeepError> {
        self.repo
            .get_by_hotel_id(hotel_id)
            .await
            .inspect_err(|err| tracing::error!(%err, "failed to list room types"))
    }

    /// Get a room type, scoped to the hotel that owns it.
    ///
    /// # Errors
    ///
    /// Returns [`InnkeepError::NotFound`] if no room type has this id, and
    /// [`InnkeepError::OwnershipMismatch`] if it belongs to another hotel.
    #[tracing::instrument(skip(self))]
    pub async fn get_room_type(
        &self,
        hotel_id: HotelId,
        room_type_id: RoomTypeId,
    ) -> Result<RoomType, InnkeepError> {
        self.load_owned(hotel_id, room_type_id).await
    }

    /// Persist a freshly built room type after checking its hotel exists.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::HotelDoesNotExist`] when the hotel is
    /// unknown. A failing hotel check is propagated as-is. Nothing is
    /// persisted in either case.
    #[tracing::instrument(
        skip(self, room_type),
        fields(room_type_id = %room_type.id, hotel_id = %room_type.hotel_id)
    )]
    pub async fn create_room_type(&self, room_type: RoomType) -> Result<RoomType, InnkeepError> {
        room_type.validate()?;

        if !self.hotels.hotel_exists(room_type.hotel_id).await? {
            tracing::info!("refusing room type for unknown hotel");
            return Err(ValidationError::HotelDoesNotExist.into());
        }

        let created = self
            .repo
            .create(room_type)
            .await
            .inspect_err(|err| tracing::error!(%err, "failed to create room type"))?;
        tracing::info!("room type created");
        Ok(created)
    }

    /// Merge the fields present in `patch` onto a room type of `hotel_id`.
    ///
    /// # Errors
    ///
    /// Returns [`InnkeepError::NotFound`], [`InnkeepError::OwnershipMismatch`],
    /// [`InnkeepError::Validation`] when the merged room type is invalid, or
    /// [`InnkeepError::Conflict`] when it changed since it was read.
    #[tracing::instrument(skip(self, patch))]
    pub async fn update_room_type(
        &self,
        room_type_id: RoomTypeId,
        hotel_id: HotelId,
        patch: RoomTypePatch,
    ) -> Result<RoomType, InnkeepError> {
        let mut room_type = self.load_owned(hotel_id, room_type_id).await?;

        room_type.apply(patch, now());
        room_type.validate()?;

        let updated = self
            .repo
            .update(room_type)
            .await
            .inspect_err(|err| tracing::error!(%err, "failed updating room type"))?;
        tracing::info!(version = updated.version, "room type updated");
        Ok(updated)
    }

    async fn load_owned(
        &self,
        hotel_id: HotelId,
        room_type_id: RoomTypeId,
    ) -> Result<RoomType, InnkeepError> {
        let room_type = self.repo.get_by_id(room_type_id).await?.ok_or_else(|| {
            NotFoundError {
                entity: ENTITY,
                id: room_type_id.to_string(),
            }
        })?;

        if room_type.hotel_id != hotel_id {
            tracing::info!(owner = %room_type.hotel_id, "room type belongs to another hotel");
            return Err(OwnershipError {
                entity: ENTITY,
                id: room_type_id.to_string(),
                hotel_id: hotel_id.to_string(),
            }
            .into());
        }

        Ok(room_type)
    }
}

impl<R, HV> RoomTypeValidator for RoomTypeService<R, HV>
where
    R: RoomTypeRepository + Send + Sync,
    HV: Send + Sync,
{
    async fn room_type_exists(&self, id: RoomTypeId) -> Result<bool, InnkeepError> {
        Ok(self.repo.get_by_id(id).await?.is_some())
    }
}
