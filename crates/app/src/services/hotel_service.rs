//! Hotel service: use-cases for managing hotels.

use innkeep_domain::error::{FetchError, InnkeepError, NotFoundError};
use innkeep_domain::hotel::{Hotel, HotelPatch};
use innkeep_domain::id::HotelId;
use innkeep_domain::time::now;

use crate::ports::{HotelRepository, HotelValidator};

/// Application service for hotel CRUD operations.
///
/// Also provides the [`HotelValidator`] capability consumed by the room type
/// and room services.
pub struct HotelService<R> {
    repo: R,
}

fn not_found(id: HotelId) -> InnkeepError {
    NotFoundError {
        entity: "hotel",
        id: id.to_string(),
    }
    .into()
}

impl<R: HotelRepository> HotelService<R> {
    /// Create a new service backed by the given repository.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// List every hotel. An empty store yields an empty list.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    #[tracing::instrument(skip(self))]
    pub async fn list_hotels(&self) -> Result<Vec<Hotel>, InnkeepError> {
        tracing::debug!("fetching all hotels");
        self.repo
            .get_all()
            .await
            .inspect_err(|err| tracing::error!(%err, "failed to list hotels"))
    }

    /// Look up a hotel by id.
    ///
    /// # Errors
    ///
    /// Returns [`InnkeepError::NotFound`] when no hotel with `id` exists.
    /// Any other lookup failure is reported as a generic
    /// "unexpected error fetching hotel" storage error; the cause is logged.
    #[tracing::instrument(skip(self))]
    pub async fn get_hotel(&self, id: HotelId) -> Result<Hotel, InnkeepError> {
        match self.repo.get_by_id(id).await {
            Ok(Some(hotel)) => Ok(hotel),
            Ok(None) => Err(not_found(id)),
            Err(source) => {
                tracing::error!(error = %source, "unexpected error fetching hotel");
                Err(FetchError {
                    entity: "hotel",
                    source,
                }
                .into())
            }
        }
    }

    /// Persist a freshly built hotel.
    ///
    /// No uniqueness constraint on name or address is enforced here.
    ///
    /// # Errors
    ///
    /// Returns [`InnkeepError::Validation`] if invariants fail, or a
    /// storage error propagated from the repository.
    #[tracing::instrument(skip(self, hotel), fields(hotel_id = %hotel.id, hotel_name = %hotel.name))]
    pub async fn create_hotel(&self, hotel: Hotel) -> Result<Hotel, InnkeepError> {
        hotel.validate()?;
        let created = self
            .repo
            .create(hotel)
            .await
            .inspect_err(|err| tracing::error!(%err, "failed to create hotel"))?;
        tracing::info!("hotel created");
        Ok(created)
    }

    /// Merge the fields present in `patch` onto the stored hotel.
    ///
    /// # Errors
    ///
    /// Returns [`InnkeepError::NotFound`] if the hotel does not exist,
    /// [`InnkeepError::Validation`] if the merged hotel breaks an invariant,
    /// [`InnkeepError::Conflict`] if the hotel changed since it was read,
    /// or a storage error from the repository.
    #[tracing::instrument(skip(self, patch))]
    pub async fn update_hotel(&self, id: HotelId, patch: HotelPatch) -> Result<Hotel, InnkeepError> {
        let mut hotel = self.repo.get_by_id(id).await?.ok_or_else(|| {
            tracing::info!("hotel not found");
            not_found(id)
        })?;

        hotel.apply(patch, now());
        hotel.validate()?;

        let updated = self
            .repo
            .update(hotel)
            .await
            .inspect_err(|err| tracing::error!(%err, "failed updating hotel"))?;
        tracing::info!(version = updated.version, "hotel updated");
        Ok(updated)
    }
}

impl<R: HotelRepository + Send + Sync> HotelValidator for HotelService<R> {
    async fn hotel_exists(&self, id: HotelId) -> Result<bool, InnkeepError> {
        Ok(self.repo.get_by_id(id).await?.is_some())
    }
}
