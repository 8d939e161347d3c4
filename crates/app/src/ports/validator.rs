//! Validator capabilities: single-method existence checks.
//!
//! A service that owns an entity other services reference implements the
//! matching trait; dependent services are generic over the trait and never
//! see the owning service's full API. This keeps the service graph acyclic
//! and lets each service be tested with a stub.
//!
//! `Ok(false)` means "definitely absent". `Err(_)` means the check itself
//! failed; callers must not treat it as absence.

use std::future::Future;
use std::sync::Arc;

use innkeep_domain::error::InnkeepError;
use innkeep_domain::id::{HotelId, RoomTypeId};

/// Answers whether a hotel exists.
pub trait HotelValidator {
    fn hotel_exists(&self, id: HotelId) -> impl Future<Output = Result<bool, InnkeepError>> + Send;
}

/// Answers whether a room type exists.
pub trait RoomTypeValidator {
    fn room_type_exists(
        &self,
        id: RoomTypeId,
    ) -> impl Future<Output = Result<bool, InnkeepError>> + Send;
}

impl<T: HotelValidator + Send + Sync> HotelValidator for Arc<T> {
    fn hotel_exists(&self, id: HotelId) -> impl Future<Output = Result<bool, InnkeepError>> + Send {
        (**self).hotel_exists(id)
    }
}

impl<T: RoomTypeValidator + Send + Sync> RoomTypeValidator for Arc<T> {
    fn room_type_exists(
        &self,
        id: RoomTypeId,
    ) -> impl Future<Output = Result<bool, InnkeepError>> + Send {
        (**self).room_type_exists(id)
    }
}
