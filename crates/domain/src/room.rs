//! Room: a physical room of a hotel, classified by a room type.

use serde::{Deserialize, Serialize};

use crate::error::{InnkeepError, ValidationError};
use crate::id::{HotelId, RoomId, RoomTypeId};
use crate::time::{Timestamp, now};

/// A bookable physical room.
///
/// The owning hotel is fixed at creation. The room type may change through a
/// [`RoomPatch`], but the referenced room type must exist. Whether the room
/// type belongs to the same hotel is not checked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Room {
    pub id: RoomId,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
    pub version: i64,
    pub hotel_id: HotelId,
    pub room_type_id: RoomTypeId,
    pub floor: i32,
    pub number: i32,
    pub name: String,
    pub status: String,
}

impl Room {
    /// Create a builder for constructing a [`Room`].
    #[must_use]
    pub fn builder() -> RoomBuilder {
        RoomBuilder::default()
    }

    /// Check domain invariants.
    ///
    /// # Errors
    ///
    /// Returns [`InnkeepError::Validation`] when the room number is not positive.
    pub fn validate(&self) -> Result<(), InnkeepError> {
        if self.number <= 0 {
            return Err(ValidationError::NotPositive { field: "number" }.into());
        }
        Ok(())
    }

    /// Merge the fields present in `patch` and stamp `updated_at` with `at`.
    pub fn apply(&mut self, patch: RoomPatch, at: Timestamp) {
        if let Some(room_type_id) = patch.room_type_id {
            self.room_type_id = room_type_id;
        }
        if let Some(floor) = patch.floor {
            self.floor = floor;
        }
        if let Some(number) = patch.number {
            self.number = number;
        }
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(status) = patch.status {
            self.status = status;
        }
        self.updated_at = at;
    }
}

/// Sparse set of room fields to update. `None` means "leave as is".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoomPatch {
    pub room_type_id: Option<RoomTypeId>,
    pub floor: Option<i32>,
    pub number: Option<i32>,
    pub name: Option<String>,
    pub status: Option<String>,
}

/// Step-by-step builder for [`Room`].
#[derive(Debug, Default)]
pub struct RoomBuilder {
    hotel_id: Option<HotelId>,
    room_type_id: Option<RoomTypeId>,
    floor: Option<i32>,
    number: Option<i32>,
    name: Option<String>,
    status: Option<String>,
}

impl RoomBuilder {
    #[must_use]
    pub fn hotel_id(mut self, hotel_id: HotelId) -> Self {
        self.hotel_id = Some(hotel_id);
        self
    }

    #[must_use]
    pub fn room_type_id(mut self, room_type_id: RoomTypeId) -> Self {
        self.room_type_id = Some(room_type_id);
        self
    }

    #[must_use]
    pub fn floor(mut self, floor: i32) -> Self {
        self.floor = Some(floor);
        self
    }

    #[must_use]
    pub fn number(mut self, number: i32) -> Self {
        self.number = Some(number);
        self
    }

    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = Some(status.into());
        self
    }

    /// Consume the builder, stamp a fresh id and timestamps, validate, and
    /// return a [`Room`].
    ///
    /// # Errors
    ///
    /// Returns [`InnkeepError::Validation`] if `hotel_id` or `room_type_id`
    /// is missing, or the room number is not positive.
    pub fn build(self) -> Result<Room, InnkeepError> {
        let hotel_id = self
            .hotel_id
            .ok_or(ValidationError::MissingField("hotel_id"))?;
        let room_type_id = self
            .room_type_id
            .ok_or(ValidationError::MissingField("room_type_id"))?;

        let ts = now();
        let room = Room {
            id: RoomId::new(),
            created_at: ts,
            updated_at: ts,
            version: 1,
            hotel_id,
            room_type_id,
            floor: self.floor.unwrap_or_default(),
            number: self.number.unwrap_or_default(),
            name: self.name.unwrap_or_default(),
            status: self.status.unwrap_or_default(),
        };
        room.validate()?;
        Ok(room)
    }
}
