//! Room type: a category of room offered by a hotel (beds, occupancy, price).

use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{InnkeepError, ValidationError};
use crate::id::{HotelId, RoomTypeId};
use crate::time::{Timestamp, now};

/// Kind of bed installed in a room type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BedType {
    Queen,
    King,
    Twin,
}

impl fmt::Display for BedType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Queen => f.write_str("queen"),
            Self::King => f.write_str("king"),
            Self::Twin => f.write_str("twin"),
        }
    }
}

/// Returned when parsing an unknown bed type.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown bed type `{0}`")]
pub struct UnknownBedType(pub String);

impl FromStr for BedType {
    type Err = UnknownBedType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "queen" => Ok(Self::Queen),
            "king" => Ok(Self::King),
            "twin" => Ok(Self::Twin),
            other => Err(UnknownBedType(other.to_string())),
        }
    }
}

/// A room category belonging to exactly one hotel.
///
/// `hotel_id` is fixed at creation: [`RoomTypePatch`] has no field for it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoomType {
    pub id: RoomTypeId,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
    pub version: i64,
    pub hotel_id: HotelId,
    pub name: String,
    pub description: String,
    pub number_of_beds: i32,
    pub bed_type: BedType,
    pub max_occupancy: i32,
    pub base_price: Decimal,
}

impl RoomType {
    /// Create a builder for constructing a [`RoomType`].
    #[must_use]
    pub fn builder() -> RoomTypeBuilder {
        RoomTypeBuilder::default()
    }

    /// Check domain invariants.
    ///
    /// # Errors
    ///
    /// Returns [`InnkeepError::Validation`] when the name is empty, the bed
    /// count or occupancy is not positive, or the base price is negative.
    pub fn validate(&self) -> Result<(), InnkeepError> {
        if self.name.trim().is_empty() {
            return Err(ValidationError::EmptyName.into());
        }
        if self.number_of_beds <= 0 {
            return Err(ValidationError::NotPositive {
                field: "number_of_beds",
            }
            .into());
        }
        if self.max_occupancy <= 0 {
            return Err(ValidationError::NotPositive {
                field: "max_occupancy",
            }
            .into());
        }
        if self.base_price < Decimal::ZERO {
            return Err(ValidationError::NegativePrice.into());
        }
        Ok(())
    }

    /// Merge the fields present in `patch` and stamp `updated_at` with `at`.
    pub fn apply(&mut self, patch: RoomTypePatch, at: Timestamp) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(description) = patch.description {
            self.description = description;
        }
        if let Some(number_of_beds) = patch.number_of_beds {
            self.number_of_beds = number_of_beds;
        }
        if let Some(bed_type) = patch.bed_type {
            self.bed_type = bed_type;
        }
        if let Some(max_occupancy) = patch.max_occupancy {
            self.max_occupancy = max_occupancy;
        }
        if let Some(base_price) = patch.base_price {
            self.base_price = base_price;
        }
        self.updated_at = at;
    }
}

/// Sparse set of room type fields to update. `None` means "leave as is".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoomTypePatch {
    pub name: Option<String>,
    pub description: Option<String>,
    pub number_of_beds: Option<i32>,
    pub bed_type: Option<BedType>,
    pub max_occupancy: Option<i32>,
    pub base_price: Option<Decimal>,
}

/// Step-by-step builder for [`RoomType`].
#[derive(Debug, Default)]
pub struct RoomTypeBuilder {
    hotel_id: Option<HotelId>,
    name: Option<String>,
    description: Option<String>,
    number_of_beds: Option<i32>,
    bed_type: Option<BedType>,
    max_occupancy: Option<i32>,
    base_price: Option<Decimal>,
}

impl RoomTypeBuilder {
    #[must_use]
    pub fn hotel_id(mut self, hotel_id: HotelId) -> Self {
        self.hotel_id = Some(hotel_id);
        self
    }

    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    #[must_use]
    pub fn number_of_beds(mut self, number_of_beds: i32) -> Self {
        self.number_of_beds = Some(number_of_beds);
        self
    }

    #[must_use]
    pub fn bed_type(mut self, bed_type: BedType) -> Self {
        self.bed_type = Some(bed_type);
        self
    }

    #[must_use]
    pub fn max_occupancy(mut self, max_occupancy: i32) -> Self {
        self.max_occupancy = Some(max_occupancy);
        self
    }

    #[must_use]
    pub fn base_price(mut self, base_price: Decimal) -> Self {
        self.base_price = Some(base_price);
        self
    }

    /// Consume the builder, stamp a fresh id and timestamps, validate, and
    /// return a [`RoomType`].
    ///
    /// # Errors
    ///
    /// Returns [`InnkeepError::Validation`] if `hotel_id` or `bed_type` is
    /// missing, or if any invariant of [`RoomType::validate`] fails.
    pub fn build(self) -> Result<RoomType, InnkeepError> {
        let hotel_id = self
            .hotel_id
            .ok_or(ValidationError::MissingField("hotel_id"))?;
        let bed_type = self
            .bed_type
            .ok_or(ValidationError::MissingField("bed_type"))?;

        let ts = now();
        let room_type = RoomType {
            id: RoomTypeId::new(),
            created_at: ts,
            updated_at: ts,
            version: 1,
            hotel_id,
            name: self.name.unwrap_or_default(),
            description: self.description.unwrap_or_default(),
            number_of_beds: self.number_of_beds.unwrap_or_default(),
            bed_type,
            max_occupancy: self.max_occupancy.unwrap_or_default(),
            base_price: self.base_price.unwrap_or_default(),
        };
        room_type.validate()?;
        Ok(room_type)
    }
}
