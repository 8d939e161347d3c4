//! Hotel: the root entity owning room types and rooms.

use serde::{Deserialize, Serialize};

use crate::error::{InnkeepError, ValidationError};
use crate::id::HotelId;
use crate::time::{Timestamp, now};

/// A hotel and its descriptive data.
///
/// `status` is free-form: no transition table is enforced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hotel {
    pub id: HotelId,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
    /// Incremented on every persisted update; used for optimistic locking.
    pub version: i64,
    pub name: String,
    pub address: String,
    pub country: String,
    pub state: String,
    pub status: String,
    pub description: String,
}

impl Hotel {
    /// Create a builder for constructing a [`Hotel`].
    #[must_use]
    pub fn builder() -> HotelBuilder {
        HotelBuilder::default()
    }

    /// Check domain invariants.
    ///
    /// # Errors
    ///
    /// Returns [`InnkeepError::Validation`] when `name` is empty.
    pub fn validate(&self) -> Result<(), InnkeepError> {
        if self.name.trim().is_empty() {
            return Err(ValidationError::EmptyName.into());
        }
        Ok(())
    }

    /// Merge the fields present in `patch`, leaving the others untouched,
    /// and stamp `updated_at` with `at`.
    pub fn apply(&mut self, patch: HotelPatch, at: Timestamp) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(address) = patch.address {
            self.address = address;
        }
        if let Some(status) = patch.status {
            self.status = status;
        }
        if let Some(description) = patch.description {
            self.description = description;
        }
        self.updated_at = at;
    }
}

/// Sparse set of hotel fields to update. `None` means "leave as is".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HotelPatch {
    pub name: Option<String>,
    pub address: Option<String>,
    pub status: Option<String>,
    pub description: Option<String>,
}

/// Step-by-step builder for [`Hotel`].
#[derive(Debug, Default)]
pub struct HotelBuilder {
    name: Option<String>,
    address: Option<String>,
    country: Option<String>,
    state: Option<String>,
    status: Option<String>,
    description: Option<String>,
}

impl HotelBuilder {
    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn address(mut self, address: impl Into<String>) -> Self {
        self.address = Some(address.into());
        self
    }

    #[must_use]
    pub fn country(mut self, country: impl Into<String>) -> Self {
        self.country = Some(country.into());
        self
    }

    #[must_use]
    pub fn state(mut self, state: impl Into<String>) -> Self {
        self.state = Some(state.into());
        self
    }

    #[must_use]
    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = Some(status.into());
        self
    }

    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Consume the builder, stamp a fresh id and timestamps, validate, and
    /// return a [`Hotel`].
    ///
    /// # Errors
    ///
    /// Returns [`InnkeepError::Validation`] if `name` is missing or empty.
    pub fn build(self) -> Result<Hotel, InnkeepError> {
        let ts = now();
        let hotel = Hotel {
            id: HotelId::new(),
            created_at: ts,
            updated_at: ts,
            version: 1,
            name: self.name.unwrap_or_default(),
            address: self.address.unwrap_or_default(),
            country: self.country.unwrap_or_default(),
            state: self.state.unwrap_or_default(),
            status: self.status.unwrap_or_default(),
            description: self.description.unwrap_or_default(),
        };
        hotel.validate()?;
        Ok(hotel)
    }
}
