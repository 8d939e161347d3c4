//! Common error types used across the workspace.
//!
//! Each failure kind has its own typed error and converts into
//! [`InnkeepError`] via `#[from]`, so callers can match on the kind while
//! the message stays attached to the concrete type.

/// Top-level error returned by services and repository ports.
#[derive(Debug, thiserror::Error)]
pub enum InnkeepError {
    /// An invariant or a cross-entity reference check failed.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The requested entity does not exist.
    #[error(transparent)]
    NotFound(#[from] NotFoundError),

    /// The entity exists but belongs to another hotel.
    #[error(transparent)]
    OwnershipMismatch(#[from] OwnershipError),

    /// The stored row changed between read and write.
    #[error(transparent)]
    Conflict(#[from] ConflictError),

    /// Opaque storage failure. Adapters box their own error type here.
    #[error("{0}")]
    Storage(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// Domain invariant and referential integrity violations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("hotel does not exist")]
    HotelDoesNotExist,

    #[error("room type does not exist")]
    RoomTypeDoesNotExist,

    #[error("name must not be empty")]
    EmptyName,

    #[error("{field} must be greater than zero")]
    NotPositive { field: &'static str },

    #[error("base price must not be negative")]
    NegativePrice,

    #[error("missing required field `{0}`")]
    MissingField(&'static str),
}

/// No entity of kind `entity` with identifier `id`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{entity} not found: {id}")]
pub struct NotFoundError {
    pub entity: &'static str,
    pub id: String,
}

/// The entity `id` exists but is not owned by `hotel_id`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("hotel doesn't have any {entity} with the provided identifier")]
pub struct OwnershipError {
    pub entity: &'static str,
    pub id: String,
    pub hotel_id: String,
}

/// Optimistic concurrency failure: the row was updated by someone else.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{entity} {id} was modified concurrently, reload and retry")]
pub struct ConflictError {
    pub entity: &'static str,
    pub id: String,
}

/// A lookup failed for a reason other than absence.
///
/// The display message hides the cause; it stays reachable through
/// [`std::error::Error::source`] for logging.
#[derive(Debug, thiserror::Error)]
#[error("unexpected error fetching {entity}")]
pub struct FetchError {
    pub entity: &'static str,
    #[source]
    pub source: InnkeepError,
}

impl From<FetchError> for InnkeepError {
    fn from(err: FetchError) -> Self {
        Self::Storage(Box::new(err))
    }
}

#[cfg(test)]
mod tests {
    use std::error::Error;

    use super::*;

    #[test]
    fn should_use_distinct_messages_for_not_found_and_ownership() {
        let not_found: InnkeepError = NotFoundError {
            entity: "room",
            id: "abc".to_string(),
        }
        .into();
        let mismatch: InnkeepError = OwnershipError {
            entity: "room",
            id: "abc".to_string(),
            hotel_id: "def".to_string(),
        }
        .into();

        assert_eq!(not_found.to_string(), "room not found: abc");
        assert_eq!(
            mismatch.to_string(),
            "hotel doesn't have any room with the provided identifier"
        );
    }

    #[test]
    fn should_hide_cause_of_fetch_error_in_message() {
        let cause = InnkeepError::Storage("disk on fire".into());
        let err: InnkeepError = FetchError {
            entity: "hotel",
            source: cause,
        }
        .into();

        assert_eq!(err.to_string(), "unexpected error fetching hotel");
        let fetch = err.source().unwrap();
        assert_eq!(fetch.to_string(), "unexpected error fetching hotel");
        assert!(fetch.source().is_some());
    }

    #[test]
    fn should_render_field_name_in_not_positive() {
        let err = ValidationError::NotPositive {
            field: "max_occupancy",
        };
        assert_eq!(err.to_string(), "max_occupancy must be greater than zero");
    }
}
