//! `SQLite` implementation of [`RoomTypeRepository`].

use std::future::Future;

use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, Row, SqlitePool};

use innkeep_app::ports::RoomTypeRepository;
use innkeep_domain::error::{ConflictError, InnkeepError};
use innkeep_domain::id::{HotelId, RoomTypeId};
use innkeep_domain::room_type::RoomType;

use crate::codec::{decode, decode_timestamp, encode_timestamp};
use crate::error::StorageError;

/// Wrapper for converting database rows into domain [`RoomType`].
struct Wrapper(RoomType);

impl Wrapper {
    fn maybe(value: Option<Self>) -> Option<RoomType> {
        value.map(|w| w.0)
    }
}

impl<'r> FromRow<'r, SqliteRow> for Wrapper {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        let id: String = row.try_get("id")?;
        let created_at: String = row.try_get("created_at")?;
        let updated_at: String = row.try_get("updated_at")?;
        let hotel_id: String = row.try_get("hotel_id")?;
        let bed_type: String = row.try_get("bed_type")?;
        let base_price: String = row.try_get("base_price")?;

        Ok(Self(RoomType {
            id: decode(&id)?,
            created_at: decode_timestamp(&created_at)?,
            updated_at: decode_timestamp(&updated_at)?,
            version: row.try_get("version")?,
            hotel_id: decode(&hotel_id)?,
            name: row.try_get("name")?,
            description: row.try_get("description")?,
            number_of_beds: row.try_get("number_of_beds")?,
            bed_type: decode(&bed_type)?,
            max_occupancy: row.try_get("max_occupancy")?,
            base_price: decode(&base_price)?,
        }))
    }
}

const INSERT: &str = "INSERT INTO room_types \
    (id, created_at, updated_at, version, hotel_id, name, description, \
     number_of_beds, bed_type, max_occupancy, base_price) \
    VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)";
const SELECT_BY_ID: &str = "SELECT * FROM room_types WHERE id = ?";
const SELECT_BY_HOTEL_ID: &str = "SELECT * FROM room_types WHERE hotel_id = ? ORDER BY id";
const SELECT_ALL: &str = "SELECT * FROM room_types ORDER BY id";
const UPDATE: &str = "UPDATE room_types SET \
    updated_at = ?, version = version + 1, \
    name = ?, description = ?, number_of_beds = ?, bed_type = ?, \
    max_occupancy = ?, base_price = ? \
    WHERE id = ? AND version = ?";
const DELETE_BY_ID: &str = "DELETE FROM room_types WHERE id = ?";

/// `SQLite`-backed room type repository.
#[derive(Clone)]
pub struct SqliteRoomTypeRepository {
    pool: SqlitePool,
}

impl SqliteRoomTypeRepository {
    /// Create a new repository using the given connection pool.
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

impl RoomTypeRepository for SqliteRoomTypeRepository {
    fn create(
        &self,
        room_type: RoomType,
    ) -> impl Future<Output = Result<RoomType, InnkeepError>> + Send {
        let pool = self.pool.clone();
        async move {
            sqlx::query(INSERT)
                .bind(room_type.id.to_string())
                .bind(encode_timestamp(room_type.created_at))
                .bind(encode_timestamp(room_type.updated_at))
                .bind(room_type.version)
                .bind(room_type.hotel_id.to_string())
                .bind(&room_type.name)
                .bind(&room_type.description)
                .bind(room_type.number_of_beds)
                .bind(room_type.bed_type.to_string())
                .bind(room_type.max_occupancy)
                .bind(room_type.base_price.to_string())
                .execute(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(room_type)
        }
    }

    fn update(
        &self,
        mut room_type: RoomType,
    ) -> impl Future<Output = Result<RoomType, InnkeepError>> + Send {
        let pool = self.pool.clone();
        async move {
            let result = sqlx::query(UPDATE)
                .bind(encode_timestamp(room_type.updated_at))
                .bind(&room_type.name)
                .bind(&room_type.description)
                .bind(room_type.number_of_beds)
                .bind(room_type.bed_type.to_string())
                .bind(room_type.max_occupancy)
                .bind(room_type.base_price.to_string())
                .bind(room_type.id.to_string())
                .bind(room_type.version)
                .execute(&pool)
                .await
                .map_err(StorageError::from)?;

            if result.rows_affected() == 0 {
                return Err(ConflictError {
                    entity: "room type",
                    id: room_type.id.to_string(),
                }
                .into());
            }

            room_type.version += 1;
            Ok(room_type)
        }
    }

    fn delete(&self, id: RoomTypeId) -> impl Future<Output = Result<(), InnkeepError>> + Send {
        let pool = self.pool.clone();
        async move {
            sqlx::query(DELETE_BY_ID)
                .bind(id.to_string())
                .execute(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(())
        }
    }

    fn get_all(&self) -> impl Future<Output = Result<Vec<RoomType>, InnkeepError>> + Send {
        let pool = self.pool.clone();
        async move {
            let rows: Vec<Wrapper> = sqlx::query_as(SELECT_ALL)
                .fetch_all(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(rows.into_iter().map(|w| w.0).collect())
        }
    }

    fn get_by_id(
        &self,
        id: RoomTypeId,
    ) -> impl Future<Output = Result<Option<RoomType>, InnkeepError>> + Send {
        let pool = self.pool.clone();
        async move {
            let row: Option<Wrapper> = sqlx::query_as(SELECT_BY_ID)
                .bind(id.to_string())
                .fetch_optional(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(Wrapper::maybe(row))
        }
    }

    fn get_by_hotel_id(
        &self,
        hotel_id: HotelId,
    ) -> impl Future<Output = Result<Vec<RoomType>, InnkeepError>> + Send {
        let pool = self.pool.clone();
        async move {
            let rows: Vec<Wrapper> = sqlx::query_as(SELECT_BY_HOTEL_ID)
                .bind(hotel_id.to_string())
                .fetch_all(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(rows.into_iter().map(|w| w.0).collect())
        }
    }
}
