//! `SQLite` implementation of [`RoomRepository`].

use std::future::Future;

use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, Row, SqlitePool};

use innkeep_app::ports::RoomRepository;
use innkeep_domain::error::{ConflictError, InnkeepError};
use innkeep_domain::id::{HotelId, RoomId};
use innkeep_domain::room::Room;

use crate::codec::{decode, decode_timestamp, encode_timestamp};
use crate::error::StorageError;

/// Wrapper for converting database rows into domain [`Room`].
struct Wrapper(Room);

impl Wrapper {
    fn maybe(value: Option<Self>) -> Option<Room> {
        value.map(|w| w.0)
    }
}

impl<'r> FromRow<'r, SqliteRow> for Wrapper {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        let id: String = row.try_get("id")?;
        let created_at: String = row.try_get("created_at")?;
        let updated_at: String = row.try_get("updated_at")?;
        let hotel_id: String = row.try_get("hotel_id")?;
        let room_type_id: String = row.try_get("room_type_id")?;

        Ok(Self(Room {
            id: decode(&id)?,
            created_at: decode_timestamp(&created_at)?,
            updated_at: decode_timestamp(&updated_at)?,
            version: row.try_get("version")?,
            hotel_id: decode(&hotel_id)?,
            room_type_id: decode(&room_type_id)?,
            floor: row.try_get("floor")?,
            number: row.try_get("number")?,
            name: row.try_get("name")?,
            status: row.try_get("status")?,
        }))
    }
}

const INSERT: &str = "INSERT INTO rooms \
    (id, created_at, updated_at, version, hotel_id, room_type_id, floor, number, name, status) \
    VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?)";
const SELECT_BY_ID: &str = "SELECT * FROM rooms WHERE id = ?";
const SELECT_BY_HOTEL_ID: &str = "SELECT * FROM rooms WHERE hotel_id = ? ORDER BY id";
const SELECT_ALL: &str = "SELECT * FROM rooms ORDER BY id";
const UPDATE: &str = "UPDATE rooms SET \
    updated_at = ?, version = version + 1, \
    room_type_id = ?, floor = ?, number = ?, name = ?, status = ? \
    WHERE id = ? AND version = ?";
const DELETE_BY_ID: &str = "DELETE FROM rooms WHERE id = ?";

/// `SQLite`-backed room repository.
#[derive(Clone)]
pub struct SqliteRoomRepository {
    pool: SqlitePool,
}

impl SqliteRoomRepository {
    /// Create a new repository using the given connection pool.
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

impl RoomRepository for SqliteRoomRepository {
    fn create(&self, room: Room) -> impl Future<Output = Result<Room, InnkeepError>> + Send {
        let pool = self.pool.clone();
        async move {
            sqlx::query(INSERT)
                .bind(room.id.to_string())
                .bind(encode_timestamp(room.created_at))
                .bind(encode_timestamp(room.updated_at))
                .bind(room.version)
                .bind(room.hotel_id.to_string())
                .bind(room.room_type_id.to_string())
                .bind(room.floor)
                .bind(room.number)
                .bind(&room.name)
                .bind(&room.status)
                .execute(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(room)
        }
    }

    fn update(&self, mut room: Room) -> impl Future<Output = Result<Room, InnkeepError>> + Send {
        let pool = self.pool.clone();
        async move {
            let result = sqlx::query(UPDATE)
                .bind(encode_timestamp(room.updated_at))
                .bind(room.room_type_id.to_string())
                .bind(room.floor)
                .bind(room.number)
                .bind(&room.name)
                .bind(&room.status)
                .bind(room.id.to_string())
                .bind(room.version)
                .execute(&pool)
                .await
                .map_err(StorageError::from)?;

            if result.rows_affected() == 0 {
                return Err(ConflictError {
                    entity: "room",
                    id: room.id.to_string(),
                }
                .into());
            }

            room.version += 1;
            Ok(room)
        }
    }

    fn delete(&self, id: RoomId) -> impl Future<Output = Result<(), InnkeepError>> + Send {
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

    fn get_all(&self) -> impl Future<Output = Result<Vec<Room>, InnkeepError>> + Send {
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
        id: RoomId,
    ) -> impl Future<Output = Result<Option<Room>, InnkeepError>> + Send {
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
    ) -> impl Future<Output = Result<Vec<Room>, InnkeepError>> + Send {
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
