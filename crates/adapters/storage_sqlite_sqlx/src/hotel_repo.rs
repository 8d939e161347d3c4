//! `SQLite` implementation of [`HotelRepository`].

use std::future::Future;

use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, Row, SqlitePool};

use innkeep_app::ports::HotelRepository;
use innkeep_domain::error::{ConflictError, InnkeepError};
use innkeep_domain::hotel::Hotel;
use innkeep_domain::id::HotelId;

use crate::codec::{decode, decode_timestamp, encode_timestamp};
use crate::error::StorageError;

/// Wrapper for converting database rows into domain [`Hotel`].
struct Wrapper(Hotel);

impl Wrapper {
    fn maybe(value: Option<Self>) -> Option<Hotel> {
        value.map(|w| w.0)
    }
}

impl<'r> FromRow<'r, SqliteRow> for Wrapper {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        let id: String = row.try_get("id")?;
        let created_at: String = row.try_get("created_at")?;
        let updated_at: String = row.try_get("updated_at")?;

        Ok(Self(Hotel {
            id: decode(&id)?,
            created_at: decode_timestamp(&created_at)?,
            updated_at: decode_timestamp(&updated_at)?,
            version: row.try_get("version")?,
            name: row.try_get("name")?,
            address: row.try_get("address")?,
            country: row.try_get("country")?,
            state: row.try_get("state")?,
            status: row.try_get("status")?,
            description: row.try_get("description")?,
        }))
    }
}

const INSERT: &str = "INSERT INTO hotels \
    (id, created_at, updated_at, version, name, address, country, state, status, description) \
    VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?)";
const SELECT_BY_ID: &str = "SELECT * FROM hotels WHERE id = ?";
const SELECT_ALL: &str = "SELECT * FROM hotels ORDER BY id";
const UPDATE: &str = "UPDATE hotels SET \
    updated_at = ?, version = version + 1, \
    name = ?, address = ?, country = ?, state = ?, status = ?, description = ? \
    WHERE id = ? AND version = ?";
const DELETE_BY_ID: &str = "DELETE FROM hotels WHERE id = ?";

/// `SQLite`-backed hotel repository.
#[derive(Clone)]
pub struct SqliteHotelRepository {
    pool: SqlitePool,
}

impl SqliteHotelRepository {
    /// Create a new repository using the given connection pool.
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

impl HotelRepository for SqliteHotelRepository {
    fn create(&self, hotel: Hotel) -> impl Future<Output = Result<Hotel, InnkeepError>> + Send {
        let pool = self.pool.clone();
        async move {
            sqlx::query(INSERT)
                .bind(hotel.id.to_string())
                .bind(encode_timestamp(hotel.created_at))
                .bind(encode_timestamp(hotel.updated_at))
                .bind(hotel.version)
                .bind(&hotel.name)
                .bind(&hotel.address)
                .bind(&hotel.country)
                .bind(&hotel.state)
                .bind(&hotel.status)
                .bind(&hotel.description)
                .execute(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(hotel)
        }
    }

    fn update(&self, mut hotel: Hotel) -> impl Future<Output = Result<Hotel, InnkeepError>> + Send {
        let pool = self.pool.clone();
        async move {
            let result = sqlx::query(UPDATE)
                .bind(encode_timestamp(hotel.updated_at))
                .bind(&hotel.name)
                .bind(&hotel.address)
                .bind(&hotel.country)
                .bind(&hotel.state)
                .bind(&hotel.status)
                .bind(&hotel.description)
                .bind(hotel.id.to_string())
                .bind(hotel.version)
                .execute(&pool)
                .await
                .map_err(StorageError::from)?;

            if result.rows_affected() == 0 {
                return Err(ConflictError {
                    entity: "hotel",
                    id: hotel.id.to_string(),
                }
                .into());
            }

            hotel.version += 1;
            Ok(hotel)
        }
    }

    fn delete(&self, id: HotelId) -> impl Future<Output = Result<(), InnkeepError>> + Send {
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

    fn get_all(&self) -> impl Future<Output = Result<Vec<Hotel>, InnkeepError>> + Send {
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
        id: HotelId,
    ) -> impl Future<Output = Result<Option<Hotel>, InnkeepError>> + Send {
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
}
