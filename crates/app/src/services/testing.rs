//! In-memory repositories and stub validators shared by the service tests.

use std::collections::BTreeMap;
use std::fmt::Display;
use std::future::{Future, ready};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use innkeep_domain::error::{ConflictError, InnkeepError};
use innkeep_domain::hotel::Hotel;
use innkeep_domain::id::{HotelId, RoomId, RoomTypeId};
use innkeep_domain::room::Room;
use innkeep_domain::room_type::RoomType;

use crate::ports::{
    HotelRepository, HotelValidator, RoomRepository, RoomTypeRepository, RoomTypeValidator,
};

pub(crate) trait Row: Clone {
    type Id: Ord + Copy + Display;
    const ENTITY: &'static str;

    fn id(&self) -> Self::Id;
    fn version(&self) -> i64;
    fn bump_version(&mut self);
}

impl Row for Hotel {
    type Id = HotelId;
    const ENTITY: &'static str = "hotel";

    fn id(&self) -> HotelId {
        self.id
    }

    fn version(&self) -> i64 {
        self.version
    }

    fn bump_version(&mut self) {
        self.version += 1;
    }
}

impl Row for RoomType {
    type Id = RoomTypeId;
    const ENTITY: &'static str = "room type";

    fn id(&self) -> RoomTypeId {
        self.id
    }

    fn version(&self) -> i64 {
        self.version
    }

    fn bump_version(&mut self) {
        self.version += 1;
    }
}

impl Row for Room {
    type Id = RoomId;
    const ENTITY: &'static str = "room";

    fn id(&self) -> RoomId {
        self.id
    }

    fn version(&self) -> i64 {
        self.version
    }

    fn bump_version(&mut self) {
        self.version += 1;
    }
}

/// Table keyed by id. Clones share the same rows, so a test can keep a
/// handle after moving one into a service.
pub(crate) struct InMemory<T: Row> {
    rows: Arc<Mutex<BTreeMap<T::Id, T>>>,
    writes: Arc<AtomicUsize>,
    fail_reads: Arc<AtomicBool>,
}

pub(crate) type InMemoryHotelRepo = InMemory<Hotel>;
pub(crate) type InMemoryRoomTypeRepo = InMemory<RoomType>;
pub(crate) type InMemoryRoomRepo = InMemory<Room>;

impl<T: Row> Default for InMemory<T> {
    fn default() -> Self {
        Self {
            rows: Arc::default(),
            writes: Arc::default(),
            fail_reads: Arc::default(),
        }
    }
}

impl<T: Row> Clone for InMemory<T> {
    fn clone(&self) -> Self {
        Self {
            rows: Arc::clone(&self.rows),
            writes: Arc::clone(&self.writes),
            fail_reads: Arc::clone(&self.fail_reads),
        }
    }
}

impl<T: Row> InMemory<T> {
    /// Number of create/update/delete calls that reached the table.
    pub(crate) fn writes(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }

    /// Make every subsequent read fail with a storage error.
    pub(crate) fn fail_reads(&self) {
        self.fail_reads.store(true, Ordering::SeqCst);
    }

    /// Store a row as-is, bypassing any service.
    pub(crate) fn seed(&self, row: T) {
        self.rows.lock().unwrap().insert(row.id(), row);
    }

    fn check_reads(&self) -> Result<(), InnkeepError> {
        if self.fail_reads.load(Ordering::SeqCst) {
            return Err(InnkeepError::Storage("connection reset".into()));
        }
        Ok(())
    }

    fn insert(&self, row: T) -> Result<T, InnkeepError> {
        self.writes.fetch_add(1, Ordering::SeqCst);
        self.rows.lock().unwrap().insert(row.id(), row.clone());
        Ok(row)
    }

    fn replace(&self, mut row: T) -> Result<T, InnkeepError> {
        self.writes.fetch_add(1, Ordering::SeqCst);
        let mut rows = self.rows.lock().unwrap();
        match rows.get_mut(&row.id()) {
            Some(stored) if stored.version() == row.version() => {
                row.bump_version();
                *stored = row.clone();
                Ok(row)
            }
            _ => Err(ConflictError {
                entity: T::ENTITY,
                id: row.id().to_string(),
            }
            .into()),
        }
    }

    fn remove(&self, id: T::Id) -> Result<(), InnkeepError> {
        self.writes.fetch_add(1, Ordering::SeqCst);
        self.rows.lock().unwrap().remove(&id);
        Ok(())
    }

    fn all(&self) -> Result<Vec<T>, InnkeepError> {
        self.check_reads()?;
        Ok(self.rows.lock().unwrap().values().cloned().collect())
    }

    fn find(&self, id: T::Id) -> Result<Option<T>, InnkeepError> {
        self.check_reads()?;
        Ok(self.rows.lock().unwrap().get(&id).cloned())
    }

    fn filter(&self, pred: impl Fn(&T) -> bool) -> Result<Vec<T>, InnkeepError> {
        self.check_reads()?;
        Ok(self
            .rows
            .lock()
            .unwrap()
            .values()
            .filter(|row| pred(row))
            .cloned()
            .collect())
    }
}

impl HotelRepository for InMemoryHotelRepo {
    fn create(&self, hotel: Hotel) -> impl Future<Output = Result<Hotel, InnkeepError>> + Send {
        ready(self.insert(hotel))
    }

    fn update(&self, hotel: Hotel) -> impl Future<Output = Result<Hotel, InnkeepError>> + Send {
        ready(self.replace(hotel))
    }

    fn delete(&self, id: HotelId) -> impl Future<Output = Result<(), InnkeepError>> + Send {
        ready(self.remove(id))
    }

    fn get_all(&self) -> impl Future<Output = Result<Vec<Hotel>, InnkeepError>> + Send {
        ready(self.all())
    }

    fn get_by_id(
        &self,
        id: HotelId,
    ) -> impl Future<Output = Result<Option<Hotel>, InnkeepError>> + Send {
        ready(self.find(id))
    }
}

impl RoomTypeRepository for InMemoryRoomTypeRepo {
    fn create(
        &self,
        room_type: RoomType,
    ) -> impl Future<Output = Result<RoomType, InnkeepError>> + Send {
        ready(self.insert(room_type))
    }

    fn update(
        &self,
        room_type: RoomType,
    ) -> impl Future<Output = Result<RoomType, InnkeepError>> + Send {
        ready(self.replace(room_type))
    }

    fn delete(&self, id: RoomTypeId) -> impl Future<Output = Result<(), InnkeepError>> + Send {
        ready(self.remove(id))
    }

    fn get_all(&self) -> impl Future<Output = Result<Vec<RoomType>, InnkeepError>> + Send {
        ready(self.all())
    }

    fn get_by_id(
        &self,
        id: RoomTypeId,
    ) -> impl Future<Output = Result<Option<RoomType>, InnkeepError>> + Send {
        ready(self.find(id))
    }

    fn get_by_hotel_id(
        &self,
        hotel_id: HotelId,
    ) -> impl Future<Output = Result<Vec<RoomType>, InnkeepError>> + Send {
        ready(self.filter(|rt| rt.hotel_id == hotel_id))
    }
}

impl RoomRepository for InMemoryRoomRepo {
    fn create(&self, room: Room) -> impl Future<Output = Result<Room, InnkeepError>> + Send {
        ready(self.insert(room))
    }

    fn update(&self, room: Room) -> impl Future<Output = Result<Room, InnkeepError>> + Send {
        ready(self.replace(room))
    }

    fn delete(&self, id: RoomId) -> impl Future<Output = Result<(), InnkeepError>> + Send {
        ready(self.remove(id))
    }

    fn get_all(&self) -> impl Future<Output = Result<Vec<Room>, InnkeepError>> + Send {
        ready(self.all())
    }

    fn get_by_id(
        &self,
        id: RoomId,
    ) -> impl Future<Output = Result<Option<Room>, InnkeepError>> + Send {
        ready(self.find(id))
    }

    fn get_by_hotel_id(
        &self,
        hotel_id: HotelId,
    ) -> impl Future<Output = Result<Vec<Room>, InnkeepError>> + Send {
        ready(self.filter(|room| room.hotel_id == hotel_id))
    }
}

/// What a [`StubValidator`] answers.
#[derive(Debug, Clone, Copy)]
pub(crate) enum Answer {
    Exists,
    Missing,
    Broken,
}

/// Validator with a fixed answer that counts how often it was asked.
#[derive(Clone)]
pub(crate) struct StubValidator {
    answer: Answer,
    calls: Arc<AtomicUsize>,
}

impl StubValidator {
    pub(crate) fn new(answer: Answer) -> Self {
        Self {
            answer,
            calls: Arc::default(),
        }
    }

    pub(crate) fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn ask(&self) -> Result<bool, InnkeepError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match self.answer {
            Answer::Exists => Ok(true),
            Answer::Missing => Ok(false),
            Answer::Broken => Err(InnkeepError::Storage("validator unavailable".into())),
        }
    }
}

impl HotelValidator for StubValidator {
    fn hotel_exists(&self, _id: HotelId) -> impl Future<Output = Result<bool, InnkeepError>> + Send {
        ready(self.ask())
    }
}

impl RoomTypeValidator for StubValidator {
    fn room_type_exists(
        &self,
        _id: RoomTypeId,
    ) -> impl Future<Output = Result<bool, InnkeepError>> + Send {
        ready(self.ask())
    }
}
