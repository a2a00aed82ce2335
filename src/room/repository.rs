use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};
use tracing::{debug, info, instrument, warn};

use super::models::{Answer, RoomModel, Tally};
use crate::shared::AppError;

/// Result of an operation scoped to a single room
#[derive(Debug, Clone, PartialEq)]
pub enum RoomOpResult<T> {
    /// Room exists and the operation ran
    Success(T),
    /// Room does not exist
    RoomNotFound,
}

/// Result of attempting to reset a room
#[derive(Debug, Clone, PartialEq)]
pub enum ResetRoomResult {
    /// Votes cleared
    Success,
    /// Token did not match the room owner, nothing changed
    NotOwner,
    /// Room does not exist
    RoomNotFound,
}

/// Trait for room repository operations
///
/// Each method runs against the room atomically, so votes and the cached
/// tally never drift apart under concurrent requests.
#[async_trait]
pub trait RoomRepository {
    async fn create_room(&self, room: RoomModel) -> Result<(), AppError>;
    async fn get_room(&self, room_id: &str) -> Result<Option<RoomModel>, AppError>;
    async fn room_exists(&self, room_id: &str) -> Result<bool, AppError>;

    async fn vote(
        &self,
        room_id: &str,
        participant: &str,
        answer: Answer,
    ) -> Result<RoomOpResult<()>, AppError>;

    async fn my_answer(
        &self,
        room_id: &str,
        participant: &str,
    ) -> Result<RoomOpResult<Option<Answer>>, AppError>;

    /// Clears the room's votes if `token` is the owner token
    async fn reset(&self, room_id: &str, token: &str) -> Result<ResetRoomResult, AppError>;

    async fn tally(&self, room_id: &str) -> Result<RoomOpResult<Tally>, AppError>;
}

/// In-memory implementation of RoomRepository. Rooms live until the process exits.
pub struct InMemoryRoomRepository {
    rooms: Mutex<HashMap<String, RoomModel>>,
}

impl Default for InMemoryRoomRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryRoomRepository {
    /// Creates a new empty in-memory repository
    pub fn new() -> Self {
        Self {
            rooms: Mutex::new(HashMap::new()),
        }
    }

    fn rooms(&self) -> Result<MutexGuard<'_, HashMap<String, RoomModel>>, AppError> {
        self.rooms.lock().map_err(|_| {
            warn!("Room store lock poisoned");
            AppError::Internal
        })
    }
}

#[async_trait]
impl RoomRepository for InMemoryRoomRepository {
    #[instrument(skip(self, room), fields(room_id = %room.id()))]
    async fn create_room(&self, room: RoomModel) -> Result<(), AppError> {
        debug!("Creating room in memory");

        let mut rooms = self.rooms()?;
        if rooms.contains_key(room.id()) {
            warn!("Room already exists in memory");
            return Err(AppError::Conflict(format!(
                "Room {} already exists",
                room.id()
            )));
        }
        rooms.insert(room.id().to_string(), room);

        debug!("Room created successfully in memory");
        Ok(())
    }

    #[instrument(skip(self))]
    async fn get_room(&self, room_id: &str) -> Result<Option<RoomModel>, AppError> {
        let rooms = self.rooms()?;
        let room = rooms.get(room_id).cloned();

        match &room {
            Some(r) => debug!(room_id = %room_id, votes = r.vote_count(), "Room found in memory"),
            None => debug!(room_id = %room_id, "Room not found in memory"),
        }

        Ok(room)
    }

    #[instrument(skip(self))]
    async fn room_exists(&self, room_id: &str) -> Result<bool, AppError> {
        Ok(self.rooms()?.contains_key(room_id))
    }

    #[instrument(skip(self))]
    async fn vote(
        &self,
        room_id: &str,
        participant: &str,
        answer: Answer,
    ) -> Result<RoomOpResult<()>, AppError> {
        let mut rooms = self.rooms()?;

        let room = match rooms.get_mut(room_id) {
            Some(room) => room,
            None => {
                debug!(room_id = %room_id, "Room not found");
                return Ok(RoomOpResult::RoomNotFound);
            }
        };

        room.vote(participant, answer);

        debug!(
            room_id = %room_id,
            answer = answer.as_ref(),
            votes = room.vote_count(),
            "Vote recorded"
        );

        Ok(RoomOpResult::Success(()))
    }

    #[instrument(skip(self))]
    async fn my_answer(
        &self,
        room_id: &str,
        participant: &str,
    ) -> Result<RoomOpResult<Option<Answer>>, AppError> {
        let rooms = self.rooms()?;

        Ok(match rooms.get(room_id) {
            Some(room) => RoomOpResult::Success(room.my_answer(participant)),
            None => {
                debug!(room_id = %room_id, "Room not found");
                RoomOpResult::RoomNotFound
            }
        })
    }

    #[instrument(skip(self, token))]
    async fn reset(&self, room_id: &str, token: &str) -> Result<ResetRoomResult, AppError> {
        let mut rooms = self.rooms()?;

        let room = match rooms.get_mut(room_id) {
            Some(room) => room,
            None => {
                debug!(room_id = %room_id, "Room not found");
                return Ok(ResetRoomResult::RoomNotFound);
            }
        };

        if !room.is_owner(token) {
            warn!(room_id = %room_id, "Reset attempted by non-owner");
            return Ok(ResetRoomResult::NotOwner);
        }

        let cleared = room.vote_count();
        room.reset();

        info!(room_id = %room_id, cleared_votes = cleared, "Room reset");
        Ok(ResetRoomResult::Success)
    }

    #[instrument(skip(self))]
    async fn tally(&self, room_id: &str) -> Result<RoomOpResult<Tally>, AppError> {
        let mut rooms = self.rooms()?;

        Ok(match rooms.get_mut(room_id) {
            Some(room) => RoomOpResult::Success(room.tally().clone()),
            None => {
                debug!(room_id = %room_id, "Room not found");
                RoomOpResult::RoomNotFound
            }
        })
    }
}
