use std::sync::Arc;
use tracing::{debug, info, instrument, warn};

use super::{
    generators::RoomIdGenerator,
    models::{Answer, RoomModel, Tally},
    repository::{ResetRoomResult, RoomOpResult, RoomRepository},
};
use crate::shared::AppError;

/// How many fresh ids to try before giving up on a collision
const MAX_ID_ATTEMPTS: usize = 5;

/// Service for handling room business logic
pub struct RoomService {
    repository: Arc<dyn RoomRepository + Send + Sync>,
    id_generator: Arc<dyn RoomIdGenerator>,
}

impl RoomService {
    pub fn new(
        repository: Arc<dyn RoomRepository + Send + Sync>,
        id_generator: Arc<dyn RoomIdGenerator>,
    ) -> Self {
        Self {
            repository,
            id_generator,
        }
    }

    /// Creates a new room owned by `owner` and returns its generated id
    #[instrument(skip(self, owner))]
    pub async fn create_room(&self, owner: String) -> Result<String, AppError> {
        let mut last_error = AppError::Internal;

        for attempt in 1..=MAX_ID_ATTEMPTS {
            let room_id = self.id_generator.generate();
            debug!(room_id = %room_id, attempt, "Generated room ID");

            match self
                .repository
                .create_room(RoomModel::new(room_id.clone(), owner.clone()))
                .await
            {
                Ok(()) => {
                    info!(room_id = %room_id, "Room created successfully");
                    return Ok(room_id);
                }
                Err(AppError::Conflict(msg)) => {
                    warn!(room_id = %room_id, attempt, "Room ID collision, regenerating");
                    last_error = AppError::Conflict(msg);
                }
                Err(e) => return Err(e),
            }
        }

        Err(last_error)
    }

    /// Creates a room under a caller-chosen id, used for rooms seeded at startup
    #[instrument(skip(self, owner))]
    pub async fn create_room_with_id(&self, room_id: String, owner: String) -> Result<(), AppError> {
        self.repository
            .create_room(RoomModel::new(room_id.clone(), owner))
            .await?;
        info!(room_id = %room_id, "Room created with fixed ID");
        Ok(())
    }

    #[instrument(skip(self, participant))]
    pub async fn vote(
        &self,
        room_id: &str,
        participant: &str,
        answer: Answer,
    ) -> Result<(), AppError> {
        match self.repository.vote(room_id, participant, answer).await? {
            RoomOpResult::Success(()) => {
                info!(room_id = %room_id, answer = answer.as_ref(), "Vote cast");
                Ok(())
            }
            RoomOpResult::RoomNotFound => Err(AppError::RoomNotFound(room_id.to_string())),
        }
    }

    #[instrument(skip(self, participant))]
    pub async fn my_answer(
        &self,
        room_id: &str,
        participant: &str,
    ) -> Result<Option<Answer>, AppError> {
        match self.repository.my_answer(room_id, participant).await? {
            RoomOpResult::Success(answer) => Ok(answer),
            RoomOpResult::RoomNotFound => Err(AppError::RoomNotFound(room_id.to_string())),
        }
    }

    /// Clears all votes, provided `token` is the room owner's
    #[instrument(skip(self, token))]
    pub async fn reset(&self, room_id: &str, token: &str) -> Result<(), AppError> {
        match self.repository.reset(room_id, token).await? {
            ResetRoomResult::Success => {
                info!(room_id = %room_id, "Room votes reset by owner");
                Ok(())
            }
            ResetRoomResult::NotOwner => Err(AppError::NotOwner),
            ResetRoomResult::RoomNotFound => Err(AppError::RoomNotFound(room_id.to_string())),
        }
    }

    #[instrument(skip(self))]
    pub async fn tally(&self, room_id: &str) -> Result<Tally, AppError> {
        match self.repository.tally(room_id).await? {
            RoomOpResult::Success(tally) => {
                debug!(room_id = %room_id, total = tally.total(), "Tally retrieved");
                Ok(tally)
            }
            RoomOpResult::RoomNotFound => Err(AppError::RoomNotFound(room_id.to_string())),
        }
    }
}
