use serde::{Deserialize, Serialize};
use std::str::FromStr;

use super::models::{Answer, Tally};
use crate::shared::AppError;

/// Request payload for creating a new room; the token becomes the owner
#[derive(Debug, Deserialize)]
pub struct RoomCreateRequest {
    pub token: String,
}

/// Request payload for casting a vote
#[derive(Debug, Deserialize)]
pub struct VoteRequest {
    pub token: String,
    /// Kept raw so any non-answer value maps to a Bad Answer response
    #[serde(default)]
    pub answer: serde_json::Value,
}

impl VoteRequest {
    /// Only the JSON strings "1" through "4" are answers
    pub fn parse_answer(&self) -> Result<Answer, AppError> {
        self.answer
            .as_str()
            .and_then(|raw| Answer::from_str(raw).ok())
            .ok_or(AppError::BadAnswer)
    }
}

/// Request payload for token-only room operations (my-answer, reset)
#[derive(Debug, Deserialize)]
pub struct TokenRequest {
    pub token: String,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomCreatedResponse {
    pub room_id: String,
}

#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct StatusResponse {
    pub status: String,
}

impl StatusResponse {
    pub fn ok() -> Self {
        Self {
            status: "OK".to_string(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct MyAnswerResponse {
    pub answer: Option<Answer>,
}

#[derive(Debug, Serialize)]
pub struct TallyResponse {
    pub counts: Tally,
}
