use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use std::sync::Arc;
use thiserror::Error;

use crate::room::generators::RoomIdGenerator;
use crate::room::repository::RoomRepository;
use crate::token::generators::TokenGenerator;

/// Shared application state containing all dependencies
#[derive(Clone)]
pub struct AppState {
    pub room_repository: Arc<dyn RoomRepository + Send + Sync>,
    pub room_id_generator: Arc<dyn RoomIdGenerator>,
    pub token_generator: Arc<dyn TokenGenerator>,
}

impl AppState {
    pub fn new(
        room_repository: Arc<dyn RoomRepository + Send + Sync>,
        room_id_generator: Arc<dyn RoomIdGenerator>,
        token_generator: Arc<dyn TokenGenerator>,
    ) -> Self {
        Self {
            room_repository,
            room_id_generator,
            token_generator,
        }
    }
}

#[derive(Error, Debug, PartialEq)]
pub enum AppError {
    #[error("Bad Answer")]
    BadAnswer,

    #[error("Cannot reset if you are not the owner")]
    NotOwner,

    #[error("Room not found")]
    RoomNotFound(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Internal server error")]
    Internal,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            AppError::BadAnswer => StatusCode::BAD_REQUEST,
            AppError::NotOwner => StatusCode::UNAUTHORIZED,
            AppError::RoomNotFound(_) => StatusCode::NOT_FOUND,
            AppError::Conflict(_) => StatusCode::CONFLICT,
            AppError::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        };

        // Clients read the outcome from `status`, same field the success bodies use
        let body = Json(json!({
            "status": self.to_string()
        }));

        (status, body).into_response()
    }
}
