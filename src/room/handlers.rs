use axum::{
    extract::{Path, State},
    Json,
};
use std::sync::Arc;
use tracing::{info, instrument};

use super::{
    service::RoomService,
    types::{
        MyAnswerResponse, RoomCreateRequest, RoomCreatedResponse, StatusResponse, TallyResponse,
        TokenRequest, VoteRequest,
    },
};
use crate::shared::{AppError, AppState};

fn room_service(state: &AppState) -> RoomService {
    RoomService::new(
        Arc::clone(&state.room_repository),
        Arc::clone(&state.room_id_generator),
    )
}

/// HTTP handler for creating a new room
///
/// POST /v1/create-room
/// The request token becomes the room owner
#[instrument(name = "create_room", skip(state, request))]
pub async fn create_room(
    State(state): State<AppState>,
    Json(request): Json<RoomCreateRequest>,
) -> Result<Json<RoomCreatedResponse>, AppError> {
    let room_id = room_service(&state).create_room(request.token).await?;

    info!(room_id = %room_id, "Room created");

    Ok(Json(RoomCreatedResponse { room_id }))
}

/// HTTP handler for casting a vote
///
/// POST /v1/vote/{room_id}
/// Answers outside "1".."4" are rejected before the room is looked up
#[instrument(name = "vote", skip(state, request))]
pub async fn vote(
    State(state): State<AppState>,
    Path(room_id): Path<String>,
    Json(request): Json<VoteRequest>,
) -> Result<Json<StatusResponse>, AppError> {
    let answer = request.parse_answer()?;

    room_service(&state)
        .vote(&room_id, &request.token, answer)
        .await?;

    Ok(Json(StatusResponse::ok()))
}

/// HTTP handler for looking up the caller's own vote
///
/// POST /v1/my-answer/{room_id}
#[instrument(name = "my_answer", skip(state, request))]
pub async fn my_answer(
    State(state): State<AppState>,
    Path(room_id): Path<String>,
    Json(request): Json<TokenRequest>,
) -> Result<Json<MyAnswerResponse>, AppError> {
    let answer = room_service(&state)
        .my_answer(&room_id, &request.token)
        .await?;

    Ok(Json(MyAnswerResponse { answer }))
}

/// HTTP handler for clearing all votes in a room
///
/// POST /v1/reset/{room_id}
/// Only the owner token may reset
#[instrument(name = "reset_room", skip(state, request))]
pub async fn reset_room(
    State(state): State<AppState>,
    Path(room_id): Path<String>,
    Json(request): Json<TokenRequest>,
) -> Result<Json<StatusResponse>, AppError> {
    room_service(&state).reset(&room_id, &request.token).await?;

    Ok(Json(StatusResponse::ok()))
}

/// HTTP handler for polling the vote counts
///
/// GET /v1/tally/{room_id}
#[instrument(name = "tally", skip(state))]
pub async fn tally(
    State(state): State<AppState>,
    Path(room_id): Path<String>,
) -> Result<Json<TallyResponse>, AppError> {
    let counts = room_service(&state).tally(&room_id).await?;

    Ok(Json(TallyResponse { counts }))
}
