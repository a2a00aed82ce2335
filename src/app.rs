use axum::{
    routing::{get, post},
    Router,
};
use std::path::Path;
use tower_http::{cors::CorsLayer, services::ServeFile, trace::TraceLayer};

use crate::{room, shared::AppState, token};

/// Builds the HTTP router. Unmatched paths serve `index.html` from `static_dir`.
pub fn build_router(app_state: AppState, static_dir: &Path) -> Router {
    Router::new()
        .route("/v1/create-token", get(token::create_token))
        .route("/v1/create-room", post(room::create_room))
        .route("/v1/vote/:room_id", post(room::vote))
        .route("/v1/my-answer/:room_id", post(room::my_answer))
        .route("/v1/reset/:room_id", post(room::reset_room))
        .route("/v1/tally/:room_id", get(room::tally))
        .fallback_service(ServeFile::new(static_dir.join("index.html")))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(app_state)
}
