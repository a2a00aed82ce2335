// Library crate for the poll room server
// This file exposes the public API for integration tests

pub mod app;
pub mod config;
pub mod room;
pub mod shared;
pub mod token;

// Re-export commonly used types for easier access in tests
pub use app::build_router;
pub use config::ServerConfig;
pub use room::{models::RoomModel, repository::RoomRepository, Answer, RoomService, Tally};
pub use shared::{AppError, AppState};
