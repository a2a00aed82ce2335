// Public API - what other modules can use
pub use handlers::{create_room, my_answer, reset_room, tally, vote};
pub use models::{Answer, RoomModel, Tally};
pub use service::RoomService;

// Internal modules
pub mod generators;
mod handlers;
pub mod models;
pub mod repository;
mod service;
mod types;
