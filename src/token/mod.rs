// Public API - what other modules can use
pub use handlers::create_token;

// Internal modules
pub mod generators;
mod handlers;
mod types;
