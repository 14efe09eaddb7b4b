//! HttpExchange Server Library
//!
//! User registry server: the Resource Endpoint that maps the user service
//! contract onto HTTP, plus configuration and error handling.
//!
//! The endpoint only depends on `exchange_core::UserService`, so the
//! aggregating call service mounts the very same handlers over a remote
//! client.

pub mod api;
pub mod config;
pub mod error;
pub mod shutdown;
pub mod state;

// Re-export commonly used types for convenience
pub use api::create_router;
pub use config::ServerConfig;
pub use error::{Result, ServerError};
pub use state::AppState;
