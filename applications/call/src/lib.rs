//! HttpExchange Call Library
//!
//! Aggregating service that re-exposes the user resource at
//! `/aggregate/users`. Every call is forwarded once to the registry server
//! through `exchange_client::UserServerClient`; results, absence and upstream
//! failures come back unchanged.

pub mod api;
pub mod config;

pub use api::create_router;
pub use config::CallConfig;
