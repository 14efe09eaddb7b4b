/// Shared application state
use exchange_core::UserService;
use std::sync::Arc;

/// Application state shared across all handlers
///
/// Holds whichever `UserService` the binary wired in: the in-process
/// service on the server, the HTTP client on the aggregator.
#[derive(Clone)]
pub struct AppState {
    pub users: Arc<dyn UserService>,
}

impl AppState {
    pub fn new(users: Arc<dyn UserService>) -> Self {
        Self { users }
    }
}
