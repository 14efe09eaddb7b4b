/// ID types for HttpExchange entities
use serde::{Deserialize, Serialize};
use std::fmt;

/// User identifier
///
/// Issued by the store's counter, starting at 1. Serialized as a bare integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(i64);

impl UserId {
    /// Create a user ID from a raw integer
    pub const fn new(id: i64) -> Self {
        Self(id)
    }

    /// Get the inner integer
    pub const fn get(self) -> i64 {
        self.0
    }
}

impl From<i64> for UserId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
