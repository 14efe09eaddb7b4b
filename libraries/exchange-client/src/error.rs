//! Error types for the HttpExchange client.

use exchange_core::UserError;
use thiserror::Error;

/// Errors that can occur when talking to an HttpExchange server.
#[derive(Error, Debug)]
pub enum ServerClientError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Server returned an error response
    #[error("Server error ({status}): {message}")]
    ServerError {
        status: u16,
        content_type: Option<String>,
        message: String,
    },

    /// Invalid server URL
    #[error("Invalid server URL: {0}")]
    InvalidUrl(String),

    /// Failed to parse server response
    #[error("Failed to parse response: {0}")]
    ParseError(String),

    /// Server is offline or unreachable
    #[error("Server unreachable: {0}")]
    ServerUnreachable(String),
}

impl From<ServerClientError> for UserError {
    fn from(err: ServerClientError) -> Self {
        match err {
            ServerClientError::ServerError {
                status,
                content_type,
                message,
            } => UserError::upstream(status, content_type, message),
            ServerClientError::ServerUnreachable(msg) => UserError::unreachable(msg),
            ServerClientError::ParseError(msg) => UserError::InvalidResponse(msg),
            other => UserError::Other(other.to_string()),
        }
    }
}

/// Result type for server client operations.
pub type Result<T> = std::result::Result<T, ServerClientError>;
