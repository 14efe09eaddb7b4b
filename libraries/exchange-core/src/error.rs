/// Core error types for HttpExchange
use thiserror::Error;

/// Result type alias using `UserError`
pub type Result<T> = std::result::Result<T, UserError>;

/// Errors surfaced through the user service contract.
///
/// The in-process service never fails; these variants let a remote
/// implementation report what went wrong on the wire. Absence is not an
/// error and is reported through `Option` / `bool` instead.
#[derive(Error, Debug)]
pub enum UserError {
    /// The upstream service answered with a non-success status.
    /// `content_type` is the upstream `Content-Type` header, if any.
    #[error("Upstream error ({status}): {message}")]
    Upstream {
        status: u16,
        content_type: Option<String>,
        message: String,
    },

    /// The upstream service could not be reached
    #[error("Upstream unreachable: {0}")]
    Unreachable(String),

    /// The upstream service sent a body that could not be decoded
    #[error("Invalid upstream response: {0}")]
    InvalidResponse(String),

    /// Other errors
    #[error("{0}")]
    Other(String),
}

impl UserError {
    /// Create an upstream error
    pub fn upstream(
        status: u16,
        content_type: Option<String>,
        message: impl Into<String>,
    ) -> Self {
        Self::Upstream {
            status,
            content_type,
            message: message.into(),
        }
    }

    /// Create an unreachable error
    pub fn unreachable(msg: impl Into<String>) -> Self {
        Self::Unreachable(msg.into())
    }
}
