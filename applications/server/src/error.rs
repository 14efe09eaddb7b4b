/// Server error types
use axum::{
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use exchange_core::{UserError, UserId};
use serde_json::json;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ServerError>;

#[derive(Debug, Error)]
pub enum ServerError {
    #[error("User not found: {0}")]
    NotFound(UserId),

    /// Non-success answer from the upstream server, passed through as-is
    #[error("Upstream error ({status}): {message}")]
    Upstream {
        status: u16,
        content_type: Option<String>,
        message: String,
    },

    #[error("Bad gateway: {0}")]
    BadGateway(String),

    #[error("Internal server error: {0}")]
    Internal(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<UserError> for ServerError {
    fn from(err: UserError) -> Self {
        match err {
            UserError::Upstream {
                status,
                content_type,
                message,
            } => ServerError::Upstream {
                status,
                content_type,
                message,
            },
            UserError::Unreachable(msg) | UserError::InvalidResponse(msg) => {
                ServerError::BadGateway(msg)
            }
            other => ServerError::Internal(other.to_string()),
        }
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            // Not-found carries no body
            ServerError::NotFound(_) => return StatusCode::NOT_FOUND.into_response(),
            ServerError::Upstream {
                status,
                content_type,
                message,
            } => {
                let status = StatusCode::from_u16(status).unwrap_or(StatusCode::BAD_GATEWAY);
                tracing::warn!("Upstream returned {}", status);
                let mut response = (status, message).into_response();
                if let Some(value) = content_type.and_then(|ct| HeaderValue::from_str(&ct).ok()) {
                    response.headers_mut().insert(header::CONTENT_TYPE, value);
                }
                return response;
            }
            ServerError::BadGateway(ref msg) => {
                tracing::error!("Upstream failure: {}", msg);
                (StatusCode::BAD_GATEWAY, "Upstream unavailable".to_string())
            }
            ServerError::Config(ref msg) => {
                tracing::error!("Config error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Configuration error".to_string(),
                )
            }
            ServerError::Internal(ref msg) => {
                tracing::error!("Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": error_message,
        }));

        (status, body).into_response()
    }
}
