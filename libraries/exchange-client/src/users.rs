//! User resource operations for the HttpExchange server.

use crate::error::{Result, ServerClientError};
use exchange_core::{CreateUser, UpdateUser, User, UserId};
use reqwest::{header, Client, RequestBuilder, Response, StatusCode};
use tracing::debug;

const USERS_PATH: &str = "/api/users";

/// Users client for the HttpExchange server.
///
/// A 404 from the server is absence (`None` / `false`); every other
/// non-success status becomes [`ServerClientError::ServerError`] carrying the
/// original status and body.
pub struct UsersClient<'a> {
    http: &'a Client,
    base_url: &'a str,
}

impl<'a> UsersClient<'a> {
    pub(crate) fn new(http: &'a Client, base_url: &'a str) -> Self {
        Self { http, base_url }
    }

    fn collection_url(&self) -> String {
        format!("{}{}", self.base_url, USERS_PATH)
    }

    fn item_url(&self, id: UserId) -> String {
        format!("{}{}/{}", self.base_url, USERS_PATH, id)
    }

    /// List all users.
    pub async fn list_users(&self) -> Result<Vec<User>> {
        let url = self.collection_url();
        debug!(url = %url, "Listing users");

        let response = send(self.http.get(&url)).await?;
        let status = response.status();

        if status.is_success() {
            let users: Vec<User> = parse(response, "user list").await?;
            debug!(count = users.len(), "Fetched users");
            Ok(users)
        } else {
            Err(error_from(response).await)
        }
    }

    /// Get a single user by ID.
    pub async fn get_user(&self, id: UserId) -> Result<Option<User>> {
        let url = self.item_url(id);
        debug!(url = %url, id = %id, "Fetching user");

        let response = send(self.http.get(&url)).await?;
        let status = response.status();

        if status.is_success() {
            Ok(Some(parse(response, "user").await?))
        } else if status == StatusCode::NOT_FOUND {
            Ok(None)
        } else {
            Err(error_from(response).await)
        }
    }

    /// Create a user.
    pub async fn create_user(&self, request: &CreateUser) -> Result<User> {
        let url = self.collection_url();
        debug!(url = %url, username = %request.username, "Creating user");

        let response = send(self.http.post(&url).json(request)).await?;
        let status = response.status();

        if status.is_success() {
            let user: User = parse(response, "created user").await?;
            debug!(id = %user.id, "User created");
            Ok(user)
        } else {
            Err(error_from(response).await)
        }
    }

    /// Partially update a user.
    pub async fn update_user(&self, id: UserId, request: &UpdateUser) -> Result<Option<User>> {
        let url = self.item_url(id);
        debug!(url = %url, id = %id, "Updating user");

        let response = send(self.http.put(&url).json(request)).await?;
        let status = response.status();

        if status.is_success() {
            Ok(Some(parse(response, "updated user").await?))
        } else if status == StatusCode::NOT_FOUND {
            Ok(None)
        } else {
            Err(error_from(response).await)
        }
    }

    /// Delete a user. Returns `false` if the server did not know the id.
    pub async fn delete_user(&self, id: UserId) -> Result<bool> {
        let url = self.item_url(id);
        debug!(url = %url, id = %id, "Deleting user");

        let response = send(self.http.delete(&url)).await?;
        let status = response.status();

        if status.is_success() {
            debug!(id = %id, "User deleted");
            Ok(true)
        } else if status == StatusCode::NOT_FOUND {
            Ok(false)
        } else {
            Err(error_from(response).await)
        }
    }
}

async fn send(request: RequestBuilder) -> Result<Response> {
    request.send().await.map_err(|e| {
        if e.is_connect() || e.is_timeout() {
            ServerClientError::ServerUnreachable(e.to_string())
        } else {
            ServerClientError::Request(e)
        }
    })
}

async fn parse<T: serde::de::DeserializeOwned>(response: Response, what: &str) -> Result<T> {
    response
        .json()
        .await
        .map_err(|e| ServerClientError::ParseError(format!("Failed to parse {}: {}", what, e)))
}

/// Capture a failed response: status, `Content-Type` and body text.
pub(crate) async fn error_from(response: Response) -> ServerClientError {
    let status = response.status().as_u16();
    let content_type = response
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .map(str::to_owned);
    let message = response.text().await.unwrap_or_default();
    ServerClientError::ServerError {
        status,
        content_type,
        message,
    }
}
