//! Main HttpExchange server client.

use crate::error::{Result, ServerClientError};
use crate::types::{ClientConfig, ServerHealth};
use crate::users::{error_from, UsersClient};
use async_trait::async_trait;
use exchange_core::{CreateUser, UpdateUser, User, UserId, UserService};
use reqwest::Client;
use tracing::{debug, info};
use url::Url;

/// Main client for interacting with an HttpExchange server.
///
/// Cheap to clone: the inner `reqwest::Client` shares its connection pool.
///
/// # Example
///
/// ```ignore
/// use exchange_client::{ClientConfig, UserServerClient};
///
/// let client = UserServerClient::new(ClientConfig::new("http://localhost:8181"))?;
/// let users = client.users().list_users().await?;
/// println!("Server holds {} users", users.len());
/// ```
#[derive(Debug, Clone)]
pub struct UserServerClient {
    http: Client,
    url: String,
}

impl UserServerClient {
    /// Create a new client with the given configuration.
    pub fn new(config: ClientConfig) -> Result<Self> {
        // Validate URL
        if config.url.is_empty() {
            return Err(ServerClientError::InvalidUrl("URL cannot be empty".into()));
        }

        // Parse and normalize URL
        let url = config.url.trim_end_matches('/').to_string();
        if !url.starts_with("http://") && !url.starts_with("https://") {
            return Err(ServerClientError::InvalidUrl(
                "URL must start with http:// or https://".into(),
            ));
        }
        Url::parse(&url).map_err(|e| ServerClientError::InvalidUrl(e.to_string()))?;

        let http = Client::builder()
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .user_agent(format!("HttpExchangeCall/{}", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(ServerClientError::Request)?;

        Ok(Self { http, url })
    }

    /// Get the normalized server URL.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Probe the server's health endpoint.
    pub async fn health(&self) -> Result<ServerHealth> {
        let url = format!("{}/api/health", self.url);
        debug!(url = %url, "Checking server health");

        let response = self.http.get(&url).send().await.map_err(|e| {
            if e.is_connect() || e.is_timeout() {
                ServerClientError::ServerUnreachable(e.to_string())
            } else {
                ServerClientError::Request(e)
            }
        })?;

        let status = response.status();

        if status.is_success() {
            let health: ServerHealth = response.json().await.map_err(|e| {
                ServerClientError::ParseError(format!("Failed to parse health response: {}", e))
            })?;

            info!(
                status = %health.status,
                version = %health.version,
                "Connected to server"
            );

            Ok(health)
        } else {
            Err(error_from(response).await)
        }
    }

    /// Get a client for the user resource.
    pub fn users(&self) -> UsersClient<'_> {
        UsersClient::new(&self.http, &self.url)
    }
}

#[async_trait]
impl UserService for UserServerClient {
    async fn find_all(&self) -> exchange_core::Result<Vec<User>> {
        Ok(self.users().list_users().await?)
    }

    async fn find_by_id(&self, id: UserId) -> exchange_core::Result<Option<User>> {
        Ok(self.users().get_user(id).await?)
    }

    async fn create(&self, request: CreateUser) -> exchange_core::Result<User> {
        Ok(self.users().create_user(&request).await?)
    }

    async fn update(&self, id: UserId, request: UpdateUser) -> exchange_core::Result<Option<User>> {
        Ok(self.users().update_user(id, &request).await?)
    }

    async fn delete(&self, id: UserId) -> exchange_core::Result<bool> {
        Ok(self.users().delete_user(id).await?)
    }
}
