//! HttpExchange Server Client
//!
//! HTTP client library for the HttpExchange user API.
//!
//! [`UserServerClient`] implements [`exchange_core::UserService`], so the
//! aggregating service can hold it in place of the in-process service and
//! serve the same endpoints over a network hop.
//!
//! # Example
//!
//! ```ignore
//! use exchange_client::{ClientConfig, UserServerClient};
//! use exchange_core::{CreateUser, UserService};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = UserServerClient::new(ClientConfig::new("http://localhost:8181"))?;
//!
//!     let health = client.health().await?;
//!     println!("Server {} is {}", health.version, health.status);
//!
//!     let user = client
//!         .create(CreateUser::new("alice", "alice@example.com", "Alice"))
//!         .await?;
//!     println!("Created user {}", user.id);
//!
//!     Ok(())
//! }
//! ```

mod client;
mod error;
mod types;
mod users;

pub use client::UserServerClient;
pub use error::{Result, ServerClientError};
pub use types::{ClientConfig, ServerHealth};
pub use users::UsersClient;
