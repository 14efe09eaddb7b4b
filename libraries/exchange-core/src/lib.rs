//! HttpExchange Core
//!
//! Core types, the user store, and the user service contract shared by the
//! HttpExchange server and the aggregating call service.
//!
//! # Architecture
//!
//! The core crate defines:
//! - **Domain Types**: `User`, `UserStatus`, `CreateUser`, `UpdateUser`
//! - **Storage**: `UserStore`, a thread-safe in-memory registry
//! - **Contract**: the `UserService` trait and its in-process implementation
//! - **Error Handling**: unified `UserError` and `Result` types
//!
//! # Example
//!
//! ```rust
//! use exchange_core::{CreateUser, LocalUserService, UserService, UserStatus};
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() -> exchange_core::Result<()> {
//! let service = LocalUserService::new();
//! let user = service
//!     .create(CreateUser::new("alice", "alice@example.com", "Alice"))
//!     .await?;
//!
//! assert_eq!(user.status, UserStatus::Active);
//! assert_eq!(user.created_at, user.updated_at);
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]

pub mod error;
pub mod service;
pub mod store;
pub mod types;

// Re-export commonly used types
pub use error::{Result, UserError};
pub use service::{LocalUserService, UserService};
pub use store::UserStore;
pub use types::{CreateUser, UpdateUser, User, UserId, UserStatus};
