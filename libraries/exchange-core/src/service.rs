//! User service contract
//!
//! `UserService` is the five-operation CRUD interface. It is implemented
//! in-process by [`LocalUserService`] and over HTTP by the client crate, so
//! endpoint handlers can serve either without knowing which one they hold.

use crate::error::Result;
use crate::store::UserStore;
use crate::types::{CreateUser, UpdateUser, User, UserId, UserStatus};
use async_trait::async_trait;
use chrono::Utc;
use std::sync::Arc;
use tracing::{debug, info};

/// CRUD operations over the user collection.
///
/// Absence is reported as `None` / `false`, never as an error.
#[async_trait]
pub trait UserService: Send + Sync {
    /// All users, possibly empty
    async fn find_all(&self) -> Result<Vec<User>>;

    /// Look up a single user
    async fn find_by_id(&self, id: UserId) -> Result<Option<User>>;

    /// Create a user. Status is always `Active`.
    async fn create(&self, request: CreateUser) -> Result<User>;

    /// Partially update a user. Returns `None` if the id is unknown.
    async fn update(&self, id: UserId, request: UpdateUser) -> Result<Option<User>>;

    /// Delete a user. Returns whether anything was removed.
    async fn delete(&self, id: UserId) -> Result<bool>;
}

/// In-process implementation backed by a [`UserStore`].
#[derive(Debug, Clone)]
pub struct LocalUserService {
    store: Arc<UserStore>,
}

impl LocalUserService {
    /// Create a service over a fresh, empty store
    pub fn new() -> Self {
        Self::with_store(Arc::new(UserStore::new()))
    }

    /// Create a service over an existing store
    pub fn with_store(store: Arc<UserStore>) -> Self {
        Self { store }
    }

    /// Create a service seeded with three demo users: `zhangsan` and `lisi`
    /// (active) and `wangwu` (inactive), ids 1 to 3.
    pub async fn with_demo_users() -> Self {
        let service = Self::new();
        service.seed_demo_users().await;
        service
    }

    /// Insert the demo users into the underlying store
    pub async fn seed_demo_users(&self) {
        let seeds = [
            ("zhangsan", "zhangsan@example.com", "Zhang San", UserStatus::Active),
            ("lisi", "lisi@example.com", "Li Si", UserStatus::Active),
            ("wangwu", "wangwu@example.com", "Wang Wu", UserStatus::Inactive),
        ];

        for (username, email, full_name, status) in seeds {
            let mut user = User::new(
                self.store.next_id(),
                CreateUser::new(username, email, full_name),
                Utc::now(),
            );
            user.status = status;
            self.store.put(user).await;
        }

        info!(count = seeds.len(), "Seeded demo users");
    }

    /// The underlying store
    pub fn store(&self) -> &Arc<UserStore> {
        &self.store
    }
}

impl Default for LocalUserService {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl UserService for LocalUserService {
    async fn find_all(&self) -> Result<Vec<User>> {
        Ok(self.store.list().await)
    }

    async fn find_by_id(&self, id: UserId) -> Result<Option<User>> {
        Ok(self.store.get(id).await)
    }

    async fn create(&self, request: CreateUser) -> Result<User> {
        let user = User::new(self.store.next_id(), request, Utc::now());
        self.store.put(user.clone()).await;

        info!(id = %user.id, username = %user.username, "Created user");
        Ok(user)
    }

    async fn update(&self, id: UserId, request: UpdateUser) -> Result<Option<User>> {
        let updated = self
            .store
            .modify(id, |user| request.apply_to(user, Utc::now()))
            .await;

        match &updated {
            Some(user) => debug!(id = %id, status = %user.status, "Updated user"),
            None => debug!(id = %id, "Update skipped: user not found"),
        }
        Ok(updated)
    }

    async fn delete(&self, id: UserId) -> Result<bool> {
        let removed = self.store.remove(id).await;
        if removed {
            info!(id = %id, "Deleted user");
        }
        Ok(removed)
    }
}
