//! In-memory user registry
//!
//! The store owns every `User`. Reads hand out clones, so callers can never
//! mutate stored state through a returned value.

use crate::types::{User, UserId};
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicI64, Ordering};
use tokio::sync::RwLock;

/// Thread-safe user registry keyed by id, with an atomic id generator.
///
/// Each call takes the lock once, so a write is atomic at whole-entity
/// granularity and no reader can see a half-written user.
#[derive(Debug)]
pub struct UserStore {
    users: RwLock<BTreeMap<UserId, User>>,
    next_id: AtomicI64,
}

impl UserStore {
    /// Create an empty store. The first issued id is 1.
    pub fn new() -> Self {
        Self {
            users: RwLock::new(BTreeMap::new()),
            next_id: AtomicI64::new(1),
        }
    }

    /// Issue a fresh id, strictly greater than every id issued before.
    pub fn next_id(&self) -> UserId {
        UserId::new(self.next_id.fetch_add(1, Ordering::Relaxed))
    }

    /// Insert or replace a user.
    pub async fn put(&self, user: User) {
        self.users.write().await.insert(user.id, user);
    }

    /// Get a snapshot of a user, if present.
    pub async fn get(&self, id: UserId) -> Option<User> {
        self.users.read().await.get(&id).cloned()
    }

    /// Snapshot of all users. Callers must not rely on the order.
    pub async fn list(&self) -> Vec<User> {
        self.users.read().await.values().cloned().collect()
    }

    /// Delete a user. Returns whether anything was removed.
    pub async fn remove(&self, id: UserId) -> bool {
        self.users.write().await.remove(&id).is_some()
    }

    /// Apply `f` to the stored user under the write lock and return the
    /// resulting snapshot, or `None` if the id is unknown.
    pub async fn modify<F>(&self, id: UserId, f: F) -> Option<User>
    where
        F: FnOnce(&mut User),
    {
        let mut users = self.users.write().await;
        let user = users.get_mut(&id)?;
        f(user);
        Some(user.clone())
    }

    /// Number of stored users
    pub async fn len(&self) -> usize {
        self.users.read().await.len()
    }

    /// Check if the store holds no users
    pub async fn is_empty(&self) -> bool {
        self.users.read().await.is_empty()
    }
}

impl Default for UserStore {
    fn default() -> Self {
        Self::new()
    }
}
