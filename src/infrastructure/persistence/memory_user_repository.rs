//! In-process user store.

use async_trait::async_trait;
use std::collections::BTreeMap;
use tokio::sync::RwLock;
use tracing::debug;

use crate::domain::entities::{NewUser, User, UserSort};
use crate::domain::repositories::{UserRepository, name_taken};
use crate::error::AppError;

/// A user store that lives only as long as the process.
///
/// Used when `STORE_BACKEND=memory`, and by the HTTP integration tests.
/// Mirrors the PostgreSQL store's guarantees: ids start at 1 and are never
/// reused, and names are unique. Every mutation runs under one write lock,
/// so the uniqueness check and the write are atomic.
pub struct MemoryUserRepository {
    inner: RwLock<Inner>,
}

#[derive(Default)]
struct Inner {
    users: BTreeMap<i64, User>,
    last_id: i64,
}

impl Inner {
    fn id_of(&self, name: &str) -> Option<i64> {
        self.users
            .values()
            .find(|user| user.name == name)
            .map(|user| user.id)
    }

    /// Renames `id` to `new_name`, enforcing uniqueness against other users.
    fn rename(&mut self, id: i64, new_name: &str) -> Result<Option<User>, AppError> {
        if !self.users.contains_key(&id) {
            return Ok(None);
        }

        if self.id_of(new_name).is_some_and(|owner| owner != id) {
            return Err(name_taken(new_name));
        }

        Ok(self.users.get_mut(&id).map(|user| {
            user.name = new_name.to_string();
            user.clone()
        }))
    }
}

impl MemoryUserRepository {
    /// Creates an empty store.
    pub fn new() -> Self {
        debug!("Using in-memory user store");
        Self {
            inner: RwLock::new(Inner::default()),
        }
    }
}

impl Default for MemoryUserRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl UserRepository for MemoryUserRepository {
    async fn create(&self, new_user: NewUser) -> Result<User, AppError> {
        let mut inner = self.inner.write().await;

        if inner.id_of(&new_user.name).is_some() {
            return Err(name_taken(&new_user.name));
        }

        inner.last_id += 1;
        let user = User::new(inner.last_id, new_user.name);
        inner.users.insert(user.id, user.clone());

        Ok(user)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<User>, AppError> {
        Ok(self.inner.read().await.users.get(&id).cloned())
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<User>, AppError> {
        let inner = self.inner.read().await;
        Ok(inner.id_of(name).and_then(|id| inner.users.get(&id).cloned()))
    }

    async fn list(&self, sort: UserSort) -> Result<Vec<User>, AppError> {
        let mut users: Vec<User> = self.inner.read().await.users.values().cloned().collect();
        sort.apply(&mut users);
        Ok(users)
    }

    async fn update_name_by_id(&self, id: i64, new_name: &str) -> Result<Option<User>, AppError> {
        self.inner.write().await.rename(id, new_name)
    }

    async fn update_name_by_name(
        &self,
        old_name: &str,
        new_name: &str,
    ) -> Result<Option<User>, AppError> {
        let mut inner = self.inner.write().await;

        match inner.id_of(old_name) {
            Some(id) => inner.rename(id, new_name),
            None => Ok(None),
        }
    }

    async fn delete_by_id(&self, id: i64) -> Result<Option<User>, AppError> {
        Ok(self.inner.write().await.users.remove(&id))
    }

    async fn delete_by_name(&self, name: &str) -> Result<Option<User>, AppError> {
        let mut inner = self.inner.write().await;

        Ok(inner.id_of(name).and_then(|id| inner.users.remove(&id)))
    }

    async fn ping(&self) -> Result<(), AppError> {
        Ok(())
    }
}
