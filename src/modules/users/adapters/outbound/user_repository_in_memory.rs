// In memory implementation of the UserRepository port.
//
// Purpose
// - Back the service for local development and flow tests without a database.
//
// Responsibilities
// - Keep users ordered by id.
// - Assign the next sequential id on add, replacing the new-user sentinel.
// - Treat deletes of unknown ids as no-ops. Existence is the service's concern.

use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::modules::users::core::ports::{RepositoryError, UserRepository};
use crate::modules::users::core::user::User;

#[derive(Default)]
struct Store {
    users: BTreeMap<i64, User>,
    last_id: i64,
}

#[derive(Default)]
pub struct InMemoryUserRepository {
    inner: RwLock<Store>,
    is_offline: bool,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_offline(&mut self) {
        self.is_offline = !self.is_offline;
    }

    fn ensure_online(&self) -> Result<(), RepositoryError> {
        if self.is_offline {
            return Err(RepositoryError::Backend("User store offline".into()));
        }
        Ok(())
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn get_all(&self) -> Result<Vec<User>, RepositoryError> {
        self.ensure_online()?;
        let guard = self.inner.read().await;
        Ok(guard.users.values().map(User::duplicate).collect())
    }

    async fn get_one(&self, id: i64) -> Result<Option<User>, RepositoryError> {
        self.ensure_online()?;
        let guard = self.inner.read().await;
        Ok(guard.users.get(&id).map(User::duplicate))
    }

    async fn persists(&self, id: i64) -> Result<bool, RepositoryError> {
        self.ensure_online()?;
        Ok(self.inner.read().await.users.contains_key(&id))
    }

    async fn add(&self, mut user: User) -> Result<(), RepositoryError> {
        self.ensure_online()?;
        let mut guard = self.inner.write().await;
        guard.last_id += 1;
        user.id = guard.last_id;
        tracing::debug!(id = user.id, "user stored");
        guard.users.insert(user.id, user);
        Ok(())
    }

    async fn delete(&self, id: i64) -> Result<(), RepositoryError> {
        self.ensure_online()?;
        if self.inner.write().await.users.remove(&id).is_some() {
            tracing::debug!(id, "user removed");
        }
        Ok(())
    }
}
