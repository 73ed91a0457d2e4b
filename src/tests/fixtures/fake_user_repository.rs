// A scripted UserRepository for service and router tests.
//
// Records every call in order. Results are primed per operation, and any
// operation can be made to fail with a given backend message.

use std::mem::discriminant;

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::modules::users::core::ports::{RepositoryError, UserRepository};
use crate::modules::users::core::user::User;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RepoCall {
    GetAll,
    GetOne(i64),
    Persists(i64),
    Add(User),
    Delete(i64),
}

#[derive(Default)]
pub struct FakeUserRepository {
    users: Mutex<Vec<User>>,
    persists: Mutex<bool>,
    failures: Mutex<Vec<(RepoCall, String)>>,
    calls: Mutex<Vec<RepoCall>>,
}

impl FakeUserRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn prime_users(&self, users: Vec<User>) {
        *self.users.lock().await = users;
    }

    pub async fn prime_persists(&self, persists: bool) {
        *self.persists.lock().await = persists;
    }

    /// Fails every call of the same kind as `call`, whatever its arguments.
    pub async fn fail_on(&self, call: RepoCall, message: impl Into<String>) {
        self.failures.lock().await.push((call, message.into()));
    }

    pub async fn calls(&self) -> Vec<RepoCall> {
        self.calls.lock().await.clone()
    }

    async fn record(&self, call: RepoCall) -> Result<(), RepositoryError> {
        let failure = self
            .failures
            .lock()
            .await
            .iter()
            .find(|(kind, _)| discriminant(kind) == discriminant(&call))
            .map(|(_, message)| RepositoryError::Backend(message.clone()));
        self.calls.lock().await.push(call);
        failure.map_or(Ok(()), Err)
    }
}

#[async_trait]
impl UserRepository for FakeUserRepository {
    async fn get_all(&self) -> Result<Vec<User>, RepositoryError> {
        self.record(RepoCall::GetAll).await?;
        Ok(self.users.lock().await.clone())
    }

    async fn get_one(&self, id: i64) -> Result<Option<User>, RepositoryError> {
        self.record(RepoCall::GetOne(id)).await?;
        Ok(self.users.lock().await.iter().find(|u| u.id == id).cloned())
    }

    async fn persists(&self, id: i64) -> Result<bool, RepositoryError> {
        self.record(RepoCall::Persists(id)).await?;
        Ok(*self.persists.lock().await)
    }

    async fn add(&self, user: User) -> Result<(), RepositoryError> {
        self.record(RepoCall::Add(user)).await
    }

    async fn delete(&self, id: i64) -> Result<(), RepositoryError> {
        self.record(RepoCall::Delete(id)).await
    }
}
