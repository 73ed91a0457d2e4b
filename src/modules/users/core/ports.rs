// Ports define what the users core needs from storage, without implementing it.
//
// Any call may fail with an opaque backend error. The core never inspects the
// cause; the message travels unchanged to the HTTP boundary.

use async_trait::async_trait;
use thiserror::Error;

use crate::modules::users::core::user::User;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RepositoryError {
    #[error("{0}")]
    Backend(String),
}

#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn get_all(&self) -> Result<Vec<User>, RepositoryError>;
    async fn get_one(&self, id: i64) -> Result<Option<User>, RepositoryError>;
    async fn persists(&self, id: i64) -> Result<bool, RepositoryError>;
    async fn add(&self, user: User) -> Result<(), RepositoryError>;
    async fn delete(&self, id: i64) -> Result<(), RepositoryError>;
}
