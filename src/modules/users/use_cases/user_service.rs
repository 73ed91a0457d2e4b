use std::sync::Arc;

use crate::modules::users::core::errors::UserError;
use crate::modules::users::core::ports::UserRepository;
use crate::modules::users::core::user::User;

pub struct UserService {
    repository: Arc<dyn UserRepository>,
}

impl UserService {
    pub fn new(repository: Arc<dyn UserRepository>) -> Self {
        Self { repository }
    }

    #[tracing::instrument(skip(self))]
    pub async fn get_all(&self) -> Result<Vec<User>, UserError> {
        Ok(self.repository.get_all().await?)
    }

    #[tracing::instrument(skip(self))]
    pub async fn get_one(&self, id: i64) -> Result<Option<User>, UserError> {
        Ok(self.repository.get_one(id).await?)
    }

    #[tracing::instrument(skip(self, user), fields(email = %user.email))]
    pub async fn add_one(&self, user: User) -> Result<(), UserError> {
        Ok(self.repository.add(user).await?)
    }

    /// Fails with `UserNotFound` unless the id persists. Unknown ids never reach `delete`.
    #[tracing::instrument(skip(self))]
    pub async fn delete_one(&self, id: i64) -> Result<(), UserError> {
        if !self.repository.persists(id).await? {
            return Err(UserError::UserNotFound);
        }
        Ok(self.repository.delete(id).await?)
    }
}
