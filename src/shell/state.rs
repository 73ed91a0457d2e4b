use crate::modules::users::adapters::outbound::user_repository_in_memory::InMemoryUserRepository;
use crate::modules::users::core::ports::UserRepository;
use crate::modules::users::use_cases::user_service::UserService;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub users: Arc<UserService>,
}

impl AppState {
    pub fn new(repository: Arc<dyn UserRepository>) -> Self {
        Self {
            users: Arc::new(UserService::new(repository)),
        }
    }

    pub fn in_memory() -> Self {
        Self::new(Arc::new(InMemoryUserRepository::new()))
    }
}
