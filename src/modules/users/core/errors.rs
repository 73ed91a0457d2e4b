use thiserror::Error;

use crate::modules::users::core::ports::RepositoryError;

pub const PARAM_MISSING_MSG: &str = "One or more of the required parameters was missing.";
pub const USER_NOT_FOUND_MSG: &str = "A user with the given id does not exists in the database.";

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum UserError {
    #[error("{}", PARAM_MISSING_MSG)]
    ParamMissing,

    #[error("{}", USER_NOT_FOUND_MSG)]
    UserNotFound,

    #[error("{0}")]
    InvalidParam(String),

    #[error(transparent)]
    Repository(#[from] RepositoryError),
}
