use axum::{Json, extract::State, http::StatusCode};
use serde::{Deserialize, Serialize};

use crate::modules::users::adapters::inbound::binding::{AddUserRequest, UserId};
use crate::modules::users::core::errors::UserError;
use crate::modules::users::core::user::User;
use crate::shell::state::AppState;

#[derive(Debug, Serialize, Deserialize)]
pub struct UsersResponse {
    pub users: Vec<User>,
}

pub async fn get_all(State(state): State<AppState>) -> Result<Json<UsersResponse>, UserError> {
    let users = state.users.get_all().await?;
    Ok(Json(UsersResponse { users }))
}

pub async fn get_one(
    State(state): State<AppState>,
    UserId(id): UserId,
) -> Result<Json<User>, UserError> {
    state
        .users
        .get_one(id)
        .await?
        .map(Json)
        .ok_or(UserError::UserNotFound)
}

pub async fn add(
    State(state): State<AppState>,
    AddUserRequest(user): AddUserRequest,
) -> Result<StatusCode, UserError> {
    state.users.add_one(user).await?;
    Ok(StatusCode::CREATED)
}

pub async fn delete(
    State(state): State<AppState>,
    UserId(id): UserId,
) -> Result<StatusCode, UserError> {
    state.users.delete_one(id).await?;
    Ok(StatusCode::OK)
}

pub async fn delete_without_id() -> Result<StatusCode, UserError> {
    Err(UserError::ParamMissing)
}
