// Maps domain failures to HTTP responses.
//
// This is the only place status codes are assigned to errors. Every failure
// becomes `{ "error": <message> }`; anything not classified below is a 400.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

use crate::modules::users::core::errors::UserError;

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorBody {
    pub error: String,
}

pub fn status_for(error: &UserError) -> StatusCode {
    match error {
        UserError::ParamMissing => StatusCode::BAD_REQUEST,
        UserError::UserNotFound => StatusCode::NOT_FOUND,
        UserError::InvalidParam(_) | UserError::Repository(_) => StatusCode::BAD_REQUEST,
    }
}

impl IntoResponse for UserError {
    fn into_response(self) -> Response {
        let status = status_for(&self);
        let error = self.to_string();
        tracing::warn!(status = status.as_u16(), %error, "request failed");
        (status, Json(ErrorBody { error })).into_response()
    }
}
