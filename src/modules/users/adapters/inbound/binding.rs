// Request binding for the users routes.
//
// Turns raw path segments and form/JSON bodies into typed values before any
// service call. A missing value is `ParamMissing`, a malformed one `InvalidParam`.

use axum::{
    Form,
    body::Bytes,
    extract::{FromRequest, FromRequestParts, Path, Request, rejection::PathRejection},
    http::{header::CONTENT_TYPE, request::Parts},
};
use chrono::{DateTime, NaiveDate, Utc};
use serde::Deserialize;

use crate::modules::users::core::errors::UserError;
use crate::modules::users::core::user::User;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UserId(pub i64);

pub fn parse_user_id(raw: &str) -> Result<i64, UserError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(UserError::ParamMissing);
    }
    raw.parse::<i64>()
        .map_err(|_| UserError::InvalidParam(format!("invalid user id: {raw}")))
}

impl<S> FromRequestParts<S> for UserId
where
    S: Send + Sync,
{
    type Rejection = UserError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| match rejection {
                PathRejection::MissingPathParams(_) => UserError::ParamMissing,
                other => UserError::InvalidParam(other.body_text()),
            })?;
        parse_user_id(&raw).map(Self)
    }
}

// Transport shape; every field is optional so absence can be reported as ParamMissing.
#[derive(Debug, Default, Deserialize)]
pub struct AddUserBody {
    pub name: Option<String>,
    pub email: Option<String>,
    pub dob: Option<String>,
}

impl AddUserBody {
    pub fn bind(self) -> Result<User, UserError> {
        let email = self.email.ok_or(UserError::ParamMissing)?;
        let name = self.name.ok_or(UserError::ParamMissing)?;
        let dob = self.dob.ok_or(UserError::ParamMissing)?;
        Ok(User::new(name, email, parse_dob(&dob)?))
    }
}

/// Accepts RFC 3339 timestamps or a bare `YYYY-MM-DD` date at midnight UTC.
pub fn parse_dob(raw: &str) -> Result<DateTime<Utc>, UserError> {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Ok(dt.with_timezone(&Utc));
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
        .ok_or_else(|| UserError::InvalidParam(format!("invalid date of birth: {raw}")))
}

/// A new user bound from a JSON or form encoded body.
#[derive(Debug)]
pub struct AddUserRequest(pub User);

impl<S> FromRequest<S> for AddUserRequest
where
    S: Send + Sync,
{
    type Rejection = UserError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let content_type = req
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .map(str::to_owned);

        // Without a content type there is nothing to decode.
        let body = match content_type {
            None => AddUserBody::default(),
            Some(value) if value.starts_with("application/json") => {
                let bytes = Bytes::from_request(req, state)
                    .await
                    .map_err(|rejection| UserError::InvalidParam(rejection.body_text()))?;
                decode_json(&bytes)?
            }
            Some(_) => {
                let Form(body) = Form::<AddUserBody>::from_request(req, state)
                    .await
                    .map_err(|rejection| UserError::InvalidParam(rejection.body_text()))?;
                body
            }
        };
        body.bind().map(Self)
    }
}

fn decode_json(bytes: &[u8]) -> Result<AddUserBody, UserError> {
    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Ok(AddUserBody::default());
    }
    serde_json::from_slice(bytes).map_err(|err| UserError::InvalidParam(err.to_string()))
}
