//! Extract the acting user id from the `X-User-ID` header.

use crate::error::AppError;
use async_trait::async_trait;
use axum::{extract::FromRequestParts, http::request::Parts};

/// Header naming the user a request acts on behalf of.
pub const USER_ID_HEADER: &str = "X-User-ID";

/// Acting user id; `None` when the header is absent or blank.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ActingUser(pub Option<i64>);

impl ActingUser {
    /// Header value, or `fallback` when the request named no user.
    pub fn or_default(self, fallback: i64) -> i64 {
        match self.0 {
            Some(id) => id,
            None => {
                tracing::warn!(user_id = fallback, "no {} header, using default user", USER_ID_HEADER);
                fallback
            }
        }
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for ActingUser
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let raw = match parts.headers.get(USER_ID_HEADER) {
            Some(v) => v
                .to_str()
                .map_err(|_| AppError::BadRequest(format!("{} must be an integer", USER_ID_HEADER)))?
                .trim(),
            None => return Ok(ActingUser(None)),
        };
        if raw.is_empty() {
            return Ok(ActingUser(None));
        }
        let id = raw
            .parse::<i64>()
            .map_err(|_| AppError::BadRequest(format!("{} must be an integer", USER_ID_HEADER)))?;
        Ok(ActingUser(Some(id)))
    }
}
