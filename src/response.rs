//! JSON body shapes shared by handlers.

use axum::{http::StatusCode, Json};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Confirmation returned by favorite writes.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct MessageBody {
    pub msg: String,
}

/// Body of every error response.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorBody {
    pub error: String,
}

pub fn message(status: StatusCode, msg: String) -> (StatusCode, Json<MessageBody>) {
    (status, Json(MessageBody { msg }))
}

pub fn created(msg: String) -> (StatusCode, Json<MessageBody>) {
    message(StatusCode::CREATED, msg)
}

pub fn ok(msg: String) -> (StatusCode, Json<MessageBody>) {
    message(StatusCode::OK, msg)
}
