//! OpenAPI document for the resource routes, served at GET /openapi.json.

use crate::handlers;
use crate::model::{Favorite, Person, Planet, User};
use crate::response::{ErrorBody, MessageBody};
use axum::{routing::get, Json, Router};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(
        handlers::users::list_users,
        handlers::people::list_people,
        handlers::people::get_person,
        handlers::planets::list_planets,
        handlers::planets::get_planet,
        handlers::favorites::list_user_favorites,
        handlers::favorites::add_favorite_planet,
        handlers::favorites::add_favorite_person,
        handlers::favorites::add_favorite_person_for_user,
        handlers::favorites::delete_favorite_person,
        handlers::favorites::delete_favorite_planet,
    ),
    components(schemas(User, Person, Planet, Favorite, MessageBody, ErrorBody)),
    tags(
        (name = "users"),
        (name = "people", description = "Read-only people catalog"),
        (name = "planets", description = "Read-only planets catalog"),
        (name = "favorites", description = "Per-user favorites")
    )
)]
pub struct ApiDoc;

async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

pub fn docs_routes() -> Router {
    Router::new().route("/openapi.json", get(openapi_json))
}
