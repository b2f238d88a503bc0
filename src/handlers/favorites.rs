//! Favorite handlers. Writes answer with a `{"msg": ...}` body naming the catalog id.

use crate::error::AppError;
use crate::extractors::ActingUser;
use crate::model::{Favorite, FavoriteTarget};
use crate::response::{created, ok, ErrorBody, MessageBody};
use crate::service::FavoriteService;
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    response::IntoResponse,
    Json,
};

async fn add(state: &AppState, user_id: i64, target: FavoriteTarget) -> Result<impl IntoResponse, AppError> {
    FavoriteService::create(&state.pool, user_id, target).await?;
    Ok(created(format!(
        "{} with id {} added to favorites",
        target.label(),
        target.id()
    )))
}

async fn remove(state: &AppState, user_id: i64, target: FavoriteTarget) -> Result<impl IntoResponse, AppError> {
    FavoriteService::delete_one(&state.pool, user_id, target)
        .await?
        .ok_or_else(|| AppError::NotFound("favorite not found".into()))?;
    Ok(ok(format!(
        "{} with id {} removed from favorites",
        target.label(),
        target.id()
    )))
}

/// GET /users/favorites/:user_id
#[utoipa::path(
    get,
    path = "/users/favorites/{user_id}",
    tag = "favorites",
    params(("user_id" = i64, Path, description = "User id")),
    responses(
        (status = 200, description = "Favorites of the user, oldest first", body = Vec<Favorite>),
        (status = 500, description = "Storage failure", body = ErrorBody)
    )
)]
pub async fn list_user_favorites(
    State(state): State<AppState>,
    Path(user_id): Path<i64>,
) -> Result<Json<Vec<Favorite>>, AppError> {
    Ok(Json(FavoriteService::list_for_user(&state.pool, user_id).await?))
}

/// POST /favorite/planet/:user_id/:planet_id
#[utoipa::path(
    post,
    path = "/favorite/planet/{user_id}/{planet_id}",
    tag = "favorites",
    params(
        ("user_id" = i64, Path, description = "User id"),
        ("planet_id" = i64, Path, description = "Planet id")
    ),
    responses(
        (status = 201, description = "Favorite stored", body = MessageBody),
        (status = 404, description = "No such planet", body = ErrorBody),
        (status = 500, description = "Storage failure", body = ErrorBody)
    )
)]
pub async fn add_favorite_planet(
    State(state): State<AppState>,
    Path((user_id, planet_id)): Path<(i64, i64)>,
) -> Result<impl IntoResponse, AppError> {
    add(&state, user_id, FavoriteTarget::Planet(planet_id)).await
}

/// POST /favorite/people/:people_id, attributed to the `X-User-ID` user or the configured default.
#[utoipa::path(
    post,
    path = "/favorite/people/{people_id}",
    tag = "favorites",
    params(
        ("people_id" = i64, Path, description = "Person id"),
        ("X-User-ID" = Option<i64>, Header, description = "Acting user; the configured default when absent")
    ),
    responses(
        (status = 201, description = "Favorite stored", body = MessageBody),
        (status = 400, description = "Malformed X-User-ID header", body = ErrorBody),
        (status = 404, description = "No such person", body = ErrorBody),
        (status = 500, description = "Storage failure", body = ErrorBody)
    )
)]
pub async fn add_favorite_person(
    acting: ActingUser,
    State(state): State<AppState>,
    Path(people_id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    let user_id = acting.or_default(state.default_user_id);
    add(&state, user_id, FavoriteTarget::Person(people_id)).await
}

/// POST /favorite/people/:user_id/:people_id
#[utoipa::path(
    post,
    path = "/favorite/people/{user_id}/{people_id}",
    tag = "favorites",
    params(
        ("user_id" = i64, Path, description = "User id"),
        ("people_id" = i64, Path, description = "Person id")
    ),
    responses(
        (status = 201, description = "Favorite stored", body = MessageBody),
        (status = 404, description = "No such person", body = ErrorBody),
        (status = 500, description = "Storage failure", body = ErrorBody)
    )
)]
pub async fn add_favorite_person_for_user(
    State(state): State<AppState>,
    Path((user_id, people_id)): Path<(i64, i64)>,
) -> Result<impl IntoResponse, AppError> {
    add(&state, user_id, FavoriteTarget::Person(people_id)).await
}

/// DELETE /favorite/people/:user_id/:people_id
#[utoipa::path(
    delete,
    path = "/favorite/people/{user_id}/{people_id}",
    tag = "favorites",
    params(
        ("user_id" = i64, Path, description = "User id"),
        ("people_id" = i64, Path, description = "Person id")
    ),
    responses(
        (status = 200, description = "One matching favorite removed", body = MessageBody),
        (status = 404, description = "No matching favorite", body = ErrorBody),
        (status = 500, description = "Storage failure", body = ErrorBody)
    )
)]
pub async fn delete_favorite_person(
    State(state): State<AppState>,
    Path((user_id, people_id)): Path<(i64, i64)>,
) -> Result<impl IntoResponse, AppError> {
    remove(&state, user_id, FavoriteTarget::Person(people_id)).await
}

/// DELETE /favorite/planet/:user_id/:planet_id
#[utoipa::path(
    delete,
    path = "/favorite/planet/{user_id}/{planet_id}",
    tag = "favorites",
    params(
        ("user_id" = i64, Path, description = "User id"),
        ("planet_id" = i64, Path, description = "Planet id")
    ),
    responses(
        (status = 200, description = "One matching favorite removed", body = MessageBody),
        (status = 404, description = "No matching favorite", body = ErrorBody),
        (status = 500, description = "Storage failure", body = ErrorBody)
    )
)]
pub async fn delete_favorite_planet(
    State(state): State<AppState>,
    Path((user_id, planet_id)): Path<(i64, i64)>,
) -> Result<impl IntoResponse, AppError> {
    remove(&state, user_id, FavoriteTarget::Planet(planet_id)).await
}
