use crate::error::AppError;
use crate::model::Person;
use crate::response::ErrorBody;
use crate::service::CatalogService;
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    Json,
};

/// GET /people
#[utoipa::path(
    get,
    path = "/people",
    tag = "people",
    responses(
        (status = 200, description = "All people", body = Vec<Person>),
        (status = 500, description = "Storage failure", body = ErrorBody)
    )
)]
pub async fn list_people(State(state): State<AppState>) -> Result<Json<Vec<Person>>, AppError> {
    Ok(Json(CatalogService::list_people(&state.pool).await?))
}

/// GET /people/:people_id
#[utoipa::path(
    get,
    path = "/people/{people_id}",
    tag = "people",
    params(("people_id" = i64, Path, description = "Person id")),
    responses(
        (status = 200, description = "Person found", body = Person),
        (status = 404, description = "No such person", body = ErrorBody),
        (status = 500, description = "Storage failure", body = ErrorBody)
    )
)]
pub async fn get_person(
    State(state): State<AppState>,
    Path(people_id): Path<i64>,
) -> Result<Json<Person>, AppError> {
    let person = CatalogService::get_person(&state.pool, people_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("person with id {} not found", people_id)))?;
    Ok(Json(person))
}
