use crate::error::AppError;
use crate::model::Planet;
use crate::response::ErrorBody;
use crate::service::CatalogService;
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    Json,
};

/// GET /planets
#[utoipa::path(
    get,
    path = "/planets",
    tag = "planets",
    responses(
        (status = 200, description = "All planets", body = Vec<Planet>),
        (status = 500, description = "Storage failure", body = ErrorBody)
    )
)]
pub async fn list_planets(State(state): State<AppState>) -> Result<Json<Vec<Planet>>, AppError> {
    Ok(Json(CatalogService::list_planets(&state.pool).await?))
}

/// GET /planets/:planet_id
#[utoipa::path(
    get,
    path = "/planets/{planet_id}",
    tag = "planets",
    params(("planet_id" = i64, Path, description = "Planet id")),
    responses(
        (status = 200, description = "Planet found", body = Planet),
        (status = 404, description = "No such planet", body = ErrorBody),
        (status = 500, description = "Storage failure", body = ErrorBody)
    )
)]
pub async fn get_planet(
    State(state): State<AppState>,
    Path(planet_id): Path<i64>,
) -> Result<Json<Planet>, AppError> {
    let planet = CatalogService::get_planet(&state.pool, planet_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("planet with id {} not found", planet_id)))?;
    Ok(Json(planet))
}
