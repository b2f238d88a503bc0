use crate::error::AppError;
use crate::model::User;
use crate::response::ErrorBody;
use crate::service::UserService;
use crate::state::AppState;
use axum::{extract::State, Json};

/// GET /users
#[utoipa::path(
    get,
    path = "/users",
    tag = "users",
    responses(
        (status = 200, description = "All users", body = Vec<User>),
        (status = 500, description = "Storage failure", body = ErrorBody)
    )
)]
pub async fn list_users(State(state): State<AppState>) -> Result<Json<Vec<User>>, AppError> {
    Ok(Json(UserService::list(&state.pool).await?))
}
