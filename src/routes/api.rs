//! Resource routes: users, people, planets, favorites.

use crate::handlers::{
    add_favorite_person, add_favorite_person_for_user, add_favorite_planet, delete_favorite_person,
    delete_favorite_planet, get_person, get_planet, list_people, list_planets, list_user_favorites, list_users,
};
use crate::state::AppState;
use axum::{routing::get, routing::post, Router};

pub fn api_routes(state: AppState) -> Router {
    Router::new()
        .route("/users", get(list_users))
        .route("/users/favorites/:user_id", get(list_user_favorites))
        .route("/people", get(list_people))
        .route("/people/:people_id", get(get_person))
        .route("/planets", get(list_planets))
        .route("/planets/:planet_id", get(get_planet))
        .route(
            "/favorite/planet/:user_id/:planet_id",
            post(add_favorite_planet).delete(delete_favorite_planet),
        )
        .route("/favorite/people/:people_id", post(add_favorite_person))
        .route(
            "/favorite/people/:user_id/:people_id",
            post(add_favorite_person_for_user).delete(delete_favorite_person),
        )
        .with_state(state)
}
