//! Router assembly.

mod api;
mod status;
pub use api::api_routes;
pub use status::status_routes;

use crate::openapi::docs_routes;
use crate::state::AppState;
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

/// Full application: resource routes, health/readiness/version, OpenAPI document,
/// with permissive CORS and request tracing.
pub fn app(state: AppState) -> Router {
    Router::new()
        .merge(status_routes(state.clone()))
        .merge(docs_routes())
        .merge(api_routes(state))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}
