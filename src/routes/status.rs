//! Operational routes: liveness, store readiness, build info.

use crate::store::{missing_tables, TABLES};
use crate::state::AppState;
use axum::{extract::State, http::StatusCode, routing::get, Json, Router};
use serde::Serialize;

#[derive(Serialize)]
struct Liveness {
    status: &'static str,
}

/// Readiness of the store: reachable, and every table `ensure_tables` creates is queryable.
#[derive(Serialize)]
struct Readiness {
    status: &'static str,
    database: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    tables: Option<usize>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    missing_tables: Vec<&'static str>,
}

#[derive(Serialize)]
struct BuildInfo {
    name: &'static str,
    version: &'static str,
}

async fn live() -> Json<Liveness> {
    Json(Liveness { status: "ok" })
}

async fn ready(State(state): State<AppState>) -> (StatusCode, Json<Readiness>) {
    match missing_tables(&state.pool).await {
        Err(e) => {
            tracing::warn!(error = %e, "store unreachable");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(Readiness {
                    status: "degraded",
                    database: "unavailable",
                    tables: None,
                    missing_tables: Vec::new(),
                }),
            )
        }
        Ok(missing) if !missing.is_empty() => {
            tracing::warn!(?missing, "store is missing tables");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(Readiness {
                    status: "degraded",
                    database: "ok",
                    tables: Some(TABLES.len() - missing.len()),
                    missing_tables: missing,
                }),
            )
        }
        Ok(_) => (
            StatusCode::OK,
            Json(Readiness {
                status: "ok",
                database: "ok",
                tables: Some(TABLES.len()),
                missing_tables: Vec::new(),
            }),
        ),
    }
}

async fn build_info() -> Json<BuildInfo> {
    Json(BuildInfo {
        name: env!("CARGO_PKG_NAME"),
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// GET /health, GET /ready, GET /version.
pub fn status_routes(state: AppState) -> Router {
    Router::new()
        .route("/health", get(live))
        .route("/ready", get(ready))
        .route("/version", get(build_info))
        .with_state(state)
}
