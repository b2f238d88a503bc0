//! Shared application state for all routes.

use sqlx::AnyPool;

#[derive(Clone)]
pub struct AppState {
    pub pool: AnyPool,
    /// Acting user for routes that carry no user segment and no `X-User-ID` header.
    pub default_user_id: i64,
}

impl AppState {
    pub fn new(pool: AnyPool, default_user_id: i64) -> Self {
        AppState {
            pool,
            default_user_id,
        }
    }
}
