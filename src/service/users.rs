//! Read-only listing of users; credentials and the active flag stay in the store.

use crate::error::AppError;
use crate::model::User;
use sqlx::AnyPool;

pub struct UserService;

impl UserService {
    pub async fn list(pool: &AnyPool) -> Result<Vec<User>, AppError> {
        let sql = "SELECT id, username, first_name, last_name FROM users ORDER BY id";
        tracing::debug!(sql = %sql, "query");
        let rows = sqlx::query_as::<_, User>(sql).fetch_all(pool).await?;
        Ok(rows)
    }
}
