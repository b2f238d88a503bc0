//! Favorite rows: list per user, create after checking references, delete one match.

use crate::error::AppError;
use crate::model::{Favorite, FavoriteTarget};
use crate::service::CatalogService;
use sqlx::AnyPool;

pub struct FavoriteService;

impl FavoriteService {
    /// Favorites of `user_id` in insertion order. Unknown users simply have none.
    pub async fn list_for_user(pool: &AnyPool, user_id: i64) -> Result<Vec<Favorite>, AppError> {
        let sql = "SELECT id, user_id, planet_id, people_id, vehicle_id FROM favorites WHERE user_id = $1 ORDER BY id";
        tracing::debug!(sql = %sql, user_id, "query");
        Ok(sqlx::query_as::<_, Favorite>(sql).bind(user_id).fetch_all(pool).await?)
    }

    /// Insert a favorite in one transaction: the target must exist, then the row is inserted.
    /// `user_id` is stored as given, without a users lookup.
    /// Duplicates are allowed; two identical calls store two rows.
    pub async fn create(pool: &AnyPool, user_id: i64, target: FavoriteTarget) -> Result<Favorite, AppError> {
        let mut tx = pool.begin().await?;

        if !CatalogService::target_exists(&mut tx, target).await? {
            return Err(AppError::NotFound(format!(
                "{} with id {} not found",
                target.label(),
                target.id()
            )));
        }

        let (people_id, planet_id, vehicle_id) = target.columns();
        let sql = "INSERT INTO favorites (user_id, people_id, planet_id, vehicle_id) VALUES ($1, $2, $3, $4) \
                   RETURNING id, user_id, planet_id, people_id, vehicle_id";
        tracing::debug!(sql = %sql, user_id, ?target, "query (tx)");
        let row = sqlx::query_as::<_, Favorite>(sql)
            .bind(user_id)
            .bind(people_id)
            .bind(planet_id)
            .bind(vehicle_id)
            .fetch_one(&mut *tx)
            .await?;
        tx.commit().await?;

        tracing::info!(favorite_id = row.id, user_id, target = ?row.target(), "favorite created");
        Ok(row)
    }

    /// Delete the oldest favorite of `user_id` pointing at `target`. Returns the deleted row, or None when nothing matched.
    pub async fn delete_one(pool: &AnyPool, user_id: i64, target: FavoriteTarget) -> Result<Option<Favorite>, AppError> {
        let sql = format!(
            "DELETE FROM favorites WHERE id = (\
             SELECT id FROM favorites WHERE user_id = $1 AND {} = $2 ORDER BY id LIMIT 1\
             ) RETURNING id, user_id, planet_id, people_id, vehicle_id",
            target.column()
        );
        tracing::debug!(sql = %sql, user_id, ?target, "query");
        let deleted = sqlx::query_as::<_, Favorite>(&sql)
            .bind(user_id)
            .bind(target.id())
            .fetch_optional(pool)
            .await?;
        if let Some(row) = &deleted {
            tracing::info!(favorite_id = row.id, user_id, target = ?row.target(), "favorite deleted");
        }
        Ok(deleted)
    }
}
