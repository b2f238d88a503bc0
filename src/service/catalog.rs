//! Read-only access to the people and planets catalogs.

use crate::error::AppError;
use crate::model::{FavoriteTarget, Person, Planet};
use sqlx::{AnyConnection, AnyPool};

pub struct CatalogService;

impl CatalogService {
    pub async fn list_people(pool: &AnyPool) -> Result<Vec<Person>, AppError> {
        let sql = "SELECT id, name, birth_year FROM people ORDER BY id";
        tracing::debug!(sql = %sql, "query");
        Ok(sqlx::query_as::<_, Person>(sql).fetch_all(pool).await?)
    }

    pub async fn get_person(pool: &AnyPool, id: i64) -> Result<Option<Person>, AppError> {
        let sql = "SELECT id, name, birth_year FROM people WHERE id = $1";
        tracing::debug!(sql = %sql, id, "query");
        Ok(sqlx::query_as::<_, Person>(sql).bind(id).fetch_optional(pool).await?)
    }

    pub async fn list_planets(pool: &AnyPool) -> Result<Vec<Planet>, AppError> {
        let sql = "SELECT id, name, climate FROM planets ORDER BY id";
        tracing::debug!(sql = %sql, "query");
        Ok(sqlx::query_as::<_, Planet>(sql).fetch_all(pool).await?)
    }

    pub async fn get_planet(pool: &AnyPool, id: i64) -> Result<Option<Planet>, AppError> {
        let sql = "SELECT id, name, climate FROM planets WHERE id = $1";
        tracing::debug!(sql = %sql, id, "query");
        Ok(sqlx::query_as::<_, Planet>(sql).bind(id).fetch_optional(pool).await?)
    }

    /// Whether the catalog row a favorite would point at exists.
    pub async fn target_exists(conn: &mut AnyConnection, target: FavoriteTarget) -> Result<bool, AppError> {
        let sql = format!("SELECT id FROM {} WHERE id = $1", target.table());
        tracing::debug!(sql = %sql, id = target.id(), "query");
        let row: Option<i64> = sqlx::query_scalar(&sql)
            .bind(target.id())
            .fetch_optional(&mut *conn)
            .await?;
        Ok(row.is_some())
    }
}
