//! Pool construction and table DDL. Tables are created if missing; existing tables are left as they are.

use crate::config::Backend;
use crate::error::AppError;
use sqlx::any::AnyPoolOptions;
use sqlx::AnyPool;

/// Open a pool for `database_url` (PostgreSQL or SQLite) through the `Any` driver.
pub async fn connect(database_url: &str, max_connections: u32) -> Result<AnyPool, AppError> {
    sqlx::any::install_default_drivers();
    let pool = AnyPoolOptions::new()
        .max_connections(max_connections)
        .connect(database_url)
        .await?;
    Ok(pool)
}

/// Tables created by `ensure_tables`, in dependency order.
pub const TABLES: &[&str] = &["users", "people", "planets", "vehicles", "favorites"];

fn table_ddl(backend: Backend) -> Vec<String> {
    let id = backend.id_column();
    vec![
        format!(
            r#"
            CREATE TABLE IF NOT EXISTS users (
                id {id},
                username VARCHAR(50) NOT NULL UNIQUE,
                first_name VARCHAR(50) NOT NULL,
                last_name VARCHAR(50) NOT NULL,
                password TEXT NOT NULL,
                is_active BOOLEAN NOT NULL
            )
            "#
        ),
        format!(
            r#"
            CREATE TABLE IF NOT EXISTS people (
                id {id},
                name VARCHAR(50) NOT NULL,
                birth_year VARCHAR(50) NOT NULL
            )
            "#
        ),
        format!(
            r#"
            CREATE TABLE IF NOT EXISTS planets (
                id {id},
                name VARCHAR(50) NOT NULL,
                climate VARCHAR(50) NOT NULL
            )
            "#
        ),
        format!(
            r#"
            CREATE TABLE IF NOT EXISTS vehicles (
                id {id},
                name VARCHAR(50) NOT NULL,
                model VARCHAR(50) NOT NULL
            )
            "#
        ),
        // Exactly one of the three references is set. user_id carries no foreign key:
        // favorites may name users that are not in the users table.
        format!(
            r#"
            CREATE TABLE IF NOT EXISTS favorites (
                id {id},
                user_id BIGINT NOT NULL,
                people_id BIGINT REFERENCES people (id),
                planet_id BIGINT REFERENCES planets (id),
                vehicle_id BIGINT REFERENCES vehicles (id),
                CONSTRAINT favorites_single_target CHECK (
                    (CASE WHEN people_id IS NULL THEN 0 ELSE 1 END)
                    + (CASE WHEN planet_id IS NULL THEN 0 ELSE 1 END)
                    + (CASE WHEN vehicle_id IS NULL THEN 0 ELSE 1 END) = 1
                )
            )
            "#
        ),
        "CREATE INDEX IF NOT EXISTS favorites_user_id_idx ON favorites (user_id)".to_string(),
    ]
}

/// Create users, people, planets, vehicles and favorites in dependency order.
pub async fn ensure_tables(pool: &AnyPool, backend: Backend) -> Result<(), AppError> {
    for ddl in table_ddl(backend) {
        sqlx::query(&ddl).execute(pool).await?;
    }
    tracing::debug!(?backend, "tables ensured");
    Ok(())
}

/// Tables of `TABLES` that cannot be queried. Errors only when the store itself is unreachable.
pub async fn missing_tables(pool: &AnyPool) -> Result<Vec<&'static str>, AppError> {
    sqlx::query("SELECT 1").execute(pool).await?;
    let mut missing = Vec::new();
    for table in TABLES {
        let sql = format!("SELECT id FROM {} LIMIT 1", table);
        if let Err(e) = sqlx::query(&sql).fetch_optional(pool).await {
            tracing::debug!(table, error = %e, "table not queryable");
            missing.push(*table);
        }
    }
    Ok(missing)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ddl_uses_dialect_primary_key() {
        let pg = table_ddl(Backend::Postgres);
        assert!(pg.iter().take(5).all(|ddl| ddl.contains("BIGSERIAL PRIMARY KEY")));
        let lite = table_ddl(Backend::Sqlite);
        assert!(lite.iter().take(5).all(|ddl| ddl.contains("INTEGER PRIMARY KEY AUTOINCREMENT")));
    }

    #[test]
    fn favorites_created_after_referenced_tables() {
        let ddl = table_ddl(Backend::Sqlite);
        let pos = |name: &str| {
            ddl.iter()
                .position(|d| d.contains(&format!("CREATE TABLE IF NOT EXISTS {} ", name)))
                .unwrap()
        };
        let favorites = pos("favorites");
        for &table in &TABLES[..TABLES.len() - 1] {
            assert!(pos(table) < favorites, "{} must precede favorites", table);
        }
    }
}
