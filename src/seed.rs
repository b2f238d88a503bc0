//! Reference-data inserts. No route writes catalog rows; these feed startup seeding and tests.

use crate::error::AppError;
use crate::model::NewUser;
use sqlx::AnyPool;

pub async fn insert_user(pool: &AnyPool, user: &NewUser<'_>) -> Result<i64, AppError> {
    let id: i64 = sqlx::query_scalar(
        "INSERT INTO users (username, first_name, last_name, password, is_active) \
         VALUES ($1, $2, $3, $4, $5) RETURNING id",
    )
    .bind(user.username)
    .bind(user.first_name)
    .bind(user.last_name)
    .bind(user.password)
    .bind(user.is_active)
    .fetch_one(pool)
    .await?;
    Ok(id)
}

pub async fn insert_person(pool: &AnyPool, name: &str, birth_year: &str) -> Result<i64, AppError> {
    let id: i64 = sqlx::query_scalar("INSERT INTO people (name, birth_year) VALUES ($1, $2) RETURNING id")
        .bind(name)
        .bind(birth_year)
        .fetch_one(pool)
        .await?;
    Ok(id)
}

pub async fn insert_planet(pool: &AnyPool, name: &str, climate: &str) -> Result<i64, AppError> {
    let id: i64 = sqlx::query_scalar("INSERT INTO planets (name, climate) VALUES ($1, $2) RETURNING id")
        .bind(name)
        .bind(climate)
        .fetch_one(pool)
        .await?;
    Ok(id)
}

pub async fn insert_vehicle(pool: &AnyPool, name: &str, model: &str) -> Result<i64, AppError> {
    let id: i64 = sqlx::query_scalar("INSERT INTO vehicles (name, model) VALUES ($1, $2) RETURNING id")
        .bind(name)
        .bind(model)
        .fetch_one(pool)
        .await?;
    Ok(id)
}

const DEMO_PEOPLE: &[(&str, &str)] = &[
    ("Luke Skywalker", "19BBY"),
    ("Leia Organa", "19BBY"),
    ("Han Solo", "29BBY"),
];

const DEMO_PLANETS: &[(&str, &str)] = &[
    ("Tatooine", "arid"),
    ("Alderaan", "temperate"),
    ("Hoth", "frozen"),
];

const DEMO_VEHICLES: &[(&str, &str)] = &[("Sand Crawler", "Digger Crawler"), ("X-34 landspeeder", "X-34")];

async fn is_empty(pool: &AnyPool, table: &str) -> Result<bool, AppError> {
    let sql = format!("SELECT id FROM {} LIMIT 1", table);
    let row: Option<i64> = sqlx::query_scalar(&sql).fetch_optional(pool).await?;
    Ok(row.is_none())
}

/// Fill each empty table with a small demo catalog and one active user.
/// Tables that already hold rows are skipped, so restarts do not duplicate data.
pub async fn seed_demo_data(pool: &AnyPool) -> Result<(), AppError> {
    if is_empty(pool, "users").await? {
        insert_user(
            pool,
            &NewUser {
                username: "demo",
                first_name: "Demo",
                last_name: "User",
                password: "demo",
                is_active: true,
            },
        )
        .await?;
        tracing::info!("seeded demo user");
    }
    if is_empty(pool, "people").await? {
        for (name, birth_year) in DEMO_PEOPLE {
            insert_person(pool, name, birth_year).await?;
        }
        tracing::info!(count = DEMO_PEOPLE.len(), "seeded people");
    }
    if is_empty(pool, "planets").await? {
        for (name, climate) in DEMO_PLANETS {
            insert_planet(pool, name, climate).await?;
        }
        tracing::info!(count = DEMO_PLANETS.len(), "seeded planets");
    }
    if is_empty(pool, "vehicles").await? {
        for (name, model) in DEMO_VEHICLES {
            insert_vehicle(pool, name, model).await?;
        }
        tracing::info!(count = DEMO_VEHICLES.len(), "seeded vehicles");
    }
    Ok(())
}
