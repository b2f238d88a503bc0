//! Row records and their JSON shapes.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Public view of a user row; `password` and `is_active` are never selected.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
pub struct User {
    pub id: i64,
    pub username: String,
    pub first_name: String,
    pub last_name: String,
}

/// Columns needed to store a user.
#[derive(Clone, Debug)]
pub struct NewUser<'a> {
    pub username: &'a str,
    pub first_name: &'a str,
    pub last_name: &'a str,
    pub password: &'a str,
    pub is_active: bool,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
pub struct Person {
    pub id: i64,
    pub name: String,
    /// Free text, e.g. `19BBY`.
    pub birth_year: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
pub struct Planet {
    pub id: i64,
    pub name: String,
    pub climate: String,
}

/// Stored but not served by any route.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Vehicle {
    pub id: i64,
    pub name: String,
    pub model: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
pub struct Favorite {
    pub id: i64,
    pub user_id: i64,
    pub planet_id: Option<i64>,
    pub people_id: Option<i64>,
    pub vehicle_id: Option<i64>,
}

/// The single catalog row a favorite points at.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FavoriteTarget {
    Person(i64),
    Planet(i64),
    Vehicle(i64),
}

impl FavoriteTarget {
    /// Reference column in `favorites` that holds this target.
    pub fn column(self) -> &'static str {
        match self {
            FavoriteTarget::Person(_) => "people_id",
            FavoriteTarget::Planet(_) => "planet_id",
            FavoriteTarget::Vehicle(_) => "vehicle_id",
        }
    }

    /// Catalog table the target lives in.
    pub fn table(self) -> &'static str {
        match self {
            FavoriteTarget::Person(_) => "people",
            FavoriteTarget::Planet(_) => "planets",
            FavoriteTarget::Vehicle(_) => "vehicles",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            FavoriteTarget::Person(_) => "person",
            FavoriteTarget::Planet(_) => "planet",
            FavoriteTarget::Vehicle(_) => "vehicle",
        }
    }

    pub fn id(self) -> i64 {
        match self {
            FavoriteTarget::Person(id) | FavoriteTarget::Planet(id) | FavoriteTarget::Vehicle(id) => id,
        }
    }

    /// `(people_id, planet_id, vehicle_id)` with exactly one set.
    pub fn columns(self) -> (Option<i64>, Option<i64>, Option<i64>) {
        match self {
            FavoriteTarget::Person(id) => (Some(id), None, None),
            FavoriteTarget::Planet(id) => (None, Some(id), None),
            FavoriteTarget::Vehicle(id) => (None, None, Some(id)),
        }
    }
}

impl Favorite {
    /// Recover the target from the reference columns; `None` if the row breaks the one-target rule.
    pub fn target(&self) -> Option<FavoriteTarget> {
        match (self.people_id, self.planet_id, self.vehicle_id) {
            (Some(id), None, None) => Some(FavoriteTarget::Person(id)),
            (None, Some(id), None) => Some(FavoriteTarget::Planet(id)),
            (None, None, Some(id)) => Some(FavoriteTarget::Vehicle(id)),
            _ => None,
        }
    }
}
