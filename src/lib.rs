//! REST backend for people, planets, and per-user favorites over a relational store.

pub mod config;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod model;
pub mod openapi;
pub mod response;
pub mod routes;
pub mod seed;
pub mod service;
pub mod state;
pub mod store;

pub use config::{AppConfig, Backend};
pub use error::{AppError, ConfigError};
pub use model::{Favorite, FavoriteTarget, Person, Planet, User, Vehicle};
pub use routes::{api_routes, app, status_routes};
pub use service::{CatalogService, FavoriteService, UserService};
pub use state::AppState;
pub use store::{connect, ensure_tables, missing_tables};
