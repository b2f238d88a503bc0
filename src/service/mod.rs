//! Storage operations, one service per resource. Handlers call these with the pool from `AppState`.

mod catalog;
mod favorites;
mod users;
pub use catalog::CatalogService;
pub use favorites::FavoriteService;
pub use users::UserService;
