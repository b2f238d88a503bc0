//! Request extractors.

pub mod acting_user;
pub use acting_user::{ActingUser, USER_ID_HEADER};
