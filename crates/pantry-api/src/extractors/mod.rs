//! Axum extractors for request handling
//!
//! Custom extractors for admin authentication, validation, and path IDs.

mod auth;
mod path;
mod validated;

pub use auth::AdminUser;
pub use path::IdPath;
pub use validated::{ValidatedJson, ValidatedQuery};
