//! Value objects - immutable types that represent domain concepts

mod role;
mod status;
mod user_id;

pub use role::UserRole;
pub use status::UserStatus;
pub use user_id::{generate_user_id, IdRetryPolicy};
