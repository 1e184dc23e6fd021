//! Repository implementations
//!
//! PostgreSQL implementations of the repository traits defined in pantry-core.
//! Each repository handles database operations for a specific domain entity.

mod error;
mod item;
mod transaction;
mod user;
mod vendor;

pub use item::PgItemRepository;
pub use transaction::PgTransactionRepository;
pub use user::PgUserRepository;
pub use vendor::PgVendorRepository;
