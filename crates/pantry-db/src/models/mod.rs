//! Database models - SQLx-compatible structs for PostgreSQL tables

mod item;
mod report;
mod transaction;
mod user;
mod vendor;

pub use item::ItemModel;
pub use report::{ProductCountModel, StatusCountModel};
pub use transaction::{TransactionDetailModel, TransactionInsertedModel};
pub use user::UserModel;
pub use vendor::VendorModel;
