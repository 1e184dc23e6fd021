//! Domain entities - core business objects

mod item;
mod transaction;
mod user;
mod vendor;

pub use item::{Item, NewItem};
pub use transaction::{NewTransaction, Transaction, TransactionDetail};
pub use user::{NewUser, User, UserUpdate};
pub use vendor::{normalize_vendor_name, NewVendor, Vendor};
