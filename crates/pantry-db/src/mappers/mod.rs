//! Model to entity mappers
//!
//! - `From<Model> for Entity`: convert database rows to domain objects
//! - `TryFrom` where a column holds a value the domain must parse

mod item;
mod report;
mod transaction;
mod user;
mod vendor;

pub use transaction::transaction_from_insert;
