//! # pantry-core
//!
//! Domain layer for the pantry inventory service: entities, value objects,
//! report rules (ranking and student counts), and repository traits.
//! This crate has zero dependencies on infrastructure (database, web framework, etc.).

pub mod entities;
pub mod error;
pub mod reports;
pub mod traits;
pub mod value_objects;

// Re-export commonly used types at crate root
pub use entities::{
    normalize_vendor_name, Item, NewItem, NewTransaction, NewUser, NewVendor, Transaction,
    TransactionDetail, User, UserUpdate, Vendor,
};
pub use error::DomainError;
pub use reports::{
    rank_most_taken, MostTakenItem, ProductTakeCount, StatusCount, StudentCounts,
    MOST_TAKEN_MAX_RANK,
};
pub use traits::{
    ItemRepository, LowStockQuery, RepoResult, TransactionRepository, UserRepository,
    VendorDeletion, VendorRepository,
};
pub use value_objects::{generate_user_id, IdRetryPolicy, UserRole, UserStatus};
