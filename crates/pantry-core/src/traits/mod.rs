//! Repository traits (ports)

mod repositories;

pub use repositories::{
    ItemRepository, LowStockQuery, RepoResult, TransactionRepository, UserRepository,
    VendorDeletion, VendorRepository,
};
