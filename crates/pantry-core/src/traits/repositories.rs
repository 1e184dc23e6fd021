//! Repository traits (ports) - define the interface for data access
//!
//! The domain layer defines what it needs, and the infrastructure layer
//! provides the implementation. Every method is a single atomic unit of work
//! against the store; multi-step checks that must not race (vendor deletion,
//! recording a take) are expressed as one method each.

use async_trait::async_trait;

use crate::entities::{
    Item, NewItem, NewTransaction, NewUser, NewVendor, Transaction, TransactionDetail, User,
    UserUpdate, Vendor,
};
use crate::error::DomainError;
use crate::reports::{ProductTakeCount, StatusCount};

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

// ============================================================================
// User Repository
// ============================================================================

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find user by ID
    async fn find_by_id(&self, user_id: &str) -> RepoResult<Option<User>>;

    /// List all users, newest first
    async fn list(&self) -> RepoResult<Vec<User>>;

    /// Insert a new user
    ///
    /// Fails with [`DomainError::UserIdTaken`] when the ID collides and
    /// [`DomainError::EmailAlreadyExists`] when the email does.
    async fn create(&self, user: &NewUser) -> RepoResult<User>;

    /// Update an existing user, returning `None` if it does not exist
    async fn update(&self, user_id: &str, update: &UserUpdate) -> RepoResult<Option<User>>;

    /// Delete a user, returning whether a row was removed
    async fn delete(&self, user_id: &str) -> RepoResult<bool>;
}

// ============================================================================
// Item Repository
// ============================================================================

/// Low-stock thresholds; an unset threshold is not applied
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct LowStockQuery {
    pub quantity: Option<i32>,
    pub weight: Option<f64>,
}

#[async_trait]
pub trait ItemRepository: Send + Sync {
    /// Find item by ID
    async fn find_by_id(&self, product_id: i64) -> RepoResult<Option<Item>>;

    /// List all items ordered by name
    async fn list(&self) -> RepoResult<Vec<Item>>;

    /// List the items supplied by a vendor
    async fn find_by_vendor(&self, vendor_id: i64) -> RepoResult<Vec<Item>>;

    /// List items at or below either threshold
    async fn find_low_stock(&self, query: LowStockQuery) -> RepoResult<Vec<Item>>;

    /// Check if an item exists
    async fn exists(&self, product_id: i64) -> RepoResult<bool>;

    /// Insert a new item
    async fn create(&self, item: &NewItem) -> RepoResult<Item>;

    /// Update an existing item, returning `None` if it does not exist
    async fn update(&self, product_id: i64, item: &NewItem) -> RepoResult<Option<Item>>;

    /// Delete an item, returning whether a row was removed
    ///
    /// Fails with [`DomainError::ItemHasTransactions`] when takes reference it.
    async fn delete(&self, product_id: i64) -> RepoResult<bool>;
}

// ============================================================================
// Vendor Repository
// ============================================================================

/// Outcome of a guarded vendor deletion
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VendorDeletion {
    /// The vendor had no items and was removed
    Deleted,
    /// The vendor still owns this many items and was left in place
    HasItems(i64),
    /// No vendor with that ID
    NotFound,
}

#[async_trait]
pub trait VendorRepository: Send + Sync {
    /// Find vendor by ID
    async fn find_by_id(&self, vendor_id: i64) -> RepoResult<Option<Vendor>>;

    /// List all vendors ordered by name
    async fn list(&self) -> RepoResult<Vec<Vendor>>;

    /// Insert a new vendor
    async fn create(&self, vendor: &NewVendor) -> RepoResult<Vendor>;

    /// Update an existing vendor, returning `None` if it does not exist
    async fn update(&self, vendor_id: i64, vendor: &NewVendor) -> RepoResult<Option<Vendor>>;

    /// Delete a vendor only if no item references it
    ///
    /// The dependent count and the delete happen atomically, so an item
    /// added concurrently either blocks the delete or fails its own insert.
    async fn delete_if_unreferenced(&self, vendor_id: i64) -> RepoResult<VendorDeletion>;
}

// ============================================================================
// Transaction Repository
// ============================================================================

#[async_trait]
pub trait TransactionRepository: Send + Sync {
    /// Record a take
    ///
    /// The insert only happens if the user and item still exist at write
    /// time; `None` means one of them was removed in between.
    async fn create(&self, transaction: &NewTransaction) -> RepoResult<Option<Transaction>>;

    /// List every take joined with its item and user name, newest first
    async fn list_detailed(&self) -> RepoResult<Vec<TransactionDetail>>;

    /// List one user's takes joined with their items, newest first
    async fn find_by_user(&self, user_id: &str) -> RepoResult<Vec<TransactionDetail>>;

    /// Number of takes per product (products with no takes are omitted)
    async fn count_by_product(&self) -> RepoResult<Vec<ProductTakeCount>>;

    /// Number of distinct users per stored status value
    async fn distinct_users_by_status(&self) -> RepoResult<Vec<StatusCount>>;
}
