//! Transaction entity - one take of an item by a user

use chrono::{DateTime, Utc};

use crate::value_objects::UserStatus;

/// A recorded take
///
/// `user_status` is a snapshot of the user's status at the time of the take
/// and is never recomputed from the user record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transaction {
    pub transaction_id: i64,
    pub user_id: String,
    pub product_id: i64,
    pub quantity_taken: i32,
    pub user_status: UserStatus,
    pub taken_at: DateTime<Utc>,
}

/// Values for recording a take; the store assigns the ID and timestamp
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTransaction {
    pub user_id: String,
    pub product_id: i64,
    pub quantity_taken: i32,
    pub user_status: UserStatus,
}

/// Transaction joined with its item and (optionally) its user's name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransactionDetail {
    pub transaction_id: i64,
    pub user_id: String,
    pub product_id: i64,
    pub quantity_taken: i32,
    /// Stored snapshot, as read back from the ledger
    pub user_status: Option<String>,
    pub taken_at: DateTime<Utc>,
    pub product_name: String,
    pub item_type: String,
    pub username: Option<String>,
}
