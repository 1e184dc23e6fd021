//! Transaction database models

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Columns the store assigns when a take is recorded
#[derive(Debug, Clone, FromRow)]
pub struct TransactionInsertedModel {
    pub transaction_id: i64,
    pub taken_at: DateTime<Utc>,
}

/// Transaction row joined with its item and user name
#[derive(Debug, Clone, FromRow)]
pub struct TransactionDetailModel {
    pub transaction_id: i64,
    pub user_id: String,
    pub product_id: i64,
    pub quantity_taken: i32,
    pub user_status: Option<String>,
    pub taken_at: DateTime<Utc>,
    pub product_name: String,
    pub item_type: String,
    pub username: Option<String>,
}
