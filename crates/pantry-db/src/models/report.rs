//! Aggregate rows read by the report queries

use sqlx::FromRow;

/// Take count for one product
#[derive(Debug, Clone, FromRow)]
pub struct ProductCountModel {
    pub product_id: i64,
    pub product_name: String,
    pub item_type: String,
    pub total_transactions: i64,
}

/// Distinct users for one stored status value
#[derive(Debug, Clone, FromRow)]
pub struct StatusCountModel {
    pub user_status: Option<String>,
    pub count: i64,
}
