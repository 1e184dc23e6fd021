//! Item database model

use sqlx::FromRow;

/// Database model for items table
#[derive(Debug, Clone, FromRow)]
pub struct ItemModel {
    pub product_id: i64,
    pub product_name: String,
    pub item_type: String,
    pub vendor_id: i64,
    pub quantity: Option<i32>,
    pub weight: Option<f64>,
}
