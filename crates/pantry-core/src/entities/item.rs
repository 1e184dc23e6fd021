//! Item entity - a stocked product supplied by a vendor

/// Item entity
///
/// Stock is tracked either as a unit count or as a weight in pounds.
#[derive(Debug, Clone, PartialEq)]
pub struct Item {
    pub product_id: i64,
    pub product_name: String,
    pub item_type: String,
    pub vendor_id: i64,
    pub quantity: Option<i32>,
    pub weight: Option<f64>,
}

impl Item {
    /// Check if the item is at or below either threshold
    ///
    /// A threshold only applies to items that track that kind of stock.
    pub fn is_low_stock(&self, quantity_threshold: Option<i32>, weight_threshold: Option<f64>) -> bool {
        let low_quantity = matches!(
            (self.quantity, quantity_threshold),
            (Some(q), Some(limit)) if q <= limit
        );
        let low_weight = matches!(
            (self.weight, weight_threshold),
            (Some(w), Some(limit)) if w <= limit
        );
        low_quantity || low_weight
    }
}

/// Values for inserting or updating an item
#[derive(Debug, Clone, PartialEq)]
pub struct NewItem {
    pub product_name: String,
    pub item_type: String,
    pub vendor_id: i64,
    pub quantity: Option<i32>,
    pub weight: Option<f64>,
}
