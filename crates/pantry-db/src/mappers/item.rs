//! Item model -> entity mapper

use pantry_core::Item;

use crate::models::ItemModel;

impl From<ItemModel> for Item {
    fn from(model: ItemModel) -> Self {
        Item {
            product_id: model.product_id,
            product_name: model.product_name,
            item_type: model.item_type,
            vendor_id: model.vendor_id,
            quantity: model.quantity,
            weight: model.weight,
        }
    }
}
