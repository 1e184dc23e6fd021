//! Report row mappers

use pantry_core::{ProductTakeCount, StatusCount};

use crate::models::{ProductCountModel, StatusCountModel};

impl From<ProductCountModel> for ProductTakeCount {
    fn from(model: ProductCountModel) -> Self {
        ProductTakeCount {
            product_id: model.product_id,
            product_name: model.product_name,
            item_type: model.item_type,
            total_transactions: model.total_transactions,
        }
    }
}

impl From<StatusCountModel> for StatusCount {
    fn from(model: StatusCountModel) -> Self {
        StatusCount {
            user_status: model.user_status,
            count: model.count,
        }
    }
}
