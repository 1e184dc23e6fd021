//! Transaction model -> entity mappers

use pantry_core::{NewTransaction, Transaction, TransactionDetail};

use crate::models::{TransactionDetailModel, TransactionInsertedModel};

/// Combine the recorded values with the columns the store assigned
pub fn transaction_from_insert(
    new: &NewTransaction,
    inserted: TransactionInsertedModel,
) -> Transaction {
    Transaction {
        transaction_id: inserted.transaction_id,
        user_id: new.user_id.clone(),
        product_id: new.product_id,
        quantity_taken: new.quantity_taken,
        user_status: new.user_status,
        taken_at: inserted.taken_at,
    }
}

impl From<TransactionDetailModel> for TransactionDetail {
    fn from(model: TransactionDetailModel) -> Self {
        TransactionDetail {
            transaction_id: model.transaction_id,
            user_id: model.user_id,
            product_id: model.product_id,
            quantity_taken: model.quantity_taken,
            user_status: model.user_status,
            taken_at: model.taken_at,
            product_name: model.product_name,
            item_type: model.item_type,
            username: model.username,
        }
    }
}
