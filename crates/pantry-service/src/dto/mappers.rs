//! Entity to DTO mappers
//!
//! Implements `From` conversions from domain entities to response DTOs.

use pantry_core::{Item, MostTakenItem, TransactionDetail, User, Vendor};

use super::responses::{
    ItemResponse, MostTakenItemResponse, TransactionResponse, UserResponse, VendorResponse,
};

// ============================================================================
// Transaction Mappers
// ============================================================================

impl From<TransactionDetail> for TransactionResponse {
    fn from(detail: TransactionDetail) -> Self {
        Self {
            transaction_id: detail.transaction_id,
            user_id: detail.user_id,
            product_id: detail.product_id,
            quantity_taken: detail.quantity_taken,
            user_status: detail.user_status,
            taken_at: detail.taken_at,
            product_name: detail.product_name,
            item_type: detail.item_type,
            username: detail.username,
        }
    }
}

impl From<MostTakenItem> for MostTakenItemResponse {
    fn from(item: MostTakenItem) -> Self {
        Self {
            product_id: item.product_id,
            product_name: item.product_name,
            item_type: item.item_type,
            total_transactions: item.total_transactions,
            ranking: item.ranking,
        }
    }
}

// ============================================================================
// Vendor Mappers
// ============================================================================

impl From<Vendor> for VendorResponse {
    fn from(vendor: Vendor) -> Self {
        Self {
            vendor_id: vendor.vendor_id,
            vendor_name: vendor.vendor_name,
            contact_person: vendor.contact_person,
            address: vendor.address,
            phone: vendor.phone,
            email: vendor.email,
        }
    }
}

// ============================================================================
// User Mappers
// ============================================================================

impl From<&User> for UserResponse {
    fn from(user: &User) -> Self {
        Self {
            user_id: user.user_id.clone(),
            first_name: user.first_name.clone(),
            last_name: user.last_name.clone(),
            email: user.email.clone(),
            status: user.status.clone(),
            role: user.role.as_str().to_string(),
            created_at: user.created_at,
        }
    }
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self::from(&user)
    }
}

// ============================================================================
// Item Mappers
// ============================================================================

impl From<Item> for ItemResponse {
    fn from(item: Item) -> Self {
        Self {
            product_id: item.product_id,
            product_name: item.product_name,
            item_type: item.item_type,
            vendor_id: item.vendor_id,
            quantity: item.quantity,
            weight: item.weight,
        }
    }
}
