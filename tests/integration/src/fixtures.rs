//! Test fixtures and data generators
//!
//! Provides reusable, collision-free test data for integration tests.

use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

/// Counter for unique test data
static COUNTER: AtomicU64 = AtomicU64::new(1);

/// Get a suffix unique within and across test runs
pub fn unique_suffix() -> String {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos())
        .unwrap_or_default();
    format!("{}{}", nanos, COUNTER.fetch_add(1, Ordering::SeqCst))
}

/// Vendor request
#[derive(Debug, Serialize)]
pub struct VendorRequest {
    pub vendor_name: String,
    pub contact_person: Option<String>,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
}

impl VendorRequest {
    pub fn unique() -> Self {
        Self {
            vendor_name: format!("Test Vendor {}", unique_suffix()),
            contact_person: Some("Pat Grower".to_string()),
            address: None,
            phone: Some("555-0100".to_string()),
            email: None,
        }
    }
}

/// Vendor response
#[derive(Debug, Deserialize)]
pub struct VendorResponse {
    pub vendor_id: i64,
    pub vendor_name: String,
    pub contact_person: Option<String>,
    pub phone: Option<String>,
}

/// Item request
#[derive(Debug, Serialize)]
pub struct ItemRequest {
    pub product_name: String,
    #[serde(rename = "type")]
    pub item_type: String,
    pub vendor_id: i64,
    pub quantity: Option<i32>,
    pub weight: Option<f64>,
}

impl ItemRequest {
    pub fn counted(vendor_id: i64, quantity: i32) -> Self {
        Self {
            product_name: format!("Test Item {}", unique_suffix()),
            item_type: "canned".to_string(),
            vendor_id,
            quantity: Some(quantity),
            weight: None,
        }
    }
}

/// Item response
#[derive(Debug, Deserialize)]
pub struct ItemResponse {
    pub product_id: i64,
    pub product_name: String,
    #[serde(rename = "type")]
    pub item_type: String,
    pub vendor_id: i64,
    pub quantity: Option<i32>,
    pub weight: Option<f64>,
}

/// Registration request
#[derive(Debug, Serialize)]
pub struct RegisterRequest {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub status: String,
}

impl RegisterRequest {
    pub fn unique(status: &str) -> Self {
        Self {
            first_name: "Jane".to_string(),
            last_name: "Doe".to_string(),
            email: format!("jane{}@test.example.edu", unique_suffix()),
            status: status.to_string(),
        }
    }
}

/// User response
#[derive(Debug, Deserialize)]
pub struct UserResponse {
    pub user_id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub status: Option<String>,
    pub role: String,
}

/// Transaction request
#[derive(Debug, Serialize)]
pub struct TransactionRequest {
    pub user_id: String,
    pub product_id: i64,
    pub quantity_taken: i32,
}

/// Transaction creation response
#[derive(Debug, Deserialize)]
pub struct TransactionCreatedResponse {
    pub message: String,
    pub transaction_id: i64,
}

/// Transaction history row
#[derive(Debug, Deserialize)]
pub struct TransactionResponse {
    pub transaction_id: i64,
    pub user_id: String,
    pub product_id: i64,
    pub quantity_taken: i32,
    pub user_status: Option<String>,
    pub product_name: String,
    #[serde(rename = "type")]
    pub item_type: String,
    pub username: Option<String>,
}

/// Most-taken report row
#[derive(Debug, Deserialize)]
pub struct MostTakenItem {
    pub product_id: i64,
    pub product_name: String,
    #[serde(rename = "type")]
    pub item_type: String,
    pub total_transactions: i64,
    pub ranking: i64,
}

/// Unique-student report
#[derive(Debug, Deserialize)]
pub struct StudentCounts {
    pub undergraduate_count: i64,
    pub graduate_count: i64,
}

/// Error body
#[derive(Debug, Deserialize)]
pub struct ErrorBody {
    pub error: String,
    pub code: String,
    pub message: String,
    pub details: Option<serde_json::Value>,
}
