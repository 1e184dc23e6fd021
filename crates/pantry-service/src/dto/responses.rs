//! Response DTOs for API endpoints
//!
//! All response DTOs implement `Serialize` for JSON output.

use chrono::{DateTime, Utc};
use pantry_core::StudentCounts;
use serde::Serialize;

// ============================================================================
// Transaction Responses
// ============================================================================

/// Returned after a take is recorded
#[derive(Debug, Clone, Serialize)]
pub struct TransactionCreatedResponse {
    pub message: String,
    pub transaction_id: i64,
}

impl TransactionCreatedResponse {
    pub fn new(transaction_id: i64) -> Self {
        Self {
            message: "Transaction created successfully".to_string(),
            transaction_id,
        }
    }
}

/// A recorded take with its item and user name
#[derive(Debug, Clone, Serialize)]
pub struct TransactionResponse {
    pub transaction_id: i64,
    pub user_id: String,
    pub product_id: i64,
    pub quantity_taken: i32,
    pub user_status: Option<String>,
    pub taken_at: DateTime<Utc>,
    pub product_name: String,
    #[serde(rename = "type")]
    pub item_type: String,
    pub username: Option<String>,
}

// ============================================================================
// Report Responses
// ============================================================================

/// One row of the most-taken report
#[derive(Debug, Clone, Serialize)]
pub struct MostTakenItemResponse {
    pub product_id: i64,
    pub product_name: String,
    #[serde(rename = "type")]
    pub item_type: String,
    pub total_transactions: i64,
    pub ranking: i64,
}

/// Unique students per status
pub type StudentCountsResponse = StudentCounts;

// ============================================================================
// Vendor Responses
// ============================================================================

#[derive(Debug, Clone, Serialize)]
pub struct VendorResponse {
    pub vendor_id: i64,
    pub vendor_name: String,
    pub contact_person: Option<String>,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
}

/// Returned after a vendor is removed
#[derive(Debug, Clone, Serialize)]
pub struct VendorDeletedResponse {
    pub deleted: bool,
    pub message: String,
}

impl VendorDeletedResponse {
    pub fn new() -> Self {
        Self {
            deleted: true,
            message: "Vendor deleted successfully".to_string(),
        }
    }
}

impl Default for VendorDeletedResponse {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// User Responses
// ============================================================================

#[derive(Debug, Clone, Serialize)]
pub struct UserResponse {
    pub user_id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub status: Option<String>,
    pub role: String,
    pub created_at: DateTime<Utc>,
}

// ============================================================================
// Item Responses
// ============================================================================

#[derive(Debug, Clone, Serialize)]
pub struct ItemResponse {
    pub product_id: i64,
    pub product_name: String,
    #[serde(rename = "type")]
    pub item_type: String,
    pub vendor_id: i64,
    pub quantity: Option<i32>,
    pub weight: Option<f64>,
}

// ============================================================================
// Health Responses
// ============================================================================

/// Health check response
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
    pub checks: HealthChecks,
}

/// Health check status for each dependency
#[derive(Debug, Clone, Serialize)]
pub struct HealthChecks {
    pub database: String,
}

impl HealthResponse {
    pub fn from_checks(database_healthy: bool) -> Self {
        Self {
            status: if database_healthy { "healthy" } else { "unhealthy" }.to_string(),
            timestamp: Utc::now(),
            checks: HealthChecks {
                database: if database_healthy { "healthy" } else { "unhealthy" }.to_string(),
            },
        }
    }

    pub fn is_healthy(&self) -> bool {
        self.status == "healthy"
    }
}
