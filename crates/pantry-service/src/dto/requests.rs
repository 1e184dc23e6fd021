//! Request DTOs for API endpoints
//!
//! All request DTOs implement `Deserialize` and `Validate` for input validation.
//! Shape checks live here; domain rules (status values, required-field
//! semantics) are applied by the services.

use std::fmt::Display;
use std::str::FromStr;

use serde::{de, Deserialize, Deserializer};
use validator::Validate;

// ============================================================================
// Transaction Requests
// ============================================================================

/// Record a take
///
/// Every field is optional at the wire level so that the service can report
/// all missing fields at once.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct CreateTransactionRequest {
    #[validate(length(max = 16, message = "user_id must be at most 16 characters"))]
    pub user_id: Option<String>,

    pub product_id: Option<i64>,

    pub quantity_taken: Option<i32>,
}

// ============================================================================
// Vendor Requests
// ============================================================================

/// Create or replace a vendor
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct VendorRequest {
    #[validate(length(min = 1, max = 255, message = "Vendor name must be 1-255 characters"))]
    pub vendor_name: String,

    #[validate(length(max = 255))]
    pub contact_person: Option<String>,

    pub address: Option<String>,

    #[validate(length(max = 50))]
    pub phone: Option<String>,

    #[validate(email(message = "Invalid email format"))]
    pub email: Option<String>,
}

// ============================================================================
// User Requests
// ============================================================================

/// Register a user
///
/// `user_id` may be assigned by the caller; otherwise one is generated from
/// the initials. New users always get the `user` role.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateUserRequest {
    #[validate(length(min = 1, max = 16, message = "user_id must be 1-16 characters"))]
    pub user_id: Option<String>,

    #[validate(length(min = 1, max = 100, message = "First name must be 1-100 characters"))]
    pub first_name: String,

    #[validate(length(min = 1, max = 100, message = "Last name must be 1-100 characters"))]
    pub last_name: String,

    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    pub status: String,
}

/// Replace a user's profile
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateUserRequest {
    #[validate(length(min = 1, max = 100, message = "First name must be 1-100 characters"))]
    pub first_name: String,

    #[validate(length(min = 1, max = 100, message = "Last name must be 1-100 characters"))]
    pub last_name: String,

    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    pub status: String,

    /// Keeps the current role when absent
    pub role: Option<String>,
}

// ============================================================================
// Item Requests
// ============================================================================

/// Create or replace an item
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct ItemRequest {
    #[validate(length(min = 1, max = 255, message = "Product name must be 1-255 characters"))]
    pub product_name: String,

    #[serde(rename = "type")]
    #[validate(length(min = 1, max = 100, message = "Type must be 1-100 characters"))]
    pub item_type: String,

    #[validate(range(min = 1, message = "vendor_id must be positive"))]
    pub vendor_id: i64,

    #[validate(range(min = 0, message = "Quantity cannot be negative"))]
    pub quantity: Option<i32>,

    #[validate(range(min = 0.0, message = "Weight cannot be negative"))]
    pub weight: Option<f64>,
}

/// Low-stock thresholds from the query string
///
/// An empty value (`?quantity=&weight=2`) counts as absent.
#[derive(Debug, Clone, Copy, Default, Deserialize, Validate)]
pub struct LowStockParams {
    #[serde(default, deserialize_with = "empty_as_none")]
    #[validate(range(min = 0, message = "Quantity threshold cannot be negative"))]
    pub quantity: Option<i32>,

    #[serde(default, deserialize_with = "empty_as_none")]
    #[validate(range(min = 0.0, message = "Weight threshold cannot be negative"))]
    pub weight: Option<f64>,
}

fn empty_as_none<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr,
    T::Err: Display,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(value) => value.parse().map(Some).map_err(de::Error::custom),
    }
}
