//! Domain errors - error types for the domain layer

use thiserror::Error;

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    // =========================================================================
    // Not Found Errors
    // =========================================================================
    #[error("User not found: {0}")]
    UserNotFound(String),

    #[error("Item not found: {0}")]
    ItemNotFound(i64),

    #[error("Vendor not found: {0}")]
    VendorNotFound(i64),

    // =========================================================================
    // Validation Errors
    // =========================================================================
    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("All fields are required: {}", .0.join(", "))]
    MissingFields(Vec<&'static str>),

    #[error("User status is missing")]
    StatusMissing,

    #[error("Unrecognized user status: {0} (expected undergraduate or graduate)")]
    InvalidStatus(String),

    #[error("Unrecognized user role: {0} (expected user or admin)")]
    InvalidRole(String),

    // =========================================================================
    // Conflict Errors
    // =========================================================================
    #[error(
        "This vendor has {count} items associated with it. \
         Please remove or reassign these items before deleting the vendor."
    )]
    VendorHasItems { vendor_id: i64, count: i64 },

    #[error("Item {0} has recorded transactions and cannot be deleted")]
    ItemHasTransactions(i64),

    #[error("User {0} has recorded transactions and cannot be deleted")]
    UserHasTransactions(String),

    #[error("User ID already in use: {0}")]
    UserIdTaken(String),

    #[error("Email already in use")]
    EmailAlreadyExists,

    // =========================================================================
    // Infrastructure Errors (wrapped)
    // =========================================================================
    #[error("Could not allocate a unique user ID after {attempts} attempts")]
    UserIdExhausted { attempts: u8 },

    #[error("Storage error: {0}")]
    StorageError(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl DomainError {
    /// Get an error code string for API responses
    pub fn code(&self) -> &'static str {
        match self {
            // Not Found
            Self::UserNotFound(_) => "UNKNOWN_USER",
            Self::ItemNotFound(_) => "UNKNOWN_ITEM",
            Self::VendorNotFound(_) => "UNKNOWN_VENDOR",

            // Validation
            Self::ValidationError(_) => "VALIDATION_ERROR",
            Self::MissingFields(_) => "MISSING_FIELDS",
            Self::StatusMissing => "STATUS_MISSING",
            Self::InvalidStatus(_) => "INVALID_STATUS",
            Self::InvalidRole(_) => "INVALID_ROLE",

            // Conflict
            Self::VendorHasItems { .. } => "VENDOR_HAS_ITEMS",
            Self::ItemHasTransactions(_) => "ITEM_HAS_TRANSACTIONS",
            Self::UserHasTransactions(_) => "USER_HAS_TRANSACTIONS",
            Self::UserIdTaken(_) => "USER_ID_TAKEN",
            Self::EmailAlreadyExists => "EMAIL_ALREADY_EXISTS",

            // Infrastructure
            Self::UserIdExhausted { .. } => "USER_ID_EXHAUSTED",
            Self::StorageError(_) => "STORAGE_ERROR",
            Self::InternalError(_) => "INTERNAL_ERROR",
        }
    }

    /// Short human-readable summary, used as the `error` field of API responses
    pub fn summary(&self) -> &'static str {
        match self {
            Self::UserNotFound(_) => "User not found",
            Self::ItemNotFound(_) => "Item not found",
            Self::VendorNotFound(_) => "Vendor not found",
            Self::MissingFields(_) => "Missing required fields",
            Self::StatusMissing => "User status is missing",
            Self::ValidationError(_) | Self::InvalidStatus(_) | Self::InvalidRole(_) => {
                "Validation failed"
            }
            Self::VendorHasItems { .. } => "Vendor has associated items",
            Self::ItemHasTransactions(_) => "Item has recorded transactions",
            Self::UserHasTransactions(_) => "User has recorded transactions",
            Self::UserIdTaken(_) => "User ID already in use",
            Self::EmailAlreadyExists => "Email already in use",
            Self::UserIdExhausted { .. } => "Failed to register user",
            Self::StorageError(_) => "Storage error",
            Self::InternalError(_) => "Internal error",
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::UserNotFound(_) | Self::ItemNotFound(_) | Self::VendorNotFound(_)
        )
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::ValidationError(_)
                | Self::MissingFields(_)
                | Self::StatusMissing
                | Self::InvalidStatus(_)
                | Self::InvalidRole(_)
        )
    }

    /// Check if this is a conflict error
    pub fn is_conflict(&self) -> bool {
        matches!(
            self,
            Self::VendorHasItems { .. }
                | Self::ItemHasTransactions(_)
                | Self::UserHasTransactions(_)
                | Self::UserIdTaken(_)
                | Self::EmailAlreadyExists
        )
    }

    /// Check if this error originated in the store (or the store-backed retry path)
    pub fn is_storage(&self) -> bool {
        matches!(self, Self::StorageError(_) | Self::UserIdExhausted { .. })
    }
}
