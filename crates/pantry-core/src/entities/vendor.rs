//! Vendor entity - a supplier that owns pantry items

use crate::error::DomainError;

/// Vendor entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vendor {
    pub vendor_id: i64,
    pub vendor_name: String,
    pub contact_person: Option<String>,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
}

/// Values for inserting or updating a vendor
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewVendor {
    pub vendor_name: String,
    pub contact_person: Option<String>,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
}

/// Trim a vendor name, rejecting names that are empty afterwards
pub fn normalize_vendor_name(name: &str) -> Result<String, DomainError> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(DomainError::ValidationError("Vendor name is required".to_string()));
    }
    Ok(trimmed.to_string())
}
