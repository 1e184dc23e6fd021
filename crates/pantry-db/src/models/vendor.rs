//! Vendor database model

use sqlx::FromRow;

/// Database model for vendors table
#[derive(Debug, Clone, FromRow)]
pub struct VendorModel {
    pub vendor_id: i64,
    pub vendor_name: String,
    pub contact_person: Option<String>,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
}
