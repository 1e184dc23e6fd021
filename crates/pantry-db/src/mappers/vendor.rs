//! Vendor model -> entity mapper

use pantry_core::Vendor;

use crate::models::VendorModel;

impl From<VendorModel> for Vendor {
    fn from(model: VendorModel) -> Self {
        Vendor {
            vendor_id: model.vendor_id,
            vendor_name: model.vendor_name,
            contact_person: model.contact_person,
            address: model.address,
            phone: model.phone,
            email: model.email,
        }
    }
}
