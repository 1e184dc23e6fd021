//! Vendor service
//!
//! Vendor CRUD plus the referential guard on deletion.

use pantry_core::{normalize_vendor_name, DomainError, NewVendor, VendorDeletion};
use tracing::{info, instrument, warn};

use crate::dto::{ItemResponse, VendorDeletedResponse, VendorRequest, VendorResponse};

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Vendor service
pub struct VendorService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> VendorService<'a> {
    /// Create a new VendorService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    #[instrument(skip(self))]
    pub async fn list(&self) -> ServiceResult<Vec<VendorResponse>> {
        let vendors = self.ctx.vendor_repo().list().await?;
        Ok(vendors.into_iter().map(VendorResponse::from).collect())
    }

    #[instrument(skip(self))]
    pub async fn get(&self, vendor_id: i64) -> ServiceResult<VendorResponse> {
        let vendor = self
            .ctx
            .vendor_repo()
            .find_by_id(vendor_id)
            .await?
            .ok_or(DomainError::VendorNotFound(vendor_id))?;

        Ok(VendorResponse::from(vendor))
    }

    #[instrument(skip(self, request))]
    pub async fn create(&self, request: VendorRequest) -> ServiceResult<VendorResponse> {
        let new_vendor = new_vendor(request)?;
        let vendor = self.ctx.vendor_repo().create(&new_vendor).await?;

        info!(vendor_id = vendor.vendor_id, vendor_name = %vendor.vendor_name, "Vendor created");

        Ok(VendorResponse::from(vendor))
    }

    #[instrument(skip(self, request))]
    pub async fn update(
        &self,
        vendor_id: i64,
        request: VendorRequest,
    ) -> ServiceResult<VendorResponse> {
        let changes = new_vendor(request)?;
        let vendor = self
            .ctx
            .vendor_repo()
            .update(vendor_id, &changes)
            .await?
            .ok_or(DomainError::VendorNotFound(vendor_id))?;

        info!(vendor_id, "Vendor updated");

        Ok(VendorResponse::from(vendor))
    }

    /// Delete a vendor that no item references
    ///
    /// Dependents are counted before existence is checked, so an unknown
    /// vendor is only reported once it is known to have no items.
    #[instrument(skip(self))]
    pub async fn delete(&self, vendor_id: i64) -> ServiceResult<VendorDeletedResponse> {
        match self.ctx.vendor_repo().delete_if_unreferenced(vendor_id).await? {
            VendorDeletion::Deleted => {
                info!(vendor_id, "Vendor deleted");
                Ok(VendorDeletedResponse::new())
            }
            VendorDeletion::HasItems(count) => {
                warn!(vendor_id, count, "Vendor deletion blocked by items");
                Err(DomainError::VendorHasItems { vendor_id, count }.into())
            }
            VendorDeletion::NotFound => Err(DomainError::VendorNotFound(vendor_id).into()),
        }
    }

    /// Items supplied by a vendor
    #[instrument(skip(self))]
    pub async fn items(&self, vendor_id: i64) -> ServiceResult<Vec<ItemResponse>> {
        if self.ctx.vendor_repo().find_by_id(vendor_id).await?.is_none() {
            return Err(DomainError::VendorNotFound(vendor_id).into());
        }

        let items = self.ctx.item_repo().find_by_vendor(vendor_id).await?;
        Ok(items.into_iter().map(ItemResponse::from).collect())
    }
}

fn new_vendor(request: VendorRequest) -> Result<NewVendor, DomainError> {
    Ok(NewVendor {
        vendor_name: normalize_vendor_name(&request.vendor_name)?,
        contact_person: non_blank(request.contact_person),
        address: non_blank(request.address),
        phone: non_blank(request.phone),
        email: non_blank(request.email),
    })
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
