//! Item service
//!
//! Stock CRUD and the low-stock listing.

use pantry_core::{DomainError, LowStockQuery, NewItem};
use tracing::{info, instrument};

use crate::dto::{ItemRequest, ItemResponse, LowStockParams};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Item service
pub struct ItemService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> ItemService<'a> {
    /// Create a new ItemService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    #[instrument(skip(self))]
    pub async fn list(&self) -> ServiceResult<Vec<ItemResponse>> {
        let items = self.ctx.item_repo().list().await?;
        Ok(items.into_iter().map(ItemResponse::from).collect())
    }

    #[instrument(skip(self))]
    pub async fn get(&self, product_id: i64) -> ServiceResult<ItemResponse> {
        let item = self
            .ctx
            .item_repo()
            .find_by_id(product_id)
            .await?
            .ok_or(DomainError::ItemNotFound(product_id))?;

        Ok(ItemResponse::from(item))
    }

    /// Create an item; the vendor must exist
    #[instrument(skip(self, request))]
    pub async fn create(&self, request: ItemRequest) -> ServiceResult<ItemResponse> {
        let new_item = new_item(request)?;
        let item = self.ctx.item_repo().create(&new_item).await?;

        info!(
            product_id = item.product_id,
            vendor_id = item.vendor_id,
            product_name = %item.product_name,
            "Item created"
        );

        Ok(ItemResponse::from(item))
    }

    #[instrument(skip(self, request))]
    pub async fn update(&self, product_id: i64, request: ItemRequest) -> ServiceResult<ItemResponse> {
        let changes = new_item(request)?;
        let item = self
            .ctx
            .item_repo()
            .update(product_id, &changes)
            .await?
            .ok_or(DomainError::ItemNotFound(product_id))?;

        info!(product_id, "Item updated");

        Ok(ItemResponse::from(item))
    }

    /// Delete an item that has no recorded takes
    #[instrument(skip(self))]
    pub async fn delete(&self, product_id: i64) -> ServiceResult<()> {
        if !self.ctx.item_repo().delete(product_id).await? {
            return Err(DomainError::ItemNotFound(product_id).into());
        }

        info!(product_id, "Item deleted");
        Ok(())
    }

    /// Items at or below either threshold
    #[instrument(skip(self))]
    pub async fn low_stock(&self, params: LowStockParams) -> ServiceResult<Vec<ItemResponse>> {
        if params.quantity.is_none() && params.weight.is_none() {
            return Err(ServiceError::validation("At least one threshold is required"));
        }

        let items = self
            .ctx
            .item_repo()
            .find_low_stock(LowStockQuery {
                quantity: params.quantity,
                weight: params.weight,
            })
            .await?;

        Ok(items.into_iter().map(ItemResponse::from).collect())
    }
}

fn new_item(request: ItemRequest) -> Result<NewItem, DomainError> {
    let product_name = request.product_name.trim();
    let item_type = request.item_type.trim();
    if product_name.is_empty() || item_type.is_empty() {
        return Err(DomainError::ValidationError(
            "product_name and type must not be blank".to_string(),
        ));
    }

    Ok(NewItem {
        product_name: product_name.to_string(),
        item_type: item_type.to_string(),
        vendor_id: request.vendor_id,
        quantity: request.quantity,
        weight: request.weight,
    })
}
