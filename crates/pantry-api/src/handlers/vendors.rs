//! Vendor handlers

use axum::{extract::State, Json};
use pantry_service::{
    ItemResponse, VendorDeletedResponse, VendorRequest, VendorResponse, VendorService,
};

use crate::extractors::{AdminUser, IdPath, ValidatedJson};
use crate::response::{ApiResult, Created};
use crate::state::AppState;

/// GET /api/vendors
pub async fn list_vendors(State(state): State<AppState>) -> ApiResult<Json<Vec<VendorResponse>>> {
    let service = VendorService::new(state.service_context());
    Ok(Json(service.list().await?))
}

/// POST /api/vendors
pub async fn create_vendor(
    State(state): State<AppState>,
    _admin: AdminUser,
    ValidatedJson(request): ValidatedJson<VendorRequest>,
) -> ApiResult<Created<Json<VendorResponse>>> {
    let service = VendorService::new(state.service_context());
    Ok(Created(Json(service.create(request).await?)))
}

/// GET /api/vendors/{vendor_id}
pub async fn get_vendor(
    State(state): State<AppState>,
    IdPath(vendor_id): IdPath,
) -> ApiResult<Json<VendorResponse>> {
    let service = VendorService::new(state.service_context());
    Ok(Json(service.get(vendor_id).await?))
}

/// PUT /api/vendors/{vendor_id}
pub async fn update_vendor(
    State(state): State<AppState>,
    _admin: AdminUser,
    IdPath(vendor_id): IdPath,
    ValidatedJson(request): ValidatedJson<VendorRequest>,
) -> ApiResult<Json<VendorResponse>> {
    let service = VendorService::new(state.service_context());
    Ok(Json(service.update(vendor_id, request).await?))
}

/// Delete a vendor that has no items
///
/// DELETE /api/vendors/{vendor_id}
pub async fn delete_vendor(
    State(state): State<AppState>,
    _admin: AdminUser,
    IdPath(vendor_id): IdPath,
) -> ApiResult<Json<VendorDeletedResponse>> {
    let service = VendorService::new(state.service_context());
    Ok(Json(service.delete(vendor_id).await?))
}

/// GET /api/vendors/{vendor_id}/items
pub async fn list_vendor_items(
    State(state): State<AppState>,
    IdPath(vendor_id): IdPath,
) -> ApiResult<Json<Vec<ItemResponse>>> {
    let service = VendorService::new(state.service_context());
    Ok(Json(service.items(vendor_id).await?))
}
