//! Item handlers

use axum::{extract::State, Json};
use pantry_service::{ItemRequest, ItemResponse, ItemService, LowStockParams};

use crate::extractors::{AdminUser, IdPath, ValidatedJson, ValidatedQuery};
use crate::response::{ApiResult, Created, NoContent};
use crate::state::AppState;

/// GET /api/items
pub async fn list_items(State(state): State<AppState>) -> ApiResult<Json<Vec<ItemResponse>>> {
    let service = ItemService::new(state.service_context());
    Ok(Json(service.list().await?))
}

/// POST /api/items
pub async fn create_item(
    State(state): State<AppState>,
    _admin: AdminUser,
    ValidatedJson(request): ValidatedJson<ItemRequest>,
) -> ApiResult<Created<Json<ItemResponse>>> {
    let service = ItemService::new(state.service_context());
    Ok(Created(Json(service.create(request).await?)))
}

/// Items at or below the given thresholds
///
/// GET /api/items/low-stock?quantity=&weight=
pub async fn low_stock(
    State(state): State<AppState>,
    _admin: AdminUser,
    ValidatedQuery(params): ValidatedQuery<LowStockParams>,
) -> ApiResult<Json<Vec<ItemResponse>>> {
    let service = ItemService::new(state.service_context());
    Ok(Json(service.low_stock(params).await?))
}

/// GET /api/items/{product_id}
pub async fn get_item(
    State(state): State<AppState>,
    IdPath(product_id): IdPath,
) -> ApiResult<Json<ItemResponse>> {
    let service = ItemService::new(state.service_context());
    Ok(Json(service.get(product_id).await?))
}

/// PUT /api/items/{product_id}
pub async fn update_item(
    State(state): State<AppState>,
    _admin: AdminUser,
    IdPath(product_id): IdPath,
    ValidatedJson(request): ValidatedJson<ItemRequest>,
) -> ApiResult<Json<ItemResponse>> {
    let service = ItemService::new(state.service_context());
    Ok(Json(service.update(product_id, request).await?))
}

/// DELETE /api/items/{product_id}
pub async fn delete_item(
    State(state): State<AppState>,
    _admin: AdminUser,
    IdPath(product_id): IdPath,
) -> ApiResult<NoContent> {
    let service = ItemService::new(state.service_context());
    service.delete(product_id).await?;
    Ok(NoContent)
}
