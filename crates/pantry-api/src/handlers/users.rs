//! User handlers
//!
//! Registration is open; listing and profile changes need an admin token.

use axum::{
    extract::{Path, State},
    Json,
};
use pantry_service::{CreateUserRequest, UpdateUserRequest, UserResponse, UserService};

use crate::extractors::{AdminUser, ValidatedJson};
use crate::response::{ApiResult, Created, NoContent};
use crate::state::AppState;

/// GET /api/users
pub async fn list_users(
    State(state): State<AppState>,
    _admin: AdminUser,
) -> ApiResult<Json<Vec<UserResponse>>> {
    let service = UserService::new(state.service_context());
    Ok(Json(service.list().await?))
}

/// Register a user, generating an ID when none is given
///
/// POST /api/users
pub async fn register_user(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<CreateUserRequest>,
) -> ApiResult<Created<Json<UserResponse>>> {
    let service = UserService::new(state.service_context());
    Ok(Created(Json(service.register(request).await?)))
}

/// GET /api/users/{user_id}
pub async fn get_user(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> ApiResult<Json<UserResponse>> {
    let service = UserService::new(state.service_context());
    Ok(Json(service.get(&user_id).await?))
}

/// PUT /api/users/{user_id}
pub async fn update_user(
    State(state): State<AppState>,
    _admin: AdminUser,
    Path(user_id): Path<String>,
    ValidatedJson(request): ValidatedJson<UpdateUserRequest>,
) -> ApiResult<Json<UserResponse>> {
    let service = UserService::new(state.service_context());
    Ok(Json(service.update(&user_id, request).await?))
}

/// DELETE /api/users/{user_id}
pub async fn delete_user(
    State(state): State<AppState>,
    _admin: AdminUser,
    Path(user_id): Path<String>,
) -> ApiResult<NoContent> {
    let service = UserService::new(state.service_context());
    service.delete(&user_id).await?;
    Ok(NoContent)
}
