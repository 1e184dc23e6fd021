//! Transaction handlers
//!
//! Recording takes, history, and the aggregate reports.

use axum::{
    extract::{Path, State},
    Json,
};
use pantry_service::{
    CreateTransactionRequest, MostTakenItemResponse, ReportService, StudentCountsResponse,
    TransactionCreatedResponse, TransactionResponse, TransactionService,
};

use crate::extractors::{AdminUser, ValidatedJson};
use crate::response::{ApiResult, Created};
use crate::state::AppState;

/// Record a take
///
/// POST /api/transactions
pub async fn create_transaction(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<CreateTransactionRequest>,
) -> ApiResult<Created<Json<TransactionCreatedResponse>>> {
    let service = TransactionService::new(state.service_context());
    let response = service.record(request).await?;
    Ok(Created(Json(response)))
}

/// All transactions, newest first
///
/// GET /api/transactions
pub async fn list_transactions(
    State(state): State<AppState>,
    _admin: AdminUser,
) -> ApiResult<Json<Vec<TransactionResponse>>> {
    let service = TransactionService::new(state.service_context());
    Ok(Json(service.list().await?))
}

/// Takes of one user
///
/// GET /api/transactions/user/{user_id}
pub async fn list_user_transactions(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> ApiResult<Json<Vec<TransactionResponse>>> {
    let service = TransactionService::new(state.service_context());
    Ok(Json(service.list_for_user(&user_id).await?))
}

/// Ranked most-taken items
///
/// GET /api/transactions/most-taken
pub async fn most_taken(
    State(state): State<AppState>,
    _admin: AdminUser,
) -> ApiResult<Json<Vec<MostTakenItemResponse>>> {
    let service = ReportService::new(state.service_context());
    Ok(Json(service.most_taken().await?))
}

/// Unique students per status
///
/// GET /api/transactions/unique-students
pub async fn unique_students(
    State(state): State<AppState>,
    _admin: AdminUser,
) -> ApiResult<Json<StudentCountsResponse>> {
    let service = ReportService::new(state.service_context());
    Ok(Json(service.unique_students().await?))
}
