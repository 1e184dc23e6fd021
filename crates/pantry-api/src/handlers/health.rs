//! Health check handlers
//!
//! Liveness text at the root and a database connectivity check.

use axum::{extract::State, http::StatusCode, Json};
use pantry_service::HealthResponse;
use tracing::warn;

use crate::state::AppState;

/// Liveness probe
///
/// GET /
pub async fn root() -> &'static str {
    "API is up and running"
}

/// Readiness check with database connectivity
///
/// GET /api/health
pub async fn health_check(State(state): State<AppState>) -> (StatusCode, Json<HealthResponse>) {
    let db_healthy = match sqlx::query("SELECT 1").execute(state.pool()).await {
        Ok(_) => true,
        Err(e) => {
            warn!(error = %e, "Database health check failed");
            false
        }
    };

    let response = HealthResponse::from_checks(db_healthy);
    let status = if response.is_healthy() {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    (status, Json(response))
}
