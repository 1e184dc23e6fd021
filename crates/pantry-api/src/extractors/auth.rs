//! Admin authentication extractor
//!
//! Extracts a bearer token from the Authorization header and requires the
//! admin role before the handler runs.

use axum::{
    async_trait,
    extract::{FromRef, FromRequestParts},
    http::request::Parts,
};
use axum_extra::{
    headers::{authorization::Bearer, Authorization},
    TypedHeader,
};
use pantry_common::Claims;

use crate::response::ApiError;
use crate::state::AppState;

/// Caller holding a valid admin token
#[derive(Debug, Clone)]
pub struct AdminUser {
    /// User ID from the token subject
    pub user_id: String,
}

impl From<Claims> for AdminUser {
    fn from(claims: Claims) -> Self {
        Self { user_id: claims.sub }
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for AdminUser
where
    S: Send + Sync,
    AppState: FromRef<S>,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let TypedHeader(Authorization(bearer)) =
            TypedHeader::<Authorization<Bearer>>::from_request_parts(parts, state)
                .await
                .map_err(|_| ApiError::MissingAuth)?;

        let app_state = AppState::from_ref(state);

        let claims = app_state
            .jwt_service()
            .validate_admin_token(bearer.token())
            .map_err(|e| {
                tracing::warn!(error = %e, "Admin token rejected");
                ApiError::App(e)
            })?;

        Ok(AdminUser::from(claims))
    }
}
