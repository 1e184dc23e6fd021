//! User status resolution
//!
//! Resolves the status that gets snapshotted onto a take.

use pantry_core::{DomainError, UserStatus};
use tracing::{instrument, warn};

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Looks up a user and resolves their canonical status
pub struct StatusResolver<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> StatusResolver<'a> {
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Resolve the status of `user_id`
    ///
    /// # Errors
    /// `UserNotFound` for an unknown user, `StatusMissing` when the stored
    /// status is absent or blank, `InvalidStatus` when it is not recognized.
    #[instrument(skip(self))]
    pub async fn resolve(&self, user_id: &str) -> ServiceResult<UserStatus> {
        let user = self
            .ctx
            .user_repo()
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| DomainError::UserNotFound(user_id.to_string()))?;

        user.resolved_status().map_err(|e| {
            warn!(user_id = %user_id, error = %e, "User status cannot be resolved");
            e.into()
        })
    }
}
