//! User service
//!
//! Registration with generated identifiers, profile management.

use pantry_core::{generate_user_id, DomainError, NewUser, UserRole, UserStatus, UserUpdate};
use tracing::{info, instrument, warn};

use crate::dto::{CreateUserRequest, UpdateUserRequest, UserResponse};

use super::context::ServiceContext;
use super::error::ServiceResult;

/// User service
pub struct UserService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> UserService<'a> {
    /// Create a new UserService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    #[instrument(skip(self))]
    pub async fn list(&self) -> ServiceResult<Vec<UserResponse>> {
        let users = self.ctx.user_repo().list().await?;
        Ok(users.into_iter().map(UserResponse::from).collect())
    }

    #[instrument(skip(self))]
    pub async fn get(&self, user_id: &str) -> ServiceResult<UserResponse> {
        let user = self
            .ctx
            .user_repo()
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| DomainError::UserNotFound(user_id.to_string()))?;

        Ok(UserResponse::from(user))
    }

    /// Register a user
    ///
    /// Without a caller-assigned ID, one is generated from the initials and
    /// inserted under the context's [`pantry_core::IdRetryPolicy`]. A
    /// caller-assigned ID is inserted once; a collision is a conflict.
    #[instrument(skip(self, request), fields(email = %request.email))]
    pub async fn register(&self, request: CreateUserRequest) -> ServiceResult<UserResponse> {
        let status: UserStatus = request.status.parse()?;
        let first_name = request.first_name.trim().to_string();
        let last_name = request.last_name.trim().to_string();

        let template = NewUser {
            user_id: String::new(),
            first_name,
            last_name,
            email: request.email.trim().to_string(),
            status,
            role: UserRole::User,
        };

        let repo = self.ctx.user_repo();
        let user = match request.user_id.map(|id| id.trim().to_string()) {
            Some(user_id) if !user_id.is_empty() => {
                repo.create(&template.with_user_id(user_id)).await?
            }
            _ => {
                let base = generate_user_id(&template.first_name, &template.last_name)?;
                self.ctx
                    .id_retry_policy()
                    .run(&base, |candidate| {
                        let new_user = template.with_user_id(candidate);
                        async move { repo.create(&new_user).await }
                    })
                    .await
                    .inspect_err(|e| {
                        if matches!(e, DomainError::UserIdExhausted { .. }) {
                            warn!(base = %base, "User ID collisions exhausted the retry policy");
                        }
                    })?
            }
        };

        info!(user_id = %user.user_id, status = %status, "User registered");

        Ok(UserResponse::from(user))
    }

    /// Replace a user's profile; the role is kept unless one is given
    #[instrument(skip(self, request))]
    pub async fn update(
        &self,
        user_id: &str,
        request: UpdateUserRequest,
    ) -> ServiceResult<UserResponse> {
        let status: UserStatus = request.status.parse()?;

        let role = match request.role {
            Some(raw) => raw.parse::<UserRole>()?,
            None => {
                self.ctx
                    .user_repo()
                    .find_by_id(user_id)
                    .await?
                    .ok_or_else(|| DomainError::UserNotFound(user_id.to_string()))?
                    .role
            }
        };

        let changes = UserUpdate {
            first_name: request.first_name.trim().to_string(),
            last_name: request.last_name.trim().to_string(),
            email: request.email.trim().to_string(),
            status,
            role,
        };

        let user = self
            .ctx
            .user_repo()
            .update(user_id, &changes)
            .await?
            .ok_or_else(|| DomainError::UserNotFound(user_id.to_string()))?;

        info!(user_id = %user.user_id, role = %user.role.as_str(), "User updated");

        Ok(UserResponse::from(user))
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, user_id: &str) -> ServiceResult<()> {
        if !self.ctx.user_repo().delete(user_id).await? {
            return Err(DomainError::UserNotFound(user_id.to_string()).into());
        }

        info!(user_id = %user_id, "User deleted");
        Ok(())
    }
}
