//! PostgreSQL implementation of UserRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use pantry_core::{NewUser, RepoResult, User, UserRepository, UserUpdate};

use crate::models::UserModel;

use super::error::{
    map_db_error, map_foreign_key_violation, map_unique_violation, user_unique_violation,
};

const USER_COLUMNS: &str = "user_id, first_name, last_name, email, user_status, role, created_at";

/// PostgreSQL implementation of UserRepository
#[derive(Clone)]
pub struct PgUserRepository {
    pool: PgPool,
}

impl PgUserRepository {
    /// Create a new PgUserRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserRepository for PgUserRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, user_id: &str) -> RepoResult<Option<User>> {
        let result = sqlx::query_as::<_, UserModel>(&format!(
            "SELECT {USER_COLUMNS} FROM users WHERE user_id = $1"
        ))
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        result.map(User::try_from).transpose()
    }

    #[instrument(skip(self))]
    async fn list(&self) -> RepoResult<Vec<User>> {
        let rows = sqlx::query_as::<_, UserModel>(&format!(
            "SELECT {USER_COLUMNS} FROM users ORDER BY created_at DESC, user_id"
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        rows.into_iter().map(User::try_from).collect()
    }

    #[instrument(skip(self, user), fields(user_id = %user.user_id))]
    async fn create(&self, user: &NewUser) -> RepoResult<User> {
        let row = sqlx::query_as::<_, UserModel>(&format!(
            r"
            INSERT INTO users (user_id, first_name, last_name, email, user_status, role)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING {USER_COLUMNS}
            "
        ))
        .bind(&user.user_id)
        .bind(&user.first_name)
        .bind(&user.last_name)
        .bind(&user.email)
        .bind(user.status.as_str())
        .bind(user.role.as_str())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_unique_violation(e, user_unique_violation(&user.user_id)))?;

        User::try_from(row)
    }

    #[instrument(skip(self, update))]
    async fn update(&self, user_id: &str, update: &UserUpdate) -> RepoResult<Option<User>> {
        let row = sqlx::query_as::<_, UserModel>(&format!(
            r"
            UPDATE users
            SET first_name = $2, last_name = $3, email = $4, user_status = $5, role = $6
            WHERE user_id = $1
            RETURNING {USER_COLUMNS}
            "
        ))
        .bind(user_id)
        .bind(&update.first_name)
        .bind(&update.last_name)
        .bind(&update.email)
        .bind(update.status.as_str())
        .bind(update.role.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| map_unique_violation(e, user_unique_violation(user_id)))?;

        row.map(User::try_from).transpose()
    }

    #[instrument(skip(self))]
    async fn delete(&self, user_id: &str) -> RepoResult<bool> {
        let result = sqlx::query("DELETE FROM users WHERE user_id = $1")
            .bind(user_id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                map_foreign_key_violation(e, || {
                    pantry_core::DomainError::UserHasTransactions(user_id.to_string())
                })
            })?;

        Ok(result.rows_affected() > 0)
    }
}
