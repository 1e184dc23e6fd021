//! User entity - a person who takes items from the pantry

use chrono::{DateTime, Utc};

use crate::value_objects::{UserRole, UserStatus};

/// User entity as stored
///
/// `status` is kept exactly as the store holds it; callers resolve it with
/// [`User::resolved_status`] so a missing or legacy value is caught rather
/// than defaulted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub user_id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub status: Option<String>,
    pub role: UserRole,
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Full display name
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Resolve the stored status into its canonical form
    pub fn resolved_status(&self) -> Result<UserStatus, crate::DomainError> {
        UserStatus::resolve(self.status.as_deref())
    }

    #[inline]
    pub fn is_admin(&self) -> bool {
        self.role.is_admin()
    }
}

/// Values for inserting a new user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub user_id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub status: UserStatus,
    pub role: UserRole,
}

impl NewUser {
    /// Same user with a different ID (used when retrying a colliding insert)
    pub fn with_user_id(&self, user_id: String) -> Self {
        Self {
            user_id,
            ..self.clone()
        }
    }
}

/// Values for updating an existing user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserUpdate {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub status: UserStatus,
    pub role: UserRole,
}
