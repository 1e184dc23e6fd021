//! User database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for users table
#[derive(Debug, Clone, FromRow)]
pub struct UserModel {
    pub user_id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub user_status: Option<String>,
    pub role: String,
    pub created_at: DateTime<Utc>,
}
