//! User model -> entity mapper

use pantry_core::{DomainError, User};

use crate::models::UserModel;

/// The role column is constrained to known roles, so a parse failure means
/// the schema and the domain have drifted apart.
impl TryFrom<UserModel> for User {
    type Error = DomainError;

    fn try_from(model: UserModel) -> Result<Self, Self::Error> {
        Ok(User {
            role: model.role.parse()?,
            user_id: model.user_id,
            first_name: model.first_name,
            last_name: model.last_name,
            email: model.email,
            status: model.user_status,
            created_at: model.created_at,
        })
    }
}
