//! Error handling utilities for repositories

use pantry_core::DomainError;
use sqlx::Error as SqlxError;

pub const USERS_PKEY: &str = "users_pkey";
pub const USERS_EMAIL_KEY: &str = "users_email_key";

/// Convert SQLx error to DomainError
pub fn map_db_error(e: SqlxError) -> DomainError {
    DomainError::StorageError(e.to_string())
}

/// Map a unique violation to a domain error chosen by constraint name
///
/// Violations of constraints `on_unique` does not recognize, and every other
/// error, become storage errors.
pub fn map_unique_violation<F>(e: SqlxError, on_unique: F) -> DomainError
where
    F: FnOnce(Option<&str>) -> Option<DomainError>,
{
    if let Some(db_err) = e.as_database_error() {
        if db_err.is_unique_violation() {
            if let Some(mapped) = on_unique(db_err.constraint()) {
                return mapped;
            }
        }
    }
    map_db_error(e)
}

/// Map a foreign key violation to a domain error, anything else to storage
pub fn map_foreign_key_violation<F>(e: SqlxError, on_fk: F) -> DomainError
where
    F: FnOnce() -> DomainError,
{
    if is_foreign_key_violation(&e) {
        return on_fk();
    }
    map_db_error(e)
}

pub fn is_foreign_key_violation(e: &SqlxError) -> bool {
    e.as_database_error()
        .is_some_and(|db_err| db_err.is_foreign_key_violation())
}

/// Unique violations raised by inserting or updating a user row
pub fn user_unique_violation(user_id: &str) -> impl FnOnce(Option<&str>) -> Option<DomainError> + '_ {
    move |constraint: Option<&str>| match constraint {
        Some(USERS_PKEY) => Some(DomainError::UserIdTaken(user_id.to_string())),
        Some(USERS_EMAIL_KEY) => Some(DomainError::EmailAlreadyExists),
        _ => None,
    }
}
