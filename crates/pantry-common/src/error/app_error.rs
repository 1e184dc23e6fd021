//! Application error types
//!
//! Errors raised outside the domain: startup, configuration and token checks.

use serde::Serialize;

/// Application-wide error type
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    // Authentication errors
    #[error("Invalid token")]
    InvalidToken,

    #[error("Token expired")]
    TokenExpired,

    #[error("Admin access required")]
    InsufficientPermissions,

    // Database errors
    #[error("Database error: {0}")]
    Database(String),

    // Internal errors
    #[error("Internal server error")]
    Internal(#[source] anyhow::Error),

    // Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),
}

impl AppError {
    /// Get HTTP status code for this error
    #[must_use]
    pub fn status_code(&self) -> u16 {
        match self {
            // 401 Unauthorized
            Self::InvalidToken | Self::TokenExpired => 401,

            // 403 Forbidden
            Self::InsufficientPermissions => 403,

            // 500 Internal Server Error
            Self::Database(_) | Self::Internal(_) | Self::Config(_) => 500,
        }
    }

    /// Get error code for API responses
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidToken => "INVALID_TOKEN",
            Self::TokenExpired => "TOKEN_EXPIRED",
            Self::InsufficientPermissions => "INSUFFICIENT_PERMISSIONS",
            Self::Database(_) => "DATABASE_ERROR",
            Self::Internal(_) => "INTERNAL_ERROR",
            Self::Config(_) => "CONFIG_ERROR",
        }
    }

    /// Short human-readable summary for the `error` field of responses
    #[must_use]
    pub fn summary(&self) -> &'static str {
        match self {
            Self::InvalidToken | Self::TokenExpired => "Unauthorized",
            Self::InsufficientPermissions => "Forbidden",
            Self::Database(_) | Self::Internal(_) | Self::Config(_) => "Internal server error",
        }
    }
}

/// Error response structure for API responses
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(AppError::InvalidToken.status_code(), 401);
        assert_eq!(AppError::TokenExpired.status_code(), 401);
        assert_eq!(AppError::InsufficientPermissions.status_code(), 403);
        assert_eq!(AppError::Database("test".to_string()).status_code(), 500);
        assert_eq!(AppError::Config("test".to_string()).status_code(), 500);
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(AppError::InvalidToken.error_code(), "INVALID_TOKEN");
        assert_eq!(
            AppError::InsufficientPermissions.error_code(),
            "INSUFFICIENT_PERMISSIONS"
        );
        assert_eq!(AppError::Config("bad".to_string()).error_code(), "CONFIG_ERROR");
    }

    #[test]
    fn test_summaries() {
        assert_eq!(AppError::TokenExpired.summary(), "Unauthorized");
        assert_eq!(AppError::InsufficientPermissions.summary(), "Forbidden");
        assert_eq!(
            AppError::Database("down".to_string()).summary(),
            "Internal server error"
        );
    }

    #[test]
    fn test_error_response_omits_empty_details() {
        let response = ErrorResponse {
            error: "Forbidden".to_string(),
            code: AppError::InsufficientPermissions.error_code().to_string(),
            message: AppError::InsufficientPermissions.to_string(),
            details: None,
        };
        let json = serde_json::to_value(&response).unwrap();

        assert_eq!(json["code"], "INSUFFICIENT_PERMISSIONS");
        assert_eq!(json["message"], "Admin access required");
        assert!(json.get("details").is_none());
    }
}
