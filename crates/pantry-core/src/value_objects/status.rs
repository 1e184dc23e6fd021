//! User status - the academic standing copied onto every take

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::DomainError;

/// Recognized user statuses
///
/// Input is accepted in any casing; the canonical (persisted) form is always
/// lower case. Every read or write of a status goes through [`UserStatus::normalize`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserStatus {
    Undergraduate,
    Graduate,
}

impl UserStatus {
    /// Canonical form of a raw status string
    pub fn normalize(raw: &str) -> String {
        raw.trim().to_lowercase()
    }

    /// Parse a raw status in any casing, `None` if it is not recognized
    pub fn parse(raw: &str) -> Option<Self> {
        match Self::normalize(raw).as_str() {
            "undergraduate" => Some(Self::Undergraduate),
            "graduate" => Some(Self::Graduate),
            _ => None,
        }
    }

    /// Resolve the status stored on a user record
    ///
    /// A missing or blank status is a hard failure; it is never defaulted.
    pub fn resolve(stored: Option<&str>) -> Result<Self, DomainError> {
        let raw = stored
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .ok_or(DomainError::StatusMissing)?;

        Self::parse(raw).ok_or_else(|| DomainError::InvalidStatus(raw.to_string()))
    }

    /// Get the canonical string representation
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Undergraduate => "undergraduate",
            Self::Graduate => "graduate",
        }
    }
}

impl fmt::Display for UserStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for UserStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| DomainError::InvalidStatus(s.to_string()))
    }
}
