//! Unique-student counts by status

use serde::Serialize;

use crate::value_objects::UserStatus;

/// Distinct users recorded under one stored status value
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusCount {
    pub user_status: Option<String>,
    pub count: i64,
}

/// Unique students per recognized status
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct StudentCounts {
    pub undergraduate_count: i64,
    pub graduate_count: i64,
}

impl StudentCounts {
    /// Fold grouped status counts into the two buckets
    ///
    /// Status values are matched case-insensitively. Rows with a missing or
    /// unrecognized status are ignored.
    pub fn from_status_counts(rows: impl IntoIterator<Item = StatusCount>) -> Self {
        rows.into_iter().fold(Self::default(), |mut counts, row| {
            match row.user_status.as_deref().and_then(UserStatus::parse) {
                Some(UserStatus::Undergraduate) => counts.undergraduate_count += row.count,
                Some(UserStatus::Graduate) => counts.graduate_count += row.count,
                None => {}
            }
            counts
        })
    }
}
