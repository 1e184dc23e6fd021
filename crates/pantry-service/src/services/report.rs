//! Report service
//!
//! Read-only aggregations over recorded transactions.

use pantry_core::{rank_most_taken, StudentCounts};
use tracing::{debug, instrument};

use crate::dto::{MostTakenItemResponse, StudentCountsResponse};

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Report service
pub struct ReportService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> ReportService<'a> {
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Items ranked by number of takes, ranks 1 through 10
    #[instrument(skip(self))]
    pub async fn most_taken(&self) -> ServiceResult<Vec<MostTakenItemResponse>> {
        let counts = self.ctx.transaction_repo().count_by_product().await?;
        let ranked = rank_most_taken(counts);
        debug!(rows = ranked.len(), "Most-taken report built");

        Ok(ranked.into_iter().map(MostTakenItemResponse::from).collect())
    }

    /// Distinct students who took anything, per status
    #[instrument(skip(self))]
    pub async fn unique_students(&self) -> ServiceResult<StudentCountsResponse> {
        let rows = self.ctx.transaction_repo().distinct_users_by_status().await?;
        Ok(StudentCounts::from_status_counts(rows))
    }
}
