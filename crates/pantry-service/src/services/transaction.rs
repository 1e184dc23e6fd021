//! Transaction service
//!
//! Records takes and lists transaction history.

use pantry_core::{DomainError, NewTransaction};
use tracing::{info, instrument, warn};

use crate::dto::{CreateTransactionRequest, TransactionCreatedResponse, TransactionResponse};

use super::context::ServiceContext;
use super::error::ServiceResult;
use super::status::StatusResolver;

/// Transaction service
pub struct TransactionService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> TransactionService<'a> {
    /// Create a new TransactionService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Record a take
    ///
    /// The user's status at this moment is copied onto the transaction.
    #[instrument(skip(self, request))]
    pub async fn record(
        &self,
        request: CreateTransactionRequest,
    ) -> ServiceResult<TransactionCreatedResponse> {
        let user_id = request.user_id.filter(|id| !id.trim().is_empty());
        let product_id = request.product_id.filter(|id| *id != 0);
        let quantity_taken = request.quantity_taken.filter(|q| *q != 0);

        let (Some(user_id), Some(product_id), Some(quantity_taken)) =
            (user_id.as_ref(), product_id, quantity_taken)
        else {
            let mut missing = Vec::new();
            if user_id.is_none() {
                missing.push("user_id");
            }
            if product_id.is_none() {
                missing.push("product_id");
            }
            if quantity_taken.is_none() {
                missing.push("quantity_taken");
            }
            warn!(missing = ?missing, "Transaction rejected: missing fields");
            return Err(DomainError::MissingFields(missing).into());
        };

        if quantity_taken < 0 {
            warn!(quantity_taken, "Transaction rejected: negative quantity");
            return Err(DomainError::ValidationError(
                "quantity_taken must be positive".to_string(),
            )
            .into());
        }

        let user_status = StatusResolver::new(self.ctx).resolve(user_id).await?;

        if !self.ctx.item_repo().exists(product_id).await? {
            return Err(DomainError::ItemNotFound(product_id).into());
        }

        let new_transaction = NewTransaction {
            user_id: user_id.clone(),
            product_id,
            quantity_taken,
            user_status,
        };

        let Some(transaction) = self.ctx.transaction_repo().create(&new_transaction).await? else {
            // The user or the item disappeared after validation
            return Err(self.missing_reference(user_id, product_id).await);
        };

        info!(
            transaction_id = transaction.transaction_id,
            user_id = %transaction.user_id,
            product_id = transaction.product_id,
            quantity_taken = transaction.quantity_taken,
            user_status = %transaction.user_status,
            "Transaction recorded"
        );

        Ok(TransactionCreatedResponse::new(transaction.transaction_id))
    }

    /// All transactions with item and user details, newest first
    #[instrument(skip(self))]
    pub async fn list(&self) -> ServiceResult<Vec<TransactionResponse>> {
        let transactions = self.ctx.transaction_repo().list_detailed().await?;
        Ok(transactions.into_iter().map(TransactionResponse::from).collect())
    }

    /// Takes of one user, newest first
    #[instrument(skip(self))]
    pub async fn list_for_user(&self, user_id: &str) -> ServiceResult<Vec<TransactionResponse>> {
        if self.ctx.user_repo().find_by_id(user_id).await?.is_none() {
            return Err(DomainError::UserNotFound(user_id.to_string()).into());
        }

        let transactions = self.ctx.transaction_repo().find_by_user(user_id).await?;
        Ok(transactions.into_iter().map(TransactionResponse::from).collect())
    }

    async fn missing_reference(&self, user_id: &str, product_id: i64) -> super::ServiceError {
        match self.ctx.user_repo().find_by_id(user_id).await {
            Ok(Some(_)) => DomainError::ItemNotFound(product_id).into(),
            Ok(None) => DomainError::UserNotFound(user_id.to_string()).into(),
            Err(e) => e.into(),
        }
    }
}
