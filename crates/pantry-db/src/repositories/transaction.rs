//! PostgreSQL implementation of TransactionRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::{debug, instrument};

use pantry_core::{
    NewTransaction, ProductTakeCount, RepoResult, StatusCount, Transaction, TransactionDetail,
    TransactionRepository,
};

use crate::mappers::transaction_from_insert;
use crate::models::{
    ProductCountModel, StatusCountModel, TransactionDetailModel, TransactionInsertedModel,
};

use super::error::{is_foreign_key_violation, map_db_error};

const DETAIL_SELECT: &str = r"
    SELECT t.transaction_id, t.user_id, t.product_id, t.quantity_taken, t.user_status,
           t.taken_at, i.product_name, i.item_type,
           u.first_name || ' ' || u.last_name AS username
    FROM transactions t
    JOIN items i ON i.product_id = t.product_id
    LEFT JOIN users u ON u.user_id = t.user_id
";

/// PostgreSQL implementation of TransactionRepository
#[derive(Clone)]
pub struct PgTransactionRepository {
    pool: PgPool,
}

impl PgTransactionRepository {
    /// Create a new PgTransactionRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TransactionRepository for PgTransactionRepository {
    #[instrument(skip(self, transaction), fields(
        user_id = %transaction.user_id,
        product_id = transaction.product_id,
    ))]
    async fn create(&self, transaction: &NewTransaction) -> RepoResult<Option<Transaction>> {
        let inserted = sqlx::query_as::<_, TransactionInsertedModel>(
            r"
            INSERT INTO transactions (user_id, product_id, quantity_taken, user_status)
            SELECT $1::VARCHAR, $2::BIGINT, $3::INTEGER, $4::VARCHAR
            WHERE EXISTS (SELECT 1 FROM users WHERE user_id = $1)
              AND EXISTS (SELECT 1 FROM items WHERE product_id = $2)
            RETURNING transaction_id, taken_at
            ",
        )
        .bind(&transaction.user_id)
        .bind(transaction.product_id)
        .bind(transaction.quantity_taken)
        .bind(transaction.user_status.as_str())
        .fetch_optional(&self.pool)
        .await;

        match inserted {
            Ok(Some(row)) => Ok(Some(transaction_from_insert(transaction, row))),
            Ok(None) => {
                debug!("User or item vanished before insert");
                Ok(None)
            }
            // The referenced row was deleted after the existence check but
            // before the foreign key check
            Err(e) if is_foreign_key_violation(&e) => Ok(None),
            Err(e) => Err(map_db_error(e)),
        }
    }

    #[instrument(skip(self))]
    async fn list_detailed(&self) -> RepoResult<Vec<TransactionDetail>> {
        let rows = sqlx::query_as::<_, TransactionDetailModel>(&format!(
            "{DETAIL_SELECT} ORDER BY t.taken_at DESC, t.transaction_id DESC"
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(rows.into_iter().map(TransactionDetail::from).collect())
    }

    #[instrument(skip(self))]
    async fn find_by_user(&self, user_id: &str) -> RepoResult<Vec<TransactionDetail>> {
        let rows = sqlx::query_as::<_, TransactionDetailModel>(&format!(
            "{DETAIL_SELECT} WHERE t.user_id = $1 ORDER BY t.taken_at DESC, t.transaction_id DESC"
        ))
        .bind(user_id)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(rows.into_iter().map(TransactionDetail::from).collect())
    }

    #[instrument(skip(self))]
    async fn count_by_product(&self) -> RepoResult<Vec<ProductTakeCount>> {
        let rows = sqlx::query_as::<_, ProductCountModel>(
            r"
            SELECT i.product_id, i.product_name, i.item_type,
                   COUNT(t.transaction_id) AS total_transactions
            FROM transactions t
            JOIN items i ON i.product_id = t.product_id
            GROUP BY i.product_id, i.product_name, i.item_type
            ",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(rows.into_iter().map(ProductTakeCount::from).collect())
    }

    #[instrument(skip(self))]
    async fn distinct_users_by_status(&self) -> RepoResult<Vec<StatusCount>> {
        let rows = sqlx::query_as::<_, StatusCountModel>(
            r"
            SELECT LOWER(user_status) AS user_status, COUNT(DISTINCT user_id) AS count
            FROM transactions
            GROUP BY LOWER(user_status)
            ",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(rows.into_iter().map(StatusCount::from).collect())
    }
}
