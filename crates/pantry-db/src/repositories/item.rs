//! PostgreSQL implementation of ItemRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use pantry_core::{DomainError, Item, ItemRepository, LowStockQuery, NewItem, RepoResult};

use crate::models::ItemModel;

use super::error::{map_db_error, map_foreign_key_violation};

/// PostgreSQL implementation of ItemRepository
#[derive(Clone)]
pub struct PgItemRepository {
    pool: PgPool,
}

impl PgItemRepository {
    /// Create a new PgItemRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ItemRepository for PgItemRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, product_id: i64) -> RepoResult<Option<Item>> {
        let result = sqlx::query_as::<_, ItemModel>(
            r"
            SELECT product_id, product_name, item_type, vendor_id, quantity, weight
            FROM items
            WHERE product_id = $1
            ",
        )
        .bind(product_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Item::from))
    }

    #[instrument(skip(self))]
    async fn list(&self) -> RepoResult<Vec<Item>> {
        let rows = sqlx::query_as::<_, ItemModel>(
            r"
            SELECT product_id, product_name, item_type, vendor_id, quantity, weight
            FROM items
            ORDER BY product_name, product_id
            ",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(rows.into_iter().map(Item::from).collect())
    }

    #[instrument(skip(self))]
    async fn find_by_vendor(&self, vendor_id: i64) -> RepoResult<Vec<Item>> {
        let rows = sqlx::query_as::<_, ItemModel>(
            r"
            SELECT product_id, product_name, item_type, vendor_id, quantity, weight
            FROM items
            WHERE vendor_id = $1
            ORDER BY product_name, product_id
            ",
        )
        .bind(vendor_id)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(rows.into_iter().map(Item::from).collect())
    }

    #[instrument(skip(self))]
    async fn find_low_stock(&self, query: LowStockQuery) -> RepoResult<Vec<Item>> {
        let rows = sqlx::query_as::<_, ItemModel>(
            r"
            SELECT product_id, product_name, item_type, vendor_id, quantity, weight
            FROM items
            WHERE ($1::INTEGER IS NOT NULL AND quantity IS NOT NULL AND quantity <= $1)
               OR ($2::DOUBLE PRECISION IS NOT NULL AND weight IS NOT NULL AND weight <= $2)
            ORDER BY product_name, product_id
            ",
        )
        .bind(query.quantity)
        .bind(query.weight)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(rows.into_iter().map(Item::from).collect())
    }

    #[instrument(skip(self))]
    async fn exists(&self, product_id: i64) -> RepoResult<bool> {
        sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM items WHERE product_id = $1)")
            .bind(product_id)
            .fetch_one(&self.pool)
            .await
            .map_err(map_db_error)
    }

    #[instrument(skip(self, item), fields(product_name = %item.product_name))]
    async fn create(&self, item: &NewItem) -> RepoResult<Item> {
        let row = sqlx::query_as::<_, ItemModel>(
            r"
            INSERT INTO items (product_name, item_type, vendor_id, quantity, weight)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING product_id, product_name, item_type, vendor_id, quantity, weight
            ",
        )
        .bind(&item.product_name)
        .bind(&item.item_type)
        .bind(item.vendor_id)
        .bind(item.quantity)
        .bind(item.weight)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_foreign_key_violation(e, || DomainError::VendorNotFound(item.vendor_id)))?;

        Ok(Item::from(row))
    }

    #[instrument(skip(self, item))]
    async fn update(&self, product_id: i64, item: &NewItem) -> RepoResult<Option<Item>> {
        let row = sqlx::query_as::<_, ItemModel>(
            r"
            UPDATE items
            SET product_name = $2, item_type = $3, vendor_id = $4, quantity = $5, weight = $6
            WHERE product_id = $1
            RETURNING product_id, product_name, item_type, vendor_id, quantity, weight
            ",
        )
        .bind(product_id)
        .bind(&item.product_name)
        .bind(&item.item_type)
        .bind(item.vendor_id)
        .bind(item.quantity)
        .bind(item.weight)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| map_foreign_key_violation(e, || DomainError::VendorNotFound(item.vendor_id)))?;

        Ok(row.map(Item::from))
    }

    #[instrument(skip(self))]
    async fn delete(&self, product_id: i64) -> RepoResult<bool> {
        let result = sqlx::query("DELETE FROM items WHERE product_id = $1")
            .bind(product_id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                map_foreign_key_violation(e, || DomainError::ItemHasTransactions(product_id))
            })?;

        Ok(result.rows_affected() > 0)
    }
}
