//! PostgreSQL implementation of VendorRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::{debug, instrument};

use pantry_core::{NewVendor, RepoResult, Vendor, VendorDeletion, VendorRepository};

use crate::models::VendorModel;

use super::error::map_db_error;

/// PostgreSQL implementation of VendorRepository
#[derive(Clone)]
pub struct PgVendorRepository {
    pool: PgPool,
}

impl PgVendorRepository {
    /// Create a new PgVendorRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl VendorRepository for PgVendorRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, vendor_id: i64) -> RepoResult<Option<Vendor>> {
        let result = sqlx::query_as::<_, VendorModel>(
            r"
            SELECT vendor_id, vendor_name, contact_person, address, phone, email
            FROM vendors
            WHERE vendor_id = $1
            ",
        )
        .bind(vendor_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Vendor::from))
    }

    #[instrument(skip(self))]
    async fn list(&self) -> RepoResult<Vec<Vendor>> {
        let rows = sqlx::query_as::<_, VendorModel>(
            r"
            SELECT vendor_id, vendor_name, contact_person, address, phone, email
            FROM vendors
            ORDER BY vendor_name, vendor_id
            ",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(rows.into_iter().map(Vendor::from).collect())
    }

    #[instrument(skip(self, vendor), fields(vendor_name = %vendor.vendor_name))]
    async fn create(&self, vendor: &NewVendor) -> RepoResult<Vendor> {
        let row = sqlx::query_as::<_, VendorModel>(
            r"
            INSERT INTO vendors (vendor_name, contact_person, address, phone, email)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING vendor_id, vendor_name, contact_person, address, phone, email
            ",
        )
        .bind(&vendor.vendor_name)
        .bind(&vendor.contact_person)
        .bind(&vendor.address)
        .bind(&vendor.phone)
        .bind(&vendor.email)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(Vendor::from(row))
    }

    #[instrument(skip(self, vendor))]
    async fn update(&self, vendor_id: i64, vendor: &NewVendor) -> RepoResult<Option<Vendor>> {
        let row = sqlx::query_as::<_, VendorModel>(
            r"
            UPDATE vendors
            SET vendor_name = $2, contact_person = $3, address = $4, phone = $5, email = $6
            WHERE vendor_id = $1
            RETURNING vendor_id, vendor_name, contact_person, address, phone, email
            ",
        )
        .bind(vendor_id)
        .bind(&vendor.vendor_name)
        .bind(&vendor.contact_person)
        .bind(&vendor.address)
        .bind(&vendor.phone)
        .bind(&vendor.email)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(row.map(Vendor::from))
    }

    #[instrument(skip(self))]
    async fn delete_if_unreferenced(&self, vendor_id: i64) -> RepoResult<VendorDeletion> {
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        // Holding the row lock blocks item inserts that reference this vendor
        // until the transaction ends.
        sqlx::query("SELECT vendor_id FROM vendors WHERE vendor_id = $1 FOR UPDATE")
            .bind(vendor_id)
            .fetch_optional(&mut *tx)
            .await
            .map_err(map_db_error)?;

        let item_count = sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM items WHERE vendor_id = $1",
        )
        .bind(vendor_id)
        .fetch_one(&mut *tx)
        .await
        .map_err(map_db_error)?;

        if item_count > 0 {
            debug!(item_count, "Vendor still referenced by items");
            tx.rollback().await.map_err(map_db_error)?;
            return Ok(VendorDeletion::HasItems(item_count));
        }

        let result = sqlx::query("DELETE FROM vendors WHERE vendor_id = $1")
            .bind(vendor_id)
            .execute(&mut *tx)
            .await
            .map_err(map_db_error)?;

        tx.commit().await.map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Ok(VendorDeletion::NotFound);
        }

        Ok(VendorDeletion::Deleted)
    }
}
