//! Service context - dependency container for services
//!
//! Holds the repositories and policies needed by services. The store is
//! always reached through the repository traits, so tests can inject
//! in-memory implementations through the builder.

use std::sync::Arc;

use pantry_core::{
    IdRetryPolicy, ItemRepository, TransactionRepository, UserRepository, VendorRepository,
};

/// Service context containing all dependencies
#[derive(Clone)]
pub struct ServiceContext {
    // Repositories
    user_repo: Arc<dyn UserRepository>,
    item_repo: Arc<dyn ItemRepository>,
    vendor_repo: Arc<dyn VendorRepository>,
    transaction_repo: Arc<dyn TransactionRepository>,

    // Policies
    id_retry_policy: IdRetryPolicy,
}

impl ServiceContext {
    /// Create a new service context with all dependencies
    pub fn new(
        user_repo: Arc<dyn UserRepository>,
        item_repo: Arc<dyn ItemRepository>,
        vendor_repo: Arc<dyn VendorRepository>,
        transaction_repo: Arc<dyn TransactionRepository>,
        id_retry_policy: IdRetryPolicy,
    ) -> Self {
        Self {
            user_repo,
            item_repo,
            vendor_repo,
            transaction_repo,
            id_retry_policy,
        }
    }

    // === Repositories ===

    /// Get the user repository
    pub fn user_repo(&self) -> &dyn UserRepository {
        self.user_repo.as_ref()
    }

    /// Get the item repository
    pub fn item_repo(&self) -> &dyn ItemRepository {
        self.item_repo.as_ref()
    }

    /// Get the vendor repository
    pub fn vendor_repo(&self) -> &dyn VendorRepository {
        self.vendor_repo.as_ref()
    }

    /// Get the transaction repository
    pub fn transaction_repo(&self) -> &dyn TransactionRepository {
        self.transaction_repo.as_ref()
    }

    // === Policies ===

    /// Retry policy for generated user IDs
    pub fn id_retry_policy(&self) -> IdRetryPolicy {
        self.id_retry_policy
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("repositories", &"...")
            .field("id_retry_policy", &self.id_retry_policy)
            .finish()
    }
}

/// Builder for creating ServiceContext with custom configuration
#[derive(Default)]
pub struct ServiceContextBuilder {
    user_repo: Option<Arc<dyn UserRepository>>,
    item_repo: Option<Arc<dyn ItemRepository>>,
    vendor_repo: Option<Arc<dyn VendorRepository>>,
    transaction_repo: Option<Arc<dyn TransactionRepository>>,
    id_retry_policy: Option<IdRetryPolicy>,
}

impl ServiceContextBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn user_repo(mut self, repo: Arc<dyn UserRepository>) -> Self {
        self.user_repo = Some(repo);
        self
    }

    pub fn item_repo(mut self, repo: Arc<dyn ItemRepository>) -> Self {
        self.item_repo = Some(repo);
        self
    }

    pub fn vendor_repo(mut self, repo: Arc<dyn VendorRepository>) -> Self {
        self.vendor_repo = Some(repo);
        self
    }

    pub fn transaction_repo(mut self, repo: Arc<dyn TransactionRepository>) -> Self {
        self.transaction_repo = Some(repo);
        self
    }

    /// Override the user ID retry policy (defaults to [`IdRetryPolicy::default`])
    pub fn id_retry_policy(mut self, policy: IdRetryPolicy) -> Self {
        self.id_retry_policy = Some(policy);
        self
    }

    /// Build the ServiceContext
    ///
    /// # Errors
    /// Returns `ServiceError::Validation` if any required dependency is missing
    pub fn build(self) -> super::error::ServiceResult<ServiceContext> {
        use super::error::ServiceError;

        Ok(ServiceContext::new(
            self.user_repo.ok_or_else(|| ServiceError::validation("user_repo is required"))?,
            self.item_repo.ok_or_else(|| ServiceError::validation("item_repo is required"))?,
            self.vendor_repo.ok_or_else(|| ServiceError::validation("vendor_repo is required"))?,
            self.transaction_repo
                .ok_or_else(|| ServiceError::validation("transaction_repo is required"))?,
            self.id_retry_policy.unwrap_or_default(),
        ))
    }
}
