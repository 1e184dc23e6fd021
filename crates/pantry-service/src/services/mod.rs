//! Business logic services
//!
//! This module contains all service layer implementations that handle
//! business logic, validation, and orchestration of domain operations.

pub mod context;
pub mod error;
pub mod item;
pub mod report;
pub mod status;
pub mod transaction;
pub mod user;
pub mod vendor;

// Re-export all services for convenience
pub use context::{ServiceContext, ServiceContextBuilder};
pub use error::{ServiceError, ServiceResult};
pub use item::ItemService;
pub use report::ReportService;
pub use status::StatusResolver;
pub use transaction::TransactionService;
pub use user::UserService;
pub use vendor::VendorService;
