//! HTTP request handlers
//!
//! Handlers are organized by resource.

pub mod health;
pub mod items;
pub mod transactions;
pub mod users;
pub mod vendors;
