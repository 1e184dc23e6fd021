//! Route definitions
//!
//! All API routes organized by resource and mounted under /api.

use axum::{routing::get, Router};

use crate::handlers::{health, items, transactions, users, vendors};
use crate::state::AppState;

/// Create the main router with all routes
pub fn create_router() -> Router<AppState> {
    Router::new()
        .route("/", get(health::root))
        .nest("/api", api_routes())
}

fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .merge(transaction_routes())
        .merge(vendor_routes())
        .merge(user_routes())
        .merge(item_routes())
}

/// Transaction and report routes
fn transaction_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/transactions",
            get(transactions::list_transactions).post(transactions::create_transaction),
        )
        .route("/transactions/most-taken", get(transactions::most_taken))
        .route("/transactions/unique-students", get(transactions::unique_students))
        .route(
            "/transactions/user/:user_id",
            get(transactions::list_user_transactions),
        )
}

/// Vendor routes
fn vendor_routes() -> Router<AppState> {
    Router::new()
        .route("/vendors", get(vendors::list_vendors).post(vendors::create_vendor))
        .route(
            "/vendors/:vendor_id",
            get(vendors::get_vendor)
                .put(vendors::update_vendor)
                .delete(vendors::delete_vendor),
        )
        .route("/vendors/:vendor_id/items", get(vendors::list_vendor_items))
}

/// User routes
fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/users", get(users::list_users).post(users::register_user))
        .route(
            "/users/:user_id",
            get(users::get_user)
                .put(users::update_user)
                .delete(users::delete_user),
        )
}

/// Item routes
fn item_routes() -> Router<AppState> {
    Router::new()
        .route("/items", get(items::list_items).post(items::create_item))
        .route("/items/low-stock", get(items::low_stock))
        .route(
            "/items/:product_id",
            get(items::get_item)
                .put(items::update_item)
                .delete(items::delete_item),
        )
}
