//! # pantry-api
//!
//! REST API server for the pantry inventory service, built with Axum.

pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod response;
pub mod routes;
pub mod server;
pub mod state;

pub use server::{app_state_from_pool, create_app, create_app_state, run};
pub use state::AppState;
