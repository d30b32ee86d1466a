//! # parley-api
//!
//! REST API server built with Axum framework.

pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod response;
pub mod routes;
pub mod server;
pub mod state;

// Re-export the bootstrap entry points for embedding (e.g. test harnesses)
pub use server::{create_app, create_app_state, run};
