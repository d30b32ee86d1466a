//! Route definitions

use axum::{
    routing::{get, post},
    Router,
};

use crate::handlers::{chats, health, messages, users};
use crate::state::AppState;

/// Create the main API router with all routes
pub fn create_router() -> Router<AppState> {
    Router::new()
        .route("/users/add", post(users::add_user))
        .route("/chats/add", post(chats::add_chat))
        .route("/chats/get", post(chats::get_chats))
        .route("/messages/add", post(messages::add_message))
        .route("/messages/get", post(messages::get_messages))
        .merge(health_routes())
}

/// Health check routes
pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
}
