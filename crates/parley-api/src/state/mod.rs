//! Application state
//!
//! Holds the shared state for the Axum application: repository handles, the
//! connection pool, and configuration. All shared state is injected here;
//! there is no ambient/global store handle.

use std::sync::Arc;

use parley_common::AppConfig;
use parley_core::{ChatRepository, MessageRepository, UserRepository};
use parley_db::PgPool;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    users: Arc<dyn UserRepository>,
    chats: Arc<dyn ChatRepository>,
    messages: Arc<dyn MessageRepository>,
    pool: PgPool,
    config: Arc<AppConfig>,
}

impl AppState {
    /// Create a new AppState
    pub fn new(
        users: Arc<dyn UserRepository>,
        chats: Arc<dyn ChatRepository>,
        messages: Arc<dyn MessageRepository>,
        pool: PgPool,
        config: AppConfig,
    ) -> Self {
        Self {
            users,
            chats,
            messages,
            pool,
            config: Arc::new(config),
        }
    }

    /// Get the user repository
    pub fn users(&self) -> &dyn UserRepository {
        self.users.as_ref()
    }

    /// Get the chat repository
    pub fn chats(&self) -> &dyn ChatRepository {
        self.chats.as_ref()
    }

    /// Get the message repository
    pub fn messages(&self) -> &dyn MessageRepository {
        self.messages.as_ref()
    }

    /// Get the connection pool (readiness checks)
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Get the application configuration
    pub fn config(&self) -> &AppConfig {
        &self.config
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("config", &"AppConfig")
            .finish()
    }
}
