//! Repository traits (ports) - define the interface for data access
//!
//! These traits follow the Repository pattern from Domain-Driven Design.
//! The domain layer defines what it needs, and the infrastructure layer
//! provides the implementation. The repositories own all persistent state
//! and enforce referential integrity between users, chats, and messages.

use async_trait::async_trait;

use crate::entities::{Chat, Message, NewChat, NewMessage, NewUser};
use crate::error::DomainError;

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

// ============================================================================
// User Repository
// ============================================================================

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Persist a new user, returning the store-assigned id.
    ///
    /// Username uniqueness is enforced by the store; a duplicate fails with
    /// `DomainError::UsernameTaken`. No format validation happens here.
    async fn save(&self, user: &NewUser) -> RepoResult<i64>;

    /// Check whether a user with this id exists.
    ///
    /// Unexpected store failures surface as `DomainError::Database` rather
    /// than aborting the process.
    async fn exists(&self, id: i64) -> RepoResult<bool>;
}

// ============================================================================
// Chat Repository
// ============================================================================

#[async_trait]
pub trait ChatRepository: Send + Sync {
    /// Persist a new chat and its membership rows, returning the assigned id.
    ///
    /// Fails with `TooFewMembers` when fewer than two distinct members are
    /// given, and with `UserNotFound` for the first member that does not
    /// exist. The chat row and all association rows are written atomically.
    async fn save(&self, chat: &NewChat) -> RepoResult<i64>;

    /// Check whether a chat with this id exists.
    async fn exists(&self, id: i64) -> RepoResult<bool>;

    /// List every chat the user belongs to, each hydrated with its member
    /// ids, ordered by the timestamp of the chat's most recent message
    /// (newest first; chats without messages last).
    ///
    /// Fails with `UserNotFound` when the user does not exist.
    async fn find_by_user(&self, user_id: i64) -> RepoResult<Vec<Chat>>;
}

// ============================================================================
// Message Repository
// ============================================================================

#[async_trait]
pub trait MessageRepository: Send + Sync {
    /// Persist a new message, returning the assigned id.
    ///
    /// The author is existence-checked before the chat; a missing reference
    /// fails with `UserNotFound` or `ChatNotFound` respectively.
    async fn save(&self, message: &NewMessage) -> RepoResult<i64>;

    /// List all messages in a chat, ordered by `created_at` ascending.
    ///
    /// Fails with `ChatNotFound` when the chat does not exist.
    async fn find_by_chat(&self, chat_id: i64) -> RepoResult<Vec<Message>>;
}
