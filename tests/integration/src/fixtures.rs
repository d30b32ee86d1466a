//! Test fixtures and data generators
//!
//! Provides reusable test data for integration tests.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};

/// Counter for unique test data
static COUNTER: AtomicU64 = AtomicU64::new(1);

/// Get a unique suffix for test data
pub fn unique_suffix() -> u64 {
    let n = COUNTER.fetch_add(1, Ordering::SeqCst);
    let nanos = Utc::now().timestamp_subsec_nanos();
    u64::from(nanos) << 16 | n
}

// ============================================================================
// Requests
// ============================================================================

/// User creation request
#[derive(Debug, Serialize)]
pub struct AddUserRequest {
    pub username: String,
}

impl AddUserRequest {
    pub fn unique() -> Self {
        Self {
            username: format!("testuser{}", unique_suffix()),
        }
    }
}

/// Chat creation request (member ids as wire-format strings)
#[derive(Debug, Serialize)]
pub struct AddChatRequest {
    pub name: String,
    pub users: Vec<String>,
}

impl AddChatRequest {
    pub fn between(member_ids: &[i64]) -> Self {
        Self {
            name: format!("testchat{}", unique_suffix()),
            users: member_ids.iter().map(ToString::to_string).collect(),
        }
    }
}

/// Message creation request
#[derive(Debug, Serialize)]
pub struct AddMessageRequest {
    pub chat: String,
    pub author: String,
    pub text: String,
}

impl AddMessageRequest {
    pub fn new(chat_id: i64, author_id: i64, text: &str) -> Self {
        Self {
            chat: chat_id.to_string(),
            author: author_id.to_string(),
            text: text.to_string(),
        }
    }
}

/// Chat list request
#[derive(Debug, Serialize)]
pub struct GetChatsRequest {
    pub user: String,
}

/// Message list request
#[derive(Debug, Serialize)]
pub struct GetMessagesRequest {
    pub chat: String,
}

// ============================================================================
// Responses
// ============================================================================

/// Creation response carrying the assigned id
#[derive(Debug, Deserialize)]
pub struct IdResponse {
    pub id: i64,
}

/// Chat object as returned by POST /chats/get
#[derive(Debug, Deserialize)]
pub struct ChatResponse {
    pub id: i64,
    pub name: String,
    pub users: Vec<String>,
    pub created_at: DateTime<Utc>,
}

/// Message object as returned by POST /messages/get
#[derive(Debug, Deserialize)]
pub struct MessageResponse {
    pub id: i64,
    pub chat: String,
    pub author: String,
    pub text: String,
    pub created_at: DateTime<Utc>,
}

/// Error response body
#[derive(Debug, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}
