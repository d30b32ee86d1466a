//! Message entity - a message posted to a chat

use chrono::{DateTime, Utc};

/// A persisted message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub id: i64,
    pub chat_id: i64,
    pub author_id: i64,
    pub text: String,
    pub created_at: DateTime<Utc>,
}

/// A message that has not been persisted yet; the store assigns the id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewMessage {
    pub chat_id: i64,
    pub author_id: i64,
    pub text: String,
    pub created_at: DateTime<Utc>,
}

impl NewMessage {
    /// Create a new message draft
    pub fn new(
        chat_id: i64,
        author_id: i64,
        text: impl Into<String>,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            chat_id,
            author_id,
            text: text.into(),
            created_at,
        }
    }
}
