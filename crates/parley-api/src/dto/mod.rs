//! Request and response DTOs for the HTTP API
//!
//! Requests carry referenced ids as strings on the wire (the format clients
//! already speak); store-assigned ids in responses are numbers. Unknown
//! request fields are ignored.

use chrono::{DateTime, Utc};
use parley_core::{Chat, Message};
use serde::{Deserialize, Serialize};

// ============================================================================
// Requests
// ============================================================================

/// Body of POST /users/add
#[derive(Debug, Clone, Deserialize)]
pub struct CreateUserRequest {
    pub username: String,
}

/// Body of POST /chats/add
#[derive(Debug, Clone, Deserialize)]
pub struct CreateChatRequest {
    pub name: String,
    pub users: Vec<String>,
}

/// Body of POST /messages/add
#[derive(Debug, Clone, Deserialize)]
pub struct CreateMessageRequest {
    pub chat: String,
    pub author: String,
    pub text: String,
}

/// Body of POST /chats/get
#[derive(Debug, Clone, Deserialize)]
pub struct GetChatsRequest {
    pub user: String,
}

/// Body of POST /messages/get
#[derive(Debug, Clone, Deserialize)]
pub struct GetMessagesRequest {
    pub chat: String,
}

// ============================================================================
// Responses
// ============================================================================

/// Creation result: the store-assigned id
#[derive(Debug, Serialize)]
pub struct IdResponse {
    pub id: i64,
}

/// One chat in a chat-list response
#[derive(Debug, Serialize)]
pub struct ChatResponse {
    pub id: i64,
    pub name: String,
    pub users: Vec<String>,
    pub created_at: DateTime<Utc>,
}

impl From<Chat> for ChatResponse {
    fn from(chat: Chat) -> Self {
        Self {
            id: chat.id,
            name: chat.name,
            users: chat.members.iter().map(ToString::to_string).collect(),
            created_at: chat.created_at,
        }
    }
}

/// One message in a message-list response
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub id: i64,
    pub chat: String,
    pub author: String,
    pub text: String,
    pub created_at: DateTime<Utc>,
}

impl From<Message> for MessageResponse {
    fn from(message: Message) -> Self {
        Self {
            id: message.id,
            chat: message.chat_id.to_string(),
            author: message.author_id.to_string(),
            text: message.text,
            created_at: message.created_at,
        }
    }
}
