//! Chat database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for the chats table.
///
/// Member ids live in the userchat association table and are hydrated
/// separately.
#[derive(Debug, Clone, FromRow)]
pub struct ChatModel {
    pub id: i64,
    pub name: String,
    pub created_at: DateTime<Utc>,
}
