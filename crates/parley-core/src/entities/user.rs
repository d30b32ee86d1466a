//! User entity - a registered account

use chrono::{DateTime, Utc};

/// A user that has not been persisted yet.
///
/// The store assigns the id on insertion, so a draft carries everything
/// except the id. `created_at` is stamped by the caller at request receipt,
/// never by the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub username: String,
    pub created_at: DateTime<Utc>,
}

impl NewUser {
    /// Create a new user draft
    pub fn new(username: impl Into<String>, created_at: DateTime<Utc>) -> Self {
        Self {
            username: username.into(),
            created_at,
        }
    }
}
