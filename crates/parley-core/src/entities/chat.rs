//! Chat entity - a group conversation between two or more users

use chrono::{DateTime, Utc};

/// Minimum number of distinct members a chat must have.
pub const MIN_CHAT_MEMBERS: usize = 2;

/// A persisted chat, hydrated with its member ids.
///
/// A chat's identity is independent of its member set; the member set is
/// fixed at creation (there is no membership-update operation).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chat {
    pub id: i64,
    pub name: String,
    pub members: Vec<i64>,
    pub created_at: DateTime<Utc>,
}

/// A chat that has not been persisted yet; the store assigns the id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewChat {
    pub name: String,
    pub members: Vec<i64>,
    pub created_at: DateTime<Utc>,
}

impl NewChat {
    /// Create a new chat draft
    pub fn new(name: impl Into<String>, members: Vec<i64>, created_at: DateTime<Utc>) -> Self {
        Self {
            name: name.into(),
            members,
            created_at,
        }
    }

    /// The member list as a set: sorted, duplicates collapsed.
    ///
    /// Membership is a set of user ids; the same id listed twice still
    /// counts as one member.
    pub fn distinct_members(&self) -> Vec<i64> {
        let mut members = self.members.clone();
        members.sort_unstable();
        members.dedup();
        members
    }
}
