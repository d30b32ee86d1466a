//! Chat entity <-> model mapper

use parley_core::Chat;

use crate::models::ChatModel;

impl ChatModel {
    /// Combine the chat row with its hydrated member ids into an entity
    pub fn into_chat(self, members: Vec<i64>) -> Chat {
        Chat {
            id: self.id,
            name: self.name,
            members,
            created_at: self.created_at,
        }
    }
}
