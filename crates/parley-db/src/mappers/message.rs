//! Message entity <-> model mapper

use parley_core::Message;

use crate::models::MessageModel;

/// Convert MessageModel to Message entity
impl From<MessageModel> for Message {
    fn from(model: MessageModel) -> Self {
        Message {
            id: model.id,
            chat_id: model.chat_id,
            author_id: model.user_id,
            text: model.msg_text,
            created_at: model.created_at,
        }
    }
}
