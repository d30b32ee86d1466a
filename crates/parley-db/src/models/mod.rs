//! Database row models

mod chat;
mod message;

pub use chat::ChatModel;
pub use message::MessageModel;
