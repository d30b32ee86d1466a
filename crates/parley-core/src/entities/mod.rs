//! Domain entities - core business objects

mod chat;
mod message;
mod user;

pub use chat::{Chat, NewChat, MIN_CHAT_MEMBERS};
pub use message::{Message, NewMessage};
pub use user::NewUser;
