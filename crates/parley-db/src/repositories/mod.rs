//! PostgreSQL repository implementations

mod chat;
mod checks;
mod error;
mod message;
mod user;

pub use chat::PgChatRepository;
pub use message::PgMessageRepository;
pub use user::PgUserRepository;
