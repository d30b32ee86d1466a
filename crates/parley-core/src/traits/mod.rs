//! Repository traits (ports)

mod repositories;

pub use repositories::{ChatRepository, MessageRepository, RepoResult, UserRepository};
