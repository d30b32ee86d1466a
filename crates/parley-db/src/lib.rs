//! # parley-db
//!
//! Database layer implementing repository traits with PostgreSQL via SQLx.
//!
//! ## Overview
//!
//! This crate provides PostgreSQL implementations for the repository traits
//! defined in `parley-core`. It handles:
//!
//! - Connection pool management
//! - Idempotent schema bootstrap
//! - Database models with SQLx `FromRow` derives
//! - Entity ↔ model mappers
//! - Repository implementations enforcing referential integrity
//!
//! ## Usage
//!
//! ```rust,ignore
//! use parley_db::pool::{create_pool, DatabaseConfig};
//! use parley_db::PgUserRepository;
//! use parley_core::UserRepository;
//!
//! async fn example() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = DatabaseConfig::from_env();
//!     let pool = create_pool(&config).await?;
//!     parley_db::schema::apply(&pool).await?;
//!     let users = PgUserRepository::new(pool);
//!
//!     // Use the repository...
//!     Ok(())
//! }
//! ```

pub mod mappers;
pub mod models;
pub mod pool;
pub mod repositories;
pub mod schema;

// Re-export commonly used types
pub use pool::{create_pool, create_pool_from_env, DatabaseConfig, PgPool};
pub use repositories::{PgChatRepository, PgMessageRepository, PgUserRepository};
