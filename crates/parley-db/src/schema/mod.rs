//! Idempotent schema bootstrap
//!
//! The bundled DDL is applied once at process startup. Every statement is
//! guarded with `IF NOT EXISTS`, so reapplying it is safe and changes
//! nothing on an already-initialized database.

use sqlx::PgPool;
use tracing::info;

/// Bundled schema script.
///
/// `users.username` carries the UNIQUE constraint; username uniqueness is a
/// store-level invariant, not re-checked in application code. `created_at`
/// columns have no default because the caller always supplies the value.
const SCHEMA: &str = r"
CREATE TABLE IF NOT EXISTS users (
    id         BIGSERIAL PRIMARY KEY,
    username   TEXT NOT NULL UNIQUE,
    created_at TIMESTAMPTZ NOT NULL
);

CREATE TABLE IF NOT EXISTS chats (
    id         BIGSERIAL PRIMARY KEY,
    name       TEXT NOT NULL,
    created_at TIMESTAMPTZ NOT NULL
);

CREATE TABLE IF NOT EXISTS userchat (
    user_id BIGINT NOT NULL REFERENCES users (id),
    chat_id BIGINT NOT NULL REFERENCES chats (id),
    PRIMARY KEY (user_id, chat_id)
);

CREATE TABLE IF NOT EXISTS messages (
    id         BIGSERIAL PRIMARY KEY,
    chat_id    BIGINT NOT NULL REFERENCES chats (id),
    user_id    BIGINT NOT NULL REFERENCES users (id),
    msg_text   TEXT NOT NULL,
    created_at TIMESTAMPTZ NOT NULL
);

CREATE INDEX IF NOT EXISTS idx_messages_chat_created ON messages (chat_id, created_at);
CREATE INDEX IF NOT EXISTS idx_userchat_chat ON userchat (chat_id);
";

/// Apply the schema to the database. Safe to call repeatedly.
pub async fn apply(pool: &PgPool) -> Result<(), sqlx::Error> {
    sqlx::raw_sql(SCHEMA).execute(pool).await?;
    info!("Database schema applied");
    Ok(())
}
