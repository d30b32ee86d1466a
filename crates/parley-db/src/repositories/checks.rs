//! Existence checks shared by repositories
//!
//! Point lookups confirming a referenced entity is present before a
//! dependent write. Store failures propagate to the caller as errors; they
//! are never fatal to the process.

use sqlx::postgres::PgExecutor;

/// Check whether a user row with this id exists
pub(super) async fn user_exists<'e, E>(executor: E, id: i64) -> Result<bool, sqlx::Error>
where
    E: PgExecutor<'e>,
{
    sqlx::query_scalar::<_, bool>(
        r"
        SELECT EXISTS(SELECT 1 FROM users WHERE id = $1)
        ",
    )
    .bind(id)
    .fetch_one(executor)
    .await
}

/// Check whether a chat row with this id exists
pub(super) async fn chat_exists<'e, E>(executor: E, id: i64) -> Result<bool, sqlx::Error>
where
    E: PgExecutor<'e>,
{
    sqlx::query_scalar::<_, bool>(
        r"
        SELECT EXISTS(SELECT 1 FROM chats WHERE id = $1)
        ",
    )
    .bind(id)
    .fetch_one(executor)
    .await
}
