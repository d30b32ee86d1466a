//! PostgreSQL implementation of ChatRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use parley_core::{Chat, ChatRepository, DomainError, NewChat, RepoResult, MIN_CHAT_MEMBERS};

use crate::models::ChatModel;

use super::checks;
use super::error::map_db_error;

/// PostgreSQL implementation of ChatRepository
#[derive(Clone)]
pub struct PgChatRepository {
    pool: PgPool,
}

impl PgChatRepository {
    /// Create a new PgChatRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Load the member ids of one chat. No ordering is guaranteed to
    /// callers; ascending id keeps results stable.
    async fn members_of(&self, chat_id: i64) -> RepoResult<Vec<i64>> {
        sqlx::query_scalar::<_, i64>(
            r"
            SELECT user_id FROM userchat WHERE chat_id = $1 ORDER BY user_id
            ",
        )
        .bind(chat_id)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)
    }
}

#[async_trait]
impl ChatRepository for PgChatRepository {
    #[instrument(skip(self))]
    async fn save(&self, chat: &NewChat) -> RepoResult<i64> {
        let members = chat.distinct_members();
        if members.len() < MIN_CHAT_MEMBERS {
            return Err(DomainError::TooFewMembers {
                min: MIN_CHAT_MEMBERS,
                count: members.len(),
            });
        }

        // Membership checks and all inserts share one transaction: either
        // the chat and every association row land, or nothing does.
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        for &user_id in &members {
            let found = checks::user_exists(&mut *tx, user_id)
                .await
                .map_err(map_db_error)?;
            if !found {
                return Err(DomainError::UserNotFound(user_id));
            }
        }

        let chat_id = sqlx::query_scalar::<_, i64>(
            r"
            INSERT INTO chats (name, created_at)
            VALUES ($1, $2)
            RETURNING id
            ",
        )
        .bind(&chat.name)
        .bind(chat.created_at)
        .fetch_one(&mut *tx)
        .await
        .map_err(map_db_error)?;

        for &user_id in &members {
            sqlx::query(
                r"
                INSERT INTO userchat (user_id, chat_id)
                VALUES ($1, $2)
                ",
            )
            .bind(user_id)
            .bind(chat_id)
            .execute(&mut *tx)
            .await
            .map_err(map_db_error)?;
        }

        tx.commit().await.map_err(map_db_error)?;

        Ok(chat_id)
    }

    #[instrument(skip(self))]
    async fn exists(&self, id: i64) -> RepoResult<bool> {
        checks::chat_exists(&self.pool, id).await.map_err(map_db_error)
    }

    #[instrument(skip(self))]
    async fn find_by_user(&self, user_id: i64) -> RepoResult<Vec<Chat>> {
        let found = checks::user_exists(&self.pool, user_id)
            .await
            .map_err(map_db_error)?;
        if !found {
            return Err(DomainError::UserNotFound(user_id));
        }

        // Most recently active chat first. Chats without messages sort
        // last; ties break on descending chat id so the order is stable.
        let rows = sqlx::query_as::<_, ChatModel>(
            r"
            SELECT c.id, c.name, c.created_at
            FROM chats c
            JOIN userchat uc ON uc.chat_id = c.id
            LEFT JOIN messages m ON m.chat_id = c.id
            WHERE uc.user_id = $1
            GROUP BY c.id
            ORDER BY MAX(m.created_at) DESC NULLS LAST, c.id DESC
            ",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        let mut chats = Vec::with_capacity(rows.len());
        for row in rows {
            let members = self.members_of(row.id).await?;
            chats.push(row.into_chat(members));
        }

        Ok(chats)
    }
}
