//! PostgreSQL implementation of MessageRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use parley_core::{DomainError, Message, MessageRepository, NewMessage, RepoResult};

use crate::models::MessageModel;

use super::checks;
use super::error::map_db_error;

/// PostgreSQL implementation of MessageRepository
#[derive(Clone)]
pub struct PgMessageRepository {
    pool: PgPool,
}

impl PgMessageRepository {
    /// Create a new PgMessageRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl MessageRepository for PgMessageRepository {
    #[instrument(skip(self))]
    async fn save(&self, message: &NewMessage) -> RepoResult<i64> {
        // Author is checked before chat; both checks and the insert share
        // one transaction.
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        let author_found = checks::user_exists(&mut *tx, message.author_id)
            .await
            .map_err(map_db_error)?;
        if !author_found {
            return Err(DomainError::UserNotFound(message.author_id));
        }

        let chat_found = checks::chat_exists(&mut *tx, message.chat_id)
            .await
            .map_err(map_db_error)?;
        if !chat_found {
            return Err(DomainError::ChatNotFound(message.chat_id));
        }

        let id = sqlx::query_scalar::<_, i64>(
            r"
            INSERT INTO messages (chat_id, user_id, msg_text, created_at)
            VALUES ($1, $2, $3, $4)
            RETURNING id
            ",
        )
        .bind(message.chat_id)
        .bind(message.author_id)
        .bind(&message.text)
        .bind(message.created_at)
        .fetch_one(&mut *tx)
        .await
        .map_err(map_db_error)?;

        tx.commit().await.map_err(map_db_error)?;

        Ok(id)
    }

    #[instrument(skip(self))]
    async fn find_by_chat(&self, chat_id: i64) -> RepoResult<Vec<Message>> {
        let found = checks::chat_exists(&self.pool, chat_id)
            .await
            .map_err(map_db_error)?;
        if !found {
            return Err(DomainError::ChatNotFound(chat_id));
        }

        let rows = sqlx::query_as::<_, MessageModel>(
            r"
            SELECT id, chat_id, user_id, msg_text, created_at
            FROM messages
            WHERE chat_id = $1
            ORDER BY created_at ASC, id ASC
            ",
        )
        .bind(chat_id)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(rows.into_iter().map(Message::from).collect())
    }
}
