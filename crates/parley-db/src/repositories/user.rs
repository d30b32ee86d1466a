//! PostgreSQL implementation of UserRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use parley_core::{DomainError, NewUser, RepoResult, UserRepository};

use super::checks;
use super::error::{is_unique_violation, map_db_error, map_write_error};

/// PostgreSQL implementation of UserRepository
#[derive(Clone)]
pub struct PgUserRepository {
    pool: PgPool,
}

impl PgUserRepository {
    /// Create a new PgUserRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserRepository for PgUserRepository {
    #[instrument(skip(self))]
    async fn save(&self, user: &NewUser) -> RepoResult<i64> {
        let id = sqlx::query_scalar::<_, i64>(
            r"
            INSERT INTO users (username, created_at)
            VALUES ($1, $2)
            RETURNING id
            ",
        )
        .bind(&user.username)
        .bind(user.created_at)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            if is_unique_violation(&e) {
                return DomainError::UsernameTaken(user.username.clone());
            }
            map_write_error(e, user)
        })?;

        Ok(id)
    }

    #[instrument(skip(self))]
    async fn exists(&self, id: i64) -> RepoResult<bool> {
        checks::user_exists(&self.pool, id).await.map_err(map_db_error)
    }
}
