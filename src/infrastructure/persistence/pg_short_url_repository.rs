//! PostgreSQL implementation of the short URL repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};
use std::sync::Arc;

use crate::domain::entities::{NewShortUrl, ShortUrl};
use crate::domain::repositories::{RepositoryError, RepositoryResult, ShortUrlRepository};
use crate::utils::db_error::is_unique_violation_on_short_id;

#[derive(Debug, FromRow)]
struct ShortUrlRow {
    short_id: String,
    original_url: String,
    created_at: DateTime<Utc>,
}

impl From<ShortUrlRow> for ShortUrl {
    fn from(row: ShortUrlRow) -> Self {
        ShortUrl::new(row.short_id, row.original_url, row.created_at)
    }
}

/// PostgreSQL repository for short URL storage and retrieval.
///
/// The `short_urls_short_id_key` unique constraint backs the uniqueness
/// guarantee; a violation is reported as [`RepositoryError::DuplicateShortId`].
pub struct PgShortUrlRepository {
    pool: Arc<PgPool>,
}

impl PgShortUrlRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ShortUrlRepository for PgShortUrlRepository {
    async fn insert(&self, new_short_url: NewShortUrl) -> RepositoryResult<ShortUrl> {
        let row = sqlx::query_as::<_, ShortUrlRow>(
            r#"
            INSERT INTO short_urls (short_id, original_url)
            VALUES ($1, $2)
            RETURNING short_id, original_url, created_at
            "#,
        )
        .bind(&new_short_url.short_id)
        .bind(&new_short_url.original_url)
        .fetch_one(self.pool.as_ref())
        .await
        .map_err(|e| {
            if is_unique_violation_on_short_id(&e) {
                RepositoryError::DuplicateShortId(new_short_url.short_id.clone())
            } else {
                RepositoryError::Database(e)
            }
        })?;

        Ok(row.into())
    }

    async fn exists(&self, short_id: &str) -> RepositoryResult<bool> {
        let exists = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS (SELECT 1 FROM short_urls WHERE short_id = $1)",
        )
        .bind(short_id)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(exists)
    }

    async fn find_original_url(&self, short_id: &str) -> RepositoryResult<Option<String>> {
        let original_url = sqlx::query_scalar::<_, String>(
            "SELECT original_url FROM short_urls WHERE short_id = $1",
        )
        .bind(short_id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(original_url)
    }

    async fn ping(&self) -> RepositoryResult<()> {
        sqlx::query("SELECT 1").execute(self.pool.as_ref()).await?;
        Ok(())
    }
}
