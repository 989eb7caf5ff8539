//! Repository trait for short URL data access.

use crate::domain::entities::{NewShortUrl, ShortUrl};
use async_trait::async_trait;

/// Errors raised by [`ShortUrlRepository`] implementations.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    /// The write violated the unique constraint on `short_id`.
    #[error("short id '{0}' already exists")]
    DuplicateShortId(String),

    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Result type for repository operations.
pub type RepositoryResult<T> = Result<T, RepositoryError>;

/// Repository interface owning the collection of short URL records.
///
/// Implementations must enforce uniqueness of `short_id` at write time: this
/// constraint is what decides the winner when two creators race for the same
/// identifier.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgShortUrlRepository`] - PostgreSQL implementation
/// - [`crate::infrastructure::persistence::InMemoryShortUrlRepository`] - process-local map
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ShortUrlRepository: Send + Sync {
    /// Inserts a new record.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError::DuplicateShortId`] if `short_id` is taken.
    async fn insert(&self, new_short_url: NewShortUrl) -> RepositoryResult<ShortUrl>;

    /// Returns whether a record with this short id exists.
    async fn exists(&self, short_id: &str) -> RepositoryResult<bool>;

    /// Looks up the original URL for a short id.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(url))` if found
    /// - `Ok(None)` if not found
    async fn find_original_url(&self, short_id: &str) -> RepositoryResult<Option<String>>;

    /// Checks that the store is reachable.
    async fn ping(&self) -> RepositoryResult<()>;
}
