//! In-memory implementation of the short URL repository.

use async_trait::async_trait;
use chrono::Utc;
use dashmap::DashMap;
use dashmap::mapref::entry::Entry;

use crate::domain::entities::{NewShortUrl, ShortUrl};
use crate::domain::repositories::{RepositoryError, RepositoryResult, ShortUrlRepository};

/// Process-local repository backed by a [`DashMap`].
///
/// Inserts go through the map's entry API, so the existence check and the
/// write happen under the same shard lock. That gives the same uniqueness
/// guarantee as the database's unique constraint.
#[derive(Debug, Default)]
pub struct InMemoryShortUrlRepository {
    storage: DashMap<String, ShortUrl>,
}

impl InMemoryShortUrlRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.storage.len()
    }

    pub fn is_empty(&self) -> bool {
        self.storage.is_empty()
    }
}

#[async_trait]
impl ShortUrlRepository for InMemoryShortUrlRepository {
    async fn insert(&self, new_short_url: NewShortUrl) -> RepositoryResult<ShortUrl> {
        match self.storage.entry(new_short_url.short_id.clone()) {
            Entry::Occupied(_) => Err(RepositoryError::DuplicateShortId(new_short_url.short_id)),
            Entry::Vacant(slot) => {
                let record = ShortUrl::new(
                    new_short_url.short_id,
                    new_short_url.original_url,
                    Utc::now(),
                );
                slot.insert(record.clone());
                Ok(record)
            }
        }
    }

    async fn exists(&self, short_id: &str) -> RepositoryResult<bool> {
        Ok(self.storage.contains_key(short_id))
    }

    async fn find_original_url(&self, short_id: &str) -> RepositoryResult<Option<String>> {
        Ok(self
            .storage
            .get(short_id)
            .map(|record| record.original_url.clone()))
    }

    async fn ping(&self) -> RepositoryResult<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn insert_and_find() {
        let repo = InMemoryShortUrlRepository::new();

        let record = repo
            .insert(NewShortUrl::new("abc123", "https://example.com"))
            .await
            .unwrap();
        assert_eq!(record.short_id, "abc123");

        let url = repo.find_original_url("abc123").await.unwrap();
        assert_eq!(url.as_deref(), Some("https://example.com"));
    }

    #[tokio::test]
    async fn find_nonexistent() {
        let repo = InMemoryShortUrlRepository::new();

        assert!(repo.find_original_url("nope").await.unwrap().is_none());
        assert!(!repo.exists("nope").await.unwrap());
    }

    #[tokio::test]
    async fn insert_duplicate_keeps_first_record() {
        let repo = InMemoryShortUrlRepository::new();

        repo.insert(NewShortUrl::new("abc123", "https://first.com"))
            .await
            .unwrap();

        let err = repo
            .insert(NewShortUrl::new("abc123", "https://second.com"))
            .await
            .unwrap_err();

        assert!(matches!(err, RepositoryError::DuplicateShortId(ref id) if id == "abc123"));
        assert_eq!(repo.len(), 1);
        assert_eq!(
            repo.find_original_url("abc123").await.unwrap().as_deref(),
            Some("https://first.com")
        );
    }

    #[tokio::test]
    async fn same_url_under_different_ids() {
        let repo = InMemoryShortUrlRepository::new();

        repo.insert(NewShortUrl::new("one", "https://example.com"))
            .await
            .unwrap();
        repo.insert(NewShortUrl::new("two", "https://example.com"))
            .await
            .unwrap();

        assert_eq!(repo.len(), 2);
        assert!(repo.exists("one").await.unwrap());
        assert!(repo.exists("two").await.unwrap());
    }
}
