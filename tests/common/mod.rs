#![allow(dead_code)]

use async_trait::async_trait;
use short_url::application::services::{ShortUrlService, ShortenerOptions};
use short_url::domain::entities::{NewShortUrl, ShortUrl};
use short_url::domain::repositories::{RepositoryError, RepositoryResult, ShortUrlRepository};
use short_url::infrastructure::persistence::InMemoryShortUrlRepository;
use short_url::state::AppState;
use short_url::utils::id_generator::{IdGenerator, generate_id};
use short_url::utils::url_validator::HostResolver;
use std::collections::VecDeque;
use std::io;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use tokio::sync::Barrier;

/// Hands out a fixed list of ids, then falls back to random ones.
pub struct ScriptedGenerator {
    ids: Mutex<VecDeque<String>>,
}

impl ScriptedGenerator {
    pub fn new(ids: &[&str]) -> Self {
        Self {
            ids: Mutex::new(ids.iter().map(|id| id.to_string()).collect()),
        }
    }
}

impl IdGenerator for ScriptedGenerator {
    fn generate(&self) -> String {
        self.ids
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(generate_id)
    }
}

/// Always returns the same id.
pub struct FixedGenerator(pub &'static str);

impl IdGenerator for FixedGenerator {
    fn generate(&self) -> String {
        self.0.to_string()
    }
}

/// In-memory repository that counts calls to each operation.
///
/// With a barrier configured, `exists` waits until the given number of callers
/// have reached it, which lines up concurrent creators before either writes.
#[derive(Default)]
pub struct CountingRepository {
    pub inner: InMemoryShortUrlRepository,
    pub exists_calls: AtomicUsize,
    pub insert_calls: AtomicUsize,
    pub find_calls: AtomicUsize,
    exists_barrier: Option<Barrier>,
}

impl CountingRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_exists_barrier(parties: usize) -> Self {
        Self {
            exists_barrier: Some(Barrier::new(parties)),
            ..Self::default()
        }
    }

    pub fn exists_calls(&self) -> usize {
        self.exists_calls.load(Ordering::SeqCst)
    }

    pub fn insert_calls(&self) -> usize {
        self.insert_calls.load(Ordering::SeqCst)
    }

    pub fn find_calls(&self) -> usize {
        self.find_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ShortUrlRepository for CountingRepository {
    async fn insert(&self, new_short_url: NewShortUrl) -> RepositoryResult<ShortUrl> {
        self.insert_calls.fetch_add(1, Ordering::SeqCst);
        self.inner.insert(new_short_url).await
    }

    async fn exists(&self, short_id: &str) -> RepositoryResult<bool> {
        self.exists_calls.fetch_add(1, Ordering::SeqCst);
        let exists = self.inner.exists(short_id).await?;
        if let Some(barrier) = &self.exists_barrier {
            barrier.wait().await;
        }
        Ok(exists)
    }

    async fn find_original_url(&self, short_id: &str) -> RepositoryResult<Option<String>> {
        self.find_calls.fetch_add(1, Ordering::SeqCst);
        self.inner.find_original_url(short_id).await
    }

    async fn ping(&self) -> RepositoryResult<()> {
        self.inner.ping().await
    }
}

/// Repository whose every operation fails, as if the database were down.
pub struct UnavailableRepository;

#[async_trait]
impl ShortUrlRepository for UnavailableRepository {
    async fn insert(&self, _new_short_url: NewShortUrl) -> RepositoryResult<ShortUrl> {
        Err(RepositoryError::Database(sqlx::Error::PoolTimedOut))
    }

    async fn exists(&self, _short_id: &str) -> RepositoryResult<bool> {
        Err(RepositoryError::Database(sqlx::Error::PoolTimedOut))
    }

    async fn find_original_url(&self, _short_id: &str) -> RepositoryResult<Option<String>> {
        Err(RepositoryError::Database(sqlx::Error::PoolTimedOut))
    }

    async fn ping(&self) -> RepositoryResult<()> {
        Err(RepositoryError::Database(sqlx::Error::PoolTimedOut))
    }
}

/// Resolver that knows a fixed set of hostnames.
pub struct StaticResolver {
    known_hosts: Vec<String>,
}

impl StaticResolver {
    pub fn new(known_hosts: &[&str]) -> Self {
        Self {
            known_hosts: known_hosts.iter().map(|h| h.to_string()).collect(),
        }
    }
}

#[async_trait]
impl HostResolver for StaticResolver {
    async fn resolve(&self, host: &str, _port: u16) -> io::Result<()> {
        if self.known_hosts.iter().any(|h| h == host) {
            Ok(())
        } else {
            Err(io::Error::new(io::ErrorKind::NotFound, "unknown host"))
        }
    }
}

pub fn create_test_service(
    repository: Arc<dyn ShortUrlRepository>,
    options: ShortenerOptions,
) -> ShortUrlService {
    ShortUrlService::new(repository, options).with_resolver(Arc::new(StaticResolver::new(&[
        "example.com",
        "www.example.com",
    ])))
}

pub fn create_test_state(repository: Arc<dyn ShortUrlRepository>) -> AppState {
    let service = create_test_service(repository, ShortenerOptions::default());
    AppState::new(Arc::new(service))
}

pub fn create_test_state_with_service(service: ShortUrlService) -> AppState {
    AppState::new(Arc::new(service))
}
