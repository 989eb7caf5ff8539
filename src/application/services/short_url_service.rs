//! Short URL creation and lookup service.

use std::sync::Arc;

use tracing::{debug, error, warn};

use crate::domain::entities::NewShortUrl;
use crate::domain::repositories::{RepositoryError, ShortUrlRepository};
use crate::error::ShortUrlError;
use crate::utils::id_generator::{IdGenerator, RandomIdGenerator};
use crate::utils::url_validator::{
    HostResolver, SystemResolver, UrlValidationError, ValidatedUrl, validate_url,
};

/// Tuning options for [`ShortUrlService`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ShortenerOptions {
    /// Number of additional candidates tried after a collision.
    ///
    /// `0` disables the pre-write existence check entirely; uniqueness is then
    /// enforced only by the repository's write-time constraint.
    pub retry_count: u32,
    /// When true, the URL's hostname must resolve before anything is stored.
    pub require_dns_check: bool,
}

/// Service owning short URL creation and lookup.
///
/// `create` validates the URL once, reserves an identifier through a bounded
/// retry loop and inserts the record. The repository's unique constraint is
/// the final arbiter between concurrent creators: a lost race is reported as
/// [`ShortUrlError::PersistenceFailure`] and is not retried.
pub struct ShortUrlService {
    repository: Arc<dyn ShortUrlRepository>,
    generator: Arc<dyn IdGenerator>,
    resolver: Arc<dyn HostResolver>,
    options: ShortenerOptions,
}

impl ShortUrlService {
    /// Creates a service using random identifiers and the system resolver.
    pub fn new(repository: Arc<dyn ShortUrlRepository>, options: ShortenerOptions) -> Self {
        Self {
            repository,
            generator: Arc::new(RandomIdGenerator),
            resolver: Arc::new(SystemResolver),
            options,
        }
    }

    /// Replaces the identifier generator.
    pub fn with_generator(mut self, generator: Arc<dyn IdGenerator>) -> Self {
        self.generator = generator;
        self
    }

    /// Replaces the resolver used by the DNS check.
    pub fn with_resolver(mut self, resolver: Arc<dyn HostResolver>) -> Self {
        self.resolver = resolver;
        self
    }

    /// Creates a short URL for `original_url` and returns its identifier.
    ///
    /// The stored URL is exactly the input string.
    ///
    /// # Errors
    ///
    /// - [`ShortUrlError::InvalidUrl`] if the input is not an absolute URL
    /// - [`ShortUrlError::DnsResolutionFailed`] if DNS checking is on and the host does not resolve
    /// - [`ShortUrlError::ExhaustedRetries`] if every candidate collided
    /// - [`ShortUrlError::PersistenceFailure`] on store errors, including a lost race
    pub async fn create(&self, original_url: &str) -> Result<String, ShortUrlError> {
        let validated = self.validate(original_url).await?;
        let short_id = self.reserve_unique_id().await?;

        let new_short_url = NewShortUrl::new(short_id, validated.into_original());

        match self.repository.insert(new_short_url).await {
            Ok(record) => {
                debug!(short_id = %record.short_id, "Short url created");
                Ok(record.short_id)
            }
            Err(RepositoryError::DuplicateShortId(short_id)) => {
                warn!(%short_id, "Lost uniqueness race while saving short url");
                Err(ShortUrlError::PersistenceFailure)
            }
            Err(e) => {
                error!("Failed to save short url: {}", e);
                Err(ShortUrlError::PersistenceFailure)
            }
        }
    }

    /// Returns the original URL for `short_id`, or `None` if it was never issued.
    ///
    /// The identifier is not format-checked; the lookup always reaches the
    /// repository.
    ///
    /// # Errors
    ///
    /// Returns [`ShortUrlError::LookupFailure`] on store errors.
    pub async fn get(&self, short_id: &str) -> Result<Option<String>, ShortUrlError> {
        self.repository
            .find_original_url(short_id)
            .await
            .map_err(|e| {
                error!(%short_id, "Failed to look up short url: {}", e);
                ShortUrlError::LookupFailure
            })
    }

    /// Returns whether the store answers. Used by the health check.
    pub async fn store_reachable(&self) -> bool {
        match self.repository.ping().await {
            Ok(()) => true,
            Err(e) => {
                error!("Store health check failed: {}", e);
                false
            }
        }
    }

    async fn validate(&self, original_url: &str) -> Result<ValidatedUrl, ShortUrlError> {
        validate_url(
            original_url,
            self.options.require_dns_check,
            self.resolver.as_ref(),
        )
        .await
        .map_err(|e| {
            debug!("Rejected url: {}", e);
            match e {
                UrlValidationError::InvalidFormat(_) => ShortUrlError::InvalidUrl,
                UrlValidationError::MissingHost | UrlValidationError::Unresolvable { .. } => {
                    ShortUrlError::DnsResolutionFailed
                }
            }
        })
    }

    /// Picks an identifier not present in the repository.
    ///
    /// Makes at most `retry_count + 1` existence checks. With `retry_count == 0`
    /// no check is made and the first candidate is returned as-is.
    async fn reserve_unique_id(&self) -> Result<String, ShortUrlError> {
        if self.options.retry_count == 0 {
            return Ok(self.generator.generate());
        }

        let mut retries_left = self.options.retry_count;
        loop {
            let candidate = self.generator.generate();

            let taken = self.repository.exists(&candidate).await.map_err(|e| {
                error!("Failed to check short id uniqueness: {}", e);
                ShortUrlError::PersistenceFailure
            })?;

            if !taken {
                return Ok(candidate);
            }

            if retries_left == 0 {
                warn!(
                    retry_count = self.options.retry_count,
                    "Exceeded maximum retry count while generating short id"
                );
                return Err(ShortUrlError::ExhaustedRetries);
            }

            debug!(%candidate, retries_left, "Short id collision, retrying");
            retries_left -= 1;
        }
    }
}
