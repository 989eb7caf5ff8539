//! URL validation performed before a short URL is stored.
//!
//! Parsing is synchronous. The optional reachability check resolves the
//! hostname through a [`HostResolver`], which is asynchronous and only
//! suspends the calling task.

use async_trait::async_trait;
use std::io;
use url::{Host, Url};

/// Errors that can occur during URL validation.
#[derive(Debug, thiserror::Error)]
pub enum UrlValidationError {
    #[error("Invalid URL format: {0}")]
    InvalidFormat(String),

    #[error("URL has no host to resolve")]
    MissingHost,

    #[error("Failed to resolve host '{host}': {source}")]
    Unresolvable {
        host: String,
        #[source]
        source: io::Error,
    },
}

/// A URL that passed validation.
///
/// Keeps the caller's string untouched next to the parsed form: the original
/// is what gets persisted, so no normalization leaks into storage.
#[derive(Debug, Clone)]
pub struct ValidatedUrl {
    parsed: Url,
    original: String,
}

impl ValidatedUrl {
    pub fn into_original(self) -> String {
        self.original
    }
}

/// Hostname resolution used by the DNS reachability check.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait HostResolver: Send + Sync {
    /// Resolves `host`, failing if it yields no address.
    async fn resolve(&self, host: &str, port: u16) -> io::Result<()>;
}

/// Resolver backed by the system resolver via tokio.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemResolver;

#[async_trait]
impl HostResolver for SystemResolver {
    async fn resolve(&self, host: &str, port: u16) -> io::Result<()> {
        let mut addrs = tokio::net::lookup_host((host, port)).await?;

        if addrs.next().is_none() {
            return Err(io::Error::new(
                io::ErrorKind::NotFound,
                "no addresses returned",
            ));
        }

        Ok(())
    }
}

/// Parses `input` as an absolute URL.
///
/// Any scheme is accepted as long as the string is a well-formed absolute
/// URL. Relative references, bare hostnames and empty strings are rejected.
///
/// # Errors
///
/// Returns [`UrlValidationError::InvalidFormat`] for malformed input.
pub fn parse_url(input: &str) -> Result<ValidatedUrl, UrlValidationError> {
    let parsed = Url::parse(input).map_err(|e| UrlValidationError::InvalidFormat(e.to_string()))?;

    Ok(ValidatedUrl {
        parsed,
        original: input.to_string(),
    })
}

/// Validates `input`, optionally checking that its hostname resolves.
///
/// IP-literal hosts are accepted without a lookup. When the check is enabled a
/// URL without any host (such as `mailto:`) cannot be resolved and is rejected.
///
/// # Errors
///
/// - [`UrlValidationError::InvalidFormat`] if parsing fails
/// - [`UrlValidationError::MissingHost`] if DNS checking is on and there is no host
/// - [`UrlValidationError::Unresolvable`] if DNS checking is on and resolution fails
pub async fn validate_url(
    input: &str,
    require_dns_check: bool,
    resolver: &dyn HostResolver,
) -> Result<ValidatedUrl, UrlValidationError> {
    let validated = parse_url(input)?;

    if !require_dns_check {
        return Ok(validated);
    }

    let port = validated.parsed.port_or_known_default().unwrap_or(0);
    match validated.parsed.host() {
        Some(Host::Domain(domain)) if !domain.is_empty() => {
            resolver
                .resolve(domain, port)
                .await
                .map_err(|source| UrlValidationError::Unresolvable {
                    host: domain.to_string(),
                    source,
                })?;
        }
        Some(Host::Ipv4(_)) | Some(Host::Ipv6(_)) => {}
        _ => return Err(UrlValidationError::MissingHost),
    }

    Ok(validated)
}
