//! Short identifier generation.
//!
//! Produces random URL-safe tokens. Generators know nothing about the store;
//! collision handling is the job of
//! [`crate::application::services::ShortUrlService`].

use base64::Engine as _;

/// Length of random bytes before base64 encoding.
const ID_LENGTH_BYTES: usize = 9;

/// Source of candidate short identifiers.
///
/// Implementations must always return a token and must only emit characters
/// from the URL-safe base64 alphabet (`A-Z a-z 0-9 - _`).
#[cfg_attr(test, mockall::automock)]
pub trait IdGenerator: Send + Sync {
    fn generate(&self) -> String;
}

/// Generator backed by the operating system's random number generator.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomIdGenerator;

impl IdGenerator for RandomIdGenerator {
    fn generate(&self) -> String {
        generate_id()
    }
}

/// Generates a random short identifier.
///
/// Uses `getrandom` for entropy and encodes the result as URL-safe base64
/// without padding, producing a 12-character token.
///
/// # Panics
///
/// Panics if the system random number generator fails (extremely rare).
pub fn generate_id() -> String {
    let mut buffer = [0u8; ID_LENGTH_BYTES];

    getrandom::fill(&mut buffer).expect("Failed to generate random bytes");

    base64::engine::general_purpose::URL_SAFE_NO_PAD.encode(buffer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_generate_id_has_correct_length() {
        assert_eq!(generate_id().len(), 12);
    }

    #[test]
    fn test_generate_id_url_safe_characters() {
        let id = generate_id();
        assert!(id.chars().all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_'));
        assert!(!id.contains('='));
    }

    #[test]
    fn test_random_generator_produces_distinct_ids() {
        let generator = RandomIdGenerator;
        let ids: HashSet<String> = (0..1000).map(|_| generator.generate()).collect();

        assert_eq!(ids.len(), 1000);
    }
}
