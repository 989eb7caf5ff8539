//! Repository trait definitions for the domain layer.
//!
//! - Traits define the contract for data operations
//! - Implementations live in `crate::infrastructure::persistence`
//! - Mock implementations are auto-generated via `mockall` for testing

pub mod short_url_repository;

pub use short_url_repository::{RepositoryError, RepositoryResult, ShortUrlRepository};

#[cfg(test)]
pub use short_url_repository::MockShortUrlRepository;
