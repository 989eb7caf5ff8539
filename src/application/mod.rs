//! Application layer services implementing business logic.
//!
//! Services consume repository traits and provide a clean API for HTTP
//! handlers.
//!
//! # Available Services
//!
//! - [`services::short_url_service::ShortUrlService`] - Short url creation and lookup

pub mod services;
