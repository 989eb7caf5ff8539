//! Core domain entities.
//!
//! - [`ShortUrl`] - A stored short url record
//! - [`NewShortUrl`] - Input for creating one

pub mod short_url;

pub use short_url::{NewShortUrl, ShortUrl};
