//! Short URL entity mapping a short identifier to its original URL.

use chrono::{DateTime, Utc};

/// A persisted short URL record.
///
/// Records are written once and never updated; `short_id` is unique across
/// the whole collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortUrl {
    pub short_id: String,
    pub original_url: String,
    pub created_at: DateTime<Utc>,
}

impl ShortUrl {
    /// Creates a new ShortUrl instance.
    pub fn new(short_id: String, original_url: String, created_at: DateTime<Utc>) -> Self {
        Self {
            short_id,
            original_url,
            created_at,
        }
    }
}

/// Input data for inserting a new short URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewShortUrl {
    pub short_id: String,
    pub original_url: String,
}

impl NewShortUrl {
    pub fn new(short_id: impl Into<String>, original_url: impl Into<String>) -> Self {
        Self {
            short_id: short_id.into(),
            original_url: original_url.into(),
        }
    }
}
