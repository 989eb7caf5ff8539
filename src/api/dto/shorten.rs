//! DTOs for the short url endpoints.

use serde::{Deserialize, Serialize};

/// Request to shorten a URL.
///
/// Accepted both as JSON and as an urlencoded form. A missing `url` is treated
/// like any other malformed URL.
#[derive(Debug, Default, Deserialize)]
pub struct ShortenRequest {
    #[serde(default)]
    pub url: Option<String>,
}

/// Successful shortening result.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ShortenResponse {
    /// The URL exactly as submitted.
    pub original_url: String,
    /// The short identifier to use with `GET /api/shorturl/{short_id}`.
    pub short_url: String,
}

/// Response of the `/api/hello` endpoint.
#[derive(Debug, Serialize)]
pub struct HelloResponse {
    pub greeting: &'static str,
}
