//! Handler for short url redirects.

use axum::{
    extract::{Path, State},
    http::{HeaderValue, StatusCode, header},
    response::IntoResponse,
};
use tracing::debug;
use url::Url;

use crate::error::AppError;
use crate::state::AppState;

/// Redirects a short identifier to its original URL.
///
/// # Endpoint
///
/// `GET /api/shorturl/{short_id}`
///
/// # Responses
///
/// - 307 Temporary Redirect to the stored URL
/// - 404 Not Found if the identifier was never issued
/// - 500 Internal Server Error if the lookup failed
pub async fn redirect_handler(
    Path(short_id): Path<String>,
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let original_url = state
        .short_url_service
        .get(&short_id)
        .await?
        .ok_or_else(|| AppError::not_found("Not Found"))?;

    debug!(%short_id, "Redirecting");

    let location = location_header(&original_url)?;

    Ok((StatusCode::TEMPORARY_REDIRECT, [(header::LOCATION, location)]))
}

/// Builds a `Location` value for a stored URL.
///
/// URLs are stored verbatim, so they may contain characters a header should
/// not carry (non-ASCII hosts or paths, control characters). Those are sent in
/// their serialized, percent-encoded form instead.
fn location_header(original_url: &str) -> Result<HeaderValue, AppError> {
    if original_url.is_ascii()
        && let Ok(value) = HeaderValue::from_str(original_url)
    {
        return Ok(value);
    }

    Url::parse(original_url)
        .ok()
        .and_then(|url| HeaderValue::from_str(url.as_str()).ok())
        .ok_or_else(|| {
            AppError::internal(
                "invalid_redirect_target",
                "Stored url cannot be used as a redirect target.",
            )
        })
}
