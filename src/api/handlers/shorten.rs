//! Handler for the short url creation endpoint.

use axum::{
    Form, Json,
    body::{Body, Bytes},
    extract::{FromRequest, Request, State},
    http::{Method, header::CONTENT_TYPE},
};
use std::fmt::Display;
use tracing::debug;

use crate::api::dto::shorten::{ShortenRequest, ShortenResponse};
use crate::error::AppError;
use crate::state::AppState;

const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BodyKind {
    Json,
    Form,
    Other,
}

impl BodyKind {
    fn of(req: &Request) -> Self {
        let content_type = req
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default();

        if content_type.starts_with("application/json") {
            Self::Json
        } else if content_type.starts_with(FORM_CONTENT_TYPE) {
            Self::Form
        } else {
            Self::Other
        }
    }
}

/// Request body extractor accepting JSON or urlencoded forms.
///
/// An empty body, or one of any other content type, yields a request without
/// a `url`, which the service then rejects as an invalid URL.
#[derive(Debug)]
pub struct ShortenPayload(pub ShortenRequest);

impl<S> FromRequest<S> for ShortenPayload
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let kind = BodyKind::of(&req);
        let body = Bytes::from_request(req, state).await.map_err(invalid_body)?;

        if body.is_empty() {
            return Ok(Self(ShortenRequest::default()));
        }

        match kind {
            BodyKind::Json => {
                let Json(payload) =
                    Json::<ShortenRequest>::from_bytes(&body).map_err(invalid_body)?;
                Ok(Self(payload))
            }
            BodyKind::Form => {
                let req = Request::builder()
                    .method(Method::POST)
                    .header(CONTENT_TYPE, FORM_CONTENT_TYPE)
                    .body(Body::from(body))
                    .map_err(invalid_body)?;
                let Form(payload) = Form::<ShortenRequest>::from_request(req, state)
                    .await
                    .map_err(invalid_body)?;
                Ok(Self(payload))
            }
            BodyKind::Other => Ok(Self(ShortenRequest::default())),
        }
    }
}

fn invalid_body(e: impl Display) -> AppError {
    debug!("Rejected request body: {}", e);
    AppError::bad_request("invalid_body", "Invalid request body.")
}

/// Creates a short url.
///
/// # Endpoint
///
/// `POST /api/shorturl/new`
///
/// # Request Body
///
/// ```json
/// { "url": "https://example.com/some/long/path" }
/// ```
///
/// or `url=https%3A%2F%2Fexample.com%2Fsome%2Flong%2Fpath` as a form.
///
/// # Response
///
/// ```json
/// {
///   "original_url": "https://example.com/some/long/path",
///   "short_url": "Xb3kQ9_aLm2p"
/// }
/// ```
///
/// # Errors
///
/// - 400 `invalid_url` / `dns_resolution_failed` for rejected URLs
/// - 400 `invalid_body` for a JSON or form body that does not parse
/// - 503 `exhausted_retries` / `persistence_failure` for transient failures
pub async fn shorten_handler(
    State(state): State<AppState>,
    ShortenPayload(payload): ShortenPayload,
) -> Result<Json<ShortenResponse>, AppError> {
    let original_url = payload.url.unwrap_or_default();

    let short_id = state.short_url_service.create(&original_url).await?;

    Ok(Json(ShortenResponse {
        original_url,
        short_url: short_id,
    }))
}
