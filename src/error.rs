//! Error types shared across layers.
//!
//! [`ShortUrlError`] is the taxonomy the short-url core reports to its callers.
//! [`AppError`] is its HTTP rendering, used by the API handlers.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

/// Failures reported by [`crate::application::services::ShortUrlService`].
///
/// Every infrastructure error is logged where it happens and converted into
/// one of these kinds, so no driver error ever crosses the service boundary.
/// A missing record is not an error: `get` returns `Ok(None)` for it.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ShortUrlError {
    /// The input could not be parsed as an absolute URL.
    #[error("Invalid url.")]
    InvalidUrl,

    /// DNS checking is enabled and the hostname did not resolve.
    #[error("Invalid url.")]
    DnsResolutionFailed,

    /// Every generated candidate collided with an existing record.
    #[error("Error generating shortened url ID, please try again.")]
    ExhaustedRetries,

    /// The store rejected or failed the write, including a lost uniqueness race.
    #[error("Unexpected system failure, please try again later.")]
    PersistenceFailure,

    /// The store failed while answering a lookup.
    #[error("Unexpected failure retrieving original url.")]
    LookupFailure,
}

impl ShortUrlError {
    /// Machine-readable code used in JSON error bodies.
    pub fn code(&self) -> &'static str {
        match self {
            Self::InvalidUrl => "invalid_url",
            Self::DnsResolutionFailed => "dns_resolution_failed",
            Self::ExhaustedRetries => "exhausted_retries",
            Self::PersistenceFailure => "persistence_failure",
            Self::LookupFailure => "lookup_failure",
        }
    }
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    error: ErrorInfo,
}

/// Error payload rendered inside the `error` field of a response body.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ErrorInfo {
    pub code: &'static str,
    pub message: String,
}

/// HTTP-facing error.
#[derive(Debug)]
pub enum AppError {
    Validation { code: &'static str, message: String },
    NotFound { message: String },
    Unavailable { code: &'static str, message: String },
    Internal { code: &'static str, message: String },
}

impl AppError {
    pub fn bad_request(code: &'static str, message: impl Into<String>) -> Self {
        Self::Validation {
            code,
            message: message.into(),
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
        }
    }

    pub fn unavailable(code: &'static str, message: impl Into<String>) -> Self {
        Self::Unavailable {
            code,
            message: message.into(),
        }
    }

    pub fn internal(code: &'static str, message: impl Into<String>) -> Self {
        Self::Internal {
            code,
            message: message.into(),
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Validation { .. } => StatusCode::BAD_REQUEST,
            AppError::NotFound { .. } => StatusCode::NOT_FOUND,
            AppError::Unavailable { .. } => StatusCode::SERVICE_UNAVAILABLE,
            AppError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn to_error_info(&self) -> ErrorInfo {
        match self {
            AppError::Validation { code, message }
            | AppError::Unavailable { code, message }
            | AppError::Internal { code, message } => ErrorInfo {
                code: *code,
                message: message.clone(),
            },
            AppError::NotFound { message } => ErrorInfo {
                code: "not_found",
                message: message.clone(),
            },
        }
    }
}

impl From<ShortUrlError> for AppError {
    fn from(err: ShortUrlError) -> Self {
        let code = err.code();
        let message = err.to_string();
        match err {
            ShortUrlError::InvalidUrl | ShortUrlError::DnsResolutionFailed => {
                AppError::bad_request(code, message)
            }
            ShortUrlError::ExhaustedRetries | ShortUrlError::PersistenceFailure => {
                AppError::unavailable(code, message)
            }
            ShortUrlError::LookupFailure => AppError::internal(code, message),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = ErrorBody {
            error: self.to_error_info(),
        };

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_url_message_is_verbatim() {
        assert_eq!(ShortUrlError::InvalidUrl.to_string(), "Invalid url.");
    }

    #[test]
    fn test_validation_errors_map_to_bad_request() {
        let err = AppError::from(ShortUrlError::InvalidUrl);
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        assert_eq!(err.to_error_info().code, "invalid_url");

        let err = AppError::from(ShortUrlError::DnsResolutionFailed);
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        assert_eq!(err.to_error_info().code, "dns_resolution_failed");
    }

    #[test]
    fn test_transient_errors_map_to_service_unavailable() {
        let err = AppError::from(ShortUrlError::ExhaustedRetries);
        assert_eq!(err.status(), StatusCode::SERVICE_UNAVAILABLE);
        assert!(err.to_error_info().message.contains("please try again"));

        let err = AppError::from(ShortUrlError::PersistenceFailure);
        assert_eq!(err.status(), StatusCode::SERVICE_UNAVAILABLE);
        assert!(err.to_error_info().message.contains("try again later"));
    }

    #[test]
    fn test_lookup_failure_maps_to_internal_error() {
        let err = AppError::from(ShortUrlError::LookupFailure);
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.to_error_info().code, "lookup_failure");
    }

    #[test]
    fn test_not_found_code() {
        let err = AppError::not_found("Not Found");
        assert_eq!(err.status(), StatusCode::NOT_FOUND);
        assert_eq!(err.to_error_info().code, "not_found");
    }
}
