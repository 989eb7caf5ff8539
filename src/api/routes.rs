//! API route configuration.

use crate::api::handlers::{hello_handler, redirect_handler, shorten_handler};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// Routes mounted under `/api`.
///
/// # Endpoints
///
/// - `GET  /hello`                - Greeting, useful as a smoke test
/// - `POST /shorturl/new`         - Create a short url (JSON or form body)
/// - `GET  /shorturl/{short_id}`  - Redirect to the original url
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/hello", get(hello_handler))
        .route("/shorturl/new", post(shorten_handler))
        .route("/shorturl/{short_id}", get(redirect_handler))
}
