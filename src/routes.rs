//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET  /`          - Landing page
//! - `GET  /health`    - Health check
//! - `/api/*`          - Short url API
//! - `/public/*`       - Static assets
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **CORS** - Any origin may call the API
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::handlers::health_handler;
use crate::api::middleware::tracing;
use crate::state::AppState;
use axum::Router;
use axum::routing::get;
use tower::Layer;
use tower_http::cors::CorsLayer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};
use tower_http::services::{ServeDir, ServeFile};

/// Locations of the files served next to the API.
#[derive(Debug, Clone)]
pub struct StaticAssets {
    pub static_dir: String,
    pub index_file: String,
}

impl Default for StaticAssets {
    fn default() -> Self {
        Self {
            static_dir: "public".to_string(),
            index_file: "views/index.html".to_string(),
        }
    }
}

/// Constructs the application router with all routes and middleware.
pub fn app_router(state: AppState, assets: &StaticAssets) -> NormalizePath<Router> {
    let router = Router::new()
        .route_service("/", ServeFile::new(&assets.index_file))
        .route("/health", get(health_handler))
        .nest("/api", api::routes::api_routes())
        .nest_service("/public", ServeDir::new(&assets.static_dir))
        .with_state(state)
        .layer(CorsLayer::permissive())
        .layer(tracing::layer());

    NormalizePathLayer::trim_trailing_slash().layer(router)
}
