//! REST API layer for HTTP request/response handling.
//!
//! Translates HTTP requests into calls on
//! [`crate::application::services::ShortUrlService`] and renders its outcomes.
//!
//! # Modules
//!
//! - [`dto`] - Data Transfer Objects for request/response serialization
//! - [`handlers`] - HTTP request handlers
//! - [`middleware`] - Request processing middleware
//! - [`routes`] - Route configuration and composition

pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod routes;
