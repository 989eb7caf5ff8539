//! Data Transfer Objects for API requests and responses.
//!
//! All DTOs use Serde for JSON and form (de)serialization.

pub mod health;
pub mod shorten;
