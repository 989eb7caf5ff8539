//! Infrastructure layer for external integrations.
//!
//! # Modules
//!
//! - [`persistence`] - Short url store implementations

pub mod persistence;
