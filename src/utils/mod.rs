//! Utility functions for identifier generation, URL validation, and database
//! error handling.
//!
//! - [`id_generator`] - Random short identifier generation
//! - [`url_validator`] - URL parsing and DNS reachability checks
//! - [`db_error`] - Classification of SQLx errors

pub mod db_error;
pub mod id_generator;
pub mod url_validator;
