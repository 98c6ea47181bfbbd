//! Constants (environment variable names and API paths) used across the crate.
pub mod api;
pub mod env;
