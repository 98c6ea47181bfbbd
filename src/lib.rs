//! Endpoint URLs for exercising the multi-cloud storage service's REST API
//! from a test suite.
//!
//! The service address comes from `HOST_IP`, `PORT` and `PORT_TENANT_ID`:
//!
//! ```
//! use multicloud_testhelper::Configuration;
//!
//! let config = Configuration::new("example.com", ":8090", ":8089");
//! assert_eq!(config.types_url("t1"), "http://example.com:8089/t1/types");
//! assert_eq!(config.list_bucket_url(), "http://example.com:8090/");
//! ```
pub mod config;
pub mod constants;
pub mod errors;
mod urls;

pub use config::{instance, Configuration};
pub use errors::ConfigError;
