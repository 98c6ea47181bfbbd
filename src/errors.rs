//! Errors returned when loading the configuration strictly.
use thiserror::Error;

/// Reasons the environment does not describe a usable service address.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The variable is unset or empty.
    #[error("{0} not provided in environment variables")]
    Missing(&'static str),
    /// The variable is set but is not valid unicode.
    #[error("{0} is not valid unicode")]
    NotUnicode(&'static str),
    /// A port segment is not `:` followed by a port number.
    #[error("{name} must be ':' followed by a port number, got {value:?}")]
    InvalidPortSegment {
        /// The variable holding the segment.
        name: &'static str,
        /// The rejected segment.
        value: String,
    },
    /// The base URL, alone or with a port segment appended, could not be parsed.
    #[error("Base URL {url:?} is not a valid URL")]
    InvalidBaseUrl {
        /// The offending base URL.
        url: String,
        /// The underlying parse failure.
        #[source]
        source: url::ParseError,
    },
}
