//! Configuration error types for the Animal Rescue client.
//!
//! Configuration constructors return `Result<T, ConfigError>` so that invalid
//! values are rejected as early as possible. The trailing-slash rule on the
//! base URL is the one exception: it is re-checked on every request (see
//! [`crate::clients::Client::new_request`]) and surfaces as
//! [`crate::clients::HttpError::Configuration`].
//!
//! # Example
//!
//! ```rust
//! use animal_rescue::{BaseUrl, ConfigError};
//!
//! let result = BaseUrl::new("not a url");
//! assert!(matches!(result, Err(ConfigError::InvalidBaseUrl { .. })));
//! ```

use thiserror::Error;

/// Errors that can occur while configuring the client.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// The base URL could not be parsed as an absolute URL.
    #[error("Invalid base URL '{url}': {reason}. Please provide an absolute URL such as 'http://localhost:8080/'.")]
    InvalidBaseUrl {
        /// The value that was provided.
        url: String,
        /// Why parsing failed.
        reason: String,
    },

    /// The base URL path does not end in `/`, so relative resource paths
    /// would replace its last segment instead of extending it.
    #[error("Base URL must have a trailing slash, but '{url}' does not.")]
    MissingTrailingSlash {
        /// The offending base URL.
        url: String,
    },

    /// The user agent cannot be sent as an HTTP header value.
    #[error("Invalid user agent '{user_agent}'. User agents must be visible ASCII.")]
    InvalidUserAgent {
        /// The value that was provided.
        user_agent: String,
    },
}
