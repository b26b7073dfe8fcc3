//! Validated newtype wrappers for configuration values.
//!
//! These wrappers validate their contents on construction so that a
//! [`ClientConfig`](super::ClientConfig) can only be built from usable values.

use std::fmt;

use reqwest::header::HeaderValue;
use reqwest::Url;

use crate::error::ConfigError;

/// The base endpoint every resource path is resolved against.
///
/// Construction only checks that the value is an absolute URL that can act as
/// a base. Whether its path ends in `/` is checked per request, so that a base
/// URL swapped in later through [`Client::set_base_url`](crate::Client::set_base_url)
/// is held to the same rule.
///
/// # Example
///
/// ```rust
/// use animal_rescue::BaseUrl;
///
/// let base = BaseUrl::new("https://rescue.example.com/api/").unwrap();
/// assert_eq!(base.as_str(), "https://rescue.example.com/api/");
/// assert!(base.has_trailing_slash());
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BaseUrl(Url);

impl BaseUrl {
    /// Parses and validates a base URL.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidBaseUrl`] if the value is not an absolute
    /// URL, or is one that cannot carry a path (such as `mailto:`).
    pub fn new(url: impl AsRef<str>) -> Result<Self, ConfigError> {
        let raw = url.as_ref().trim();
        let parsed = Url::parse(raw).map_err(|e| ConfigError::InvalidBaseUrl {
            url: raw.to_string(),
            reason: e.to_string(),
        })?;
        Self::from_url(parsed)
    }

    /// Wraps an already parsed URL.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidBaseUrl`] if the URL cannot be a base.
    pub fn from_url(url: Url) -> Result<Self, ConfigError> {
        if url.cannot_be_a_base() {
            return Err(ConfigError::InvalidBaseUrl {
                url: url.to_string(),
                reason: "URL cannot be used as a base".to_string(),
            });
        }
        Ok(Self(url))
    }

    /// Returns `true` if the URL path ends in `/`.
    #[must_use]
    pub fn has_trailing_slash(&self) -> bool {
        self.0.path().ends_with('/')
    }

    /// Returns the underlying URL.
    #[must_use]
    pub const fn as_url(&self) -> &Url {
        &self.0
    }

    /// Returns the URL as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl AsRef<str> for BaseUrl {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for BaseUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0.as_str())
    }
}

/// The `User-Agent` sent with every request.
///
/// An empty user agent is accepted and means "send no `User-Agent` header".
///
/// # Example
///
/// ```rust
/// use animal_rescue::UserAgent;
///
/// let ua = UserAgent::new("rescue-dashboard/2.1").unwrap();
/// assert_eq!(ua.as_ref(), "rescue-dashboard/2.1");
/// assert!(UserAgent::new("line\nbreak").is_err());
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UserAgent {
    value: String,
    header: HeaderValue,
}

impl UserAgent {
    /// Creates a validated user agent.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidUserAgent`] if the value contains
    /// characters that are not allowed in an HTTP header.
    pub fn new(user_agent: impl Into<String>) -> Result<Self, ConfigError> {
        let value = user_agent.into();
        let header = HeaderValue::from_str(&value).map_err(|_| ConfigError::InvalidUserAgent {
            user_agent: value.clone(),
        })?;
        Ok(Self { value, header })
    }

    /// Returns `true` if no user agent should be sent.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    pub(crate) const fn header_value(&self) -> &HeaderValue {
        &self.header
    }
}

impl AsRef<str> for UserAgent {
    fn as_ref(&self) -> &str {
        &self.value
    }
}

impl fmt::Display for UserAgent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_accepts_trailing_slash() {
        let base = BaseUrl::new("http://localhost:8080/v1/").unwrap();
        assert!(base.has_trailing_slash());
        assert_eq!(base.as_url().path(), "/v1/");
    }

    #[test]
    fn test_base_url_without_trailing_slash_is_constructible() {
        let base = BaseUrl::new("http://localhost:8080/v1").unwrap();
        assert!(!base.has_trailing_slash());
    }

    #[test]
    fn test_bare_host_gets_root_path() {
        let base = BaseUrl::new("http://localhost:8080").unwrap();
        assert!(base.has_trailing_slash());
        assert_eq!(base.as_str(), "http://localhost:8080/");
    }

    #[test]
    fn test_base_url_rejects_relative_values() {
        let result = BaseUrl::new("api/v1/");
        assert!(matches!(result, Err(ConfigError::InvalidBaseUrl { .. })));
    }

    #[test]
    fn test_base_url_rejects_cannot_be_a_base() {
        let result = BaseUrl::new("mailto:rescue@example.com");
        assert!(matches!(result, Err(ConfigError::InvalidBaseUrl { .. })));
    }

    #[test]
    fn test_user_agent_rejects_control_characters() {
        let result = UserAgent::new("bad\r\nagent");
        assert!(matches!(
            result,
            Err(ConfigError::InvalidUserAgent { user_agent }) if user_agent == "bad\r\nagent"
        ));
    }

    #[test]
    fn test_empty_user_agent_is_allowed() {
        let ua = UserAgent::new("").unwrap();
        assert!(ua.is_empty());
    }
}
