//! Configuration types for the Animal Rescue client.
//!
//! - [`ClientConfig`]: the endpoint configuration owned by a [`Client`](crate::Client)
//! - [`ClientConfigBuilder`]: a builder for [`ClientConfig`]
//! - [`BaseUrl`]: a validated base endpoint
//! - [`UserAgent`]: a validated `User-Agent` value
//!
//! # Example
//!
//! ```rust
//! use animal_rescue::{BaseUrl, ClientConfig, UserAgent};
//!
//! let config = ClientConfig::builder()
//!     .base_url(BaseUrl::new("https://rescue.example.com/api/").unwrap())
//!     .user_agent(UserAgent::new("rescue-dashboard/2.1").unwrap())
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.base_url().as_str(), "https://rescue.example.com/api/");
//! ```

mod newtypes;

pub use newtypes::{BaseUrl, UserAgent};

use crate::error::ConfigError;

/// Base URL used when none is configured.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8080/";

/// Crate version from Cargo.toml.
pub const SDK_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Endpoint configuration for the Animal Rescue API.
///
/// Holds the base URL, the user agent and the underlying transport. The
/// transport is a [`reqwest::Client`], which is internally reference counted,
/// so cloning a `ClientConfig` shares its connection pool.
#[derive(Clone, Debug)]
pub struct ClientConfig {
    base_url: BaseUrl,
    user_agent: UserAgent,
    http_client: reqwest::Client,
}

impl ClientConfig {
    /// Creates a new builder for constructing a `ClientConfig`.
    #[must_use]
    pub fn builder() -> ClientConfigBuilder {
        ClientConfigBuilder::new()
    }

    /// Returns the base URL.
    #[must_use]
    pub const fn base_url(&self) -> &BaseUrl {
        &self.base_url
    }

    /// Returns the user agent.
    #[must_use]
    pub const fn user_agent(&self) -> &UserAgent {
        &self.user_agent
    }

    /// Returns the underlying HTTP transport.
    #[must_use]
    pub const fn http_client(&self) -> &reqwest::Client {
        &self.http_client
    }

    pub(crate) fn set_base_url(&mut self, base_url: BaseUrl) {
        self.base_url = base_url;
    }
}

// Verify ClientConfig is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ClientConfig>();
};

/// Builder for constructing [`ClientConfig`] instances.
///
/// Every field is optional.
///
/// # Defaults
///
/// - `base_url`: [`DEFAULT_BASE_URL`]
/// - `user_agent`: `animal-rescue-rs/<crate version>`
/// - `http_client`: `reqwest::Client::new()`
#[derive(Debug, Default)]
pub struct ClientConfigBuilder {
    base_url: Option<BaseUrl>,
    user_agent: Option<UserAgent>,
    http_client: Option<reqwest::Client>,
}

impl ClientConfigBuilder {
    /// Creates a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the base URL.
    #[must_use]
    pub fn base_url(mut self, base_url: BaseUrl) -> Self {
        self.base_url = Some(base_url);
        self
    }

    /// Sets the user agent.
    #[must_use]
    pub fn user_agent(mut self, user_agent: UserAgent) -> Self {
        self.user_agent = Some(user_agent);
        self
    }

    /// Sets the HTTP transport, for example one configured with a proxy or
    /// custom TLS roots.
    #[must_use]
    pub fn http_client(mut self, http_client: reqwest::Client) -> Self {
        self.http_client = Some(http_client);
        self
    }

    /// Builds the [`ClientConfig`], filling in defaults for unset fields.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if a default value fails validation. Values set
    /// explicitly were validated when their newtypes were constructed.
    pub fn build(self) -> Result<ClientConfig, ConfigError> {
        let base_url = match self.base_url {
            Some(base_url) => base_url,
            None => BaseUrl::new(DEFAULT_BASE_URL)?,
        };
        let user_agent = match self.user_agent {
            Some(user_agent) => user_agent,
            None => UserAgent::new(format!("animal-rescue-rs/{SDK_VERSION}"))?,
        };

        Ok(ClientConfig {
            base_url,
            user_agent,
            http_client: self.http_client.unwrap_or_default(),
        })
    }
}
