//! HTTP request types for the Animal Rescue client.
//!
//! Requests are built by [`Client::new_request`](crate::Client::new_request),
//! which resolves the path and encodes the body; this module only holds the
//! resulting value and the helpers it is assembled from.

use std::fmt;

use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, CONTENT_TYPE, USER_AGENT};
use reqwest::Url;
use serde::Serialize;

use crate::clients::errors::HttpError;
use crate::config::{BaseUrl, UserAgent};
use crate::error::ConfigError;

const APPLICATION_JSON: &str = "application/json";

/// Placeholder written over URL passwords before a URL is logged or surfaced.
const REDACTED_PASSWORD: &str = "xxxxx";

/// HTTP methods used by the Animal Rescue API.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum HttpMethod {
    /// List or fetch resources.
    Get,
    /// Create a resource.
    Post,
    /// Partially edit a resource.
    Patch,
    /// Remove a resource.
    Delete,
}

impl HttpMethod {
    /// Returns the method name as sent on the wire.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Patch => "PATCH",
            Self::Delete => "DELETE",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<HttpMethod> for reqwest::Method {
    fn from(method: HttpMethod) -> Self {
        match method {
            HttpMethod::Get => Self::GET,
            HttpMethod::Post => Self::POST,
            HttpMethod::Patch => Self::PATCH,
            HttpMethod::Delete => Self::DELETE,
        }
    }
}

/// A fully-formed request, ready for execution.
///
/// Requests are single use: executing one consumes it.
#[derive(Clone, Debug)]
pub struct HttpRequest {
    /// The HTTP method.
    pub method: HttpMethod,
    /// The resolved absolute URL.
    pub url: Url,
    /// Headers to send.
    pub headers: HeaderMap,
    /// The JSON-encoded body, if any.
    pub body: Option<Vec<u8>>,
}

impl HttpRequest {
    pub(crate) fn into_reqwest(self) -> reqwest::Request {
        let mut request = reqwest::Request::new(self.method.into(), self.url);
        *request.headers_mut() = self.headers;
        if let Some(body) = self.body {
            *request.body_mut() = Some(body.into());
        }
        request
    }
}

/// Resolves `path` against `base`.
///
/// Resolution follows RFC 3986 reference resolution rather than string
/// concatenation, so the base's scheme, host and path prefix are kept and a
/// relative path is appended after the base's last `/`.
///
/// # Errors
///
/// Returns [`HttpError::Configuration`] if the base path does not end in `/`,
/// and [`HttpError::Parse`] if `path` is not a valid URL reference.
pub fn resolve_url(base: &BaseUrl, path: &str) -> Result<Url, HttpError> {
    if !base.has_trailing_slash() {
        return Err(ConfigError::MissingTrailingSlash {
            url: base.to_string(),
        }
        .into());
    }
    base.as_url().join(path).map_err(|e| HttpError::Parse {
        path: path.to_string(),
        reason: e.to_string(),
    })
}

/// Returns a copy of `url` with any password replaced by a placeholder.
///
/// Every URL that ends up in a log line, an error message or an
/// [`HttpResponse`](crate::HttpResponse) goes through here first.
pub(crate) fn redacted(url: &Url) -> Url {
    let mut url = url.clone();
    if url.password().is_some() {
        // Only fails for URLs that cannot carry credentials.
        let _ = url.set_password(Some(REDACTED_PASSWORD));
    }
    url
}

/// Encodes `body` as JSON.
///
/// `serde_json` never HTML-escapes, so `<`, `>` and `&` are written verbatim.
pub(crate) fn encode_body<B: Serialize + ?Sized>(body: &B) -> Result<Vec<u8>, HttpError> {
    serde_json::to_vec(body).map_err(HttpError::Encoding)
}

/// Builds the standard header set.
pub(crate) fn standard_headers(user_agent: &UserAgent, has_body: bool) -> HeaderMap {
    let mut headers = HeaderMap::new();
    if has_body {
        headers.insert(CONTENT_TYPE, HeaderValue::from_static(APPLICATION_JSON));
    }
    headers.insert(ACCEPT, HeaderValue::from_static(APPLICATION_JSON));
    if !user_agent.is_empty() {
        headers.insert(USER_AGENT, user_agent.header_value().clone());
    }
    headers
}
