//! HTTP response types for the Animal Rescue client.

use std::ops::{Deref, DerefMut};

use reqwest::header::HeaderMap;
use reqwest::Url;

use crate::clients::http_request::HttpMethod;

/// A response from the Animal Rescue API.
///
/// The transport body has already been drained by the time a caller sees
/// this value; `body` holds the bytes that were read, so inspecting them
/// never races with connection reuse. When the body was streamed into a
/// caller-supplied sink, `body` is empty.
#[derive(Clone, Debug)]
pub struct HttpResponse {
    /// The method of the request that produced this response.
    pub method: HttpMethod,
    /// The URL the request was sent to. A password in the URL is replaced
    /// with `xxxxx`.
    pub url: Url,
    /// The HTTP status code.
    pub status: u16,
    /// Response headers.
    pub headers: HeaderMap,
    /// The raw response body.
    pub body: Vec<u8>,
}

impl HttpResponse {
    /// Returns `true` if the status code is in the 2xx range.
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        self.status >= 200 && self.status <= 299
    }

    /// Returns the body decoded as UTF-8, replacing invalid sequences.
    #[must_use]
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }
}

/// Decoded data together with the response it came from.
///
/// Derefs to the data, so fields of a fetched resource can be read directly.
///
/// # Example
///
/// ```rust,ignore
/// let adoptee = client.adoptees().get(&ctx, 7).await?;
/// println!("{:?} answered with {}", adoptee.name, adoptee.response.status);
/// let adoptee = adoptee.into_inner();
/// ```
#[derive(Clone, Debug)]
pub struct ApiResponse<T> {
    /// The decoded body.
    pub data: T,
    /// The response the data was decoded from.
    pub response: HttpResponse,
}

impl<T> ApiResponse<T> {
    /// Pairs decoded data with its response.
    #[must_use]
    pub const fn new(data: T, response: HttpResponse) -> Self {
        Self { data, response }
    }

    /// Discards the response and returns the data.
    #[must_use]
    pub fn into_inner(self) -> T {
        self.data
    }

    /// Transforms the data, keeping the response.
    #[must_use]
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> ApiResponse<U> {
        ApiResponse {
            data: f(self.data),
            response: self.response,
        }
    }
}

impl<T: Default> ApiResponse<Option<T>> {
    /// Replaces missing data (an empty success body) with `T::default()`.
    #[must_use]
    pub fn or_default(self) -> ApiResponse<T> {
        self.map(Option::unwrap_or_default)
    }
}

impl<T> Deref for ApiResponse<T> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.data
    }
}

impl<T> DerefMut for ApiResponse<T> {
    fn deref_mut(&mut self) -> &mut T {
        &mut self.data
    }
}
