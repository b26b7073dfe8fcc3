//! HTTP client for Animal Rescue API communication.
//!
//! [`Client`] owns the endpoint configuration and the transport. Every call
//! goes through the same steps:
//!
//! 1. [`Client::new_request`] resolves the path against the base URL and
//!    encodes the body.
//! 2. The request is sent under a [`RequestContext`]; the context is raced
//!    against the transport and against reading the body.
//! 3. The status is classified with [`check_response`]; non-2xx statuses
//!    become [`HttpError::Api`].
//! 4. On success the body is decoded into the caller's type
//!    ([`Client::execute`]), copied into a sink ([`Client::execute_to_writer`])
//!    or left as bytes ([`Client::send`]).

use serde::de::DeserializeOwned;
use serde::Serialize;
use tokio::io::{AsyncWrite, AsyncWriteExt};

use crate::clients::context::RequestContext;
use crate::clients::errors::{check_response, ErrorResponse, HttpError};
use crate::clients::http_request::{
    encode_body, redacted, resolve_url, standard_headers, HttpMethod, HttpRequest,
};
use crate::clients::http_response::{ApiResponse, HttpResponse};
use crate::config::{BaseUrl, ClientConfig, UserAgent};
use crate::error::ConfigError;
use crate::resources::{AdopteesService, AdoptersService, AdoptionsService, PetPreferencesService};

/// Client for the Animal Rescue API.
///
/// The client is `Send + Sync`; share it behind an `Arc` or by reference
/// between tasks. Resource facades such as [`Client::adopters`] borrow the
/// client and cannot outlive it.
///
/// # Example
///
/// ```rust,ignore
/// use animal_rescue::{BaseUrl, Client, ClientConfig, RequestContext};
/// use std::time::Duration;
///
/// let config = ClientConfig::builder()
///     .base_url(BaseUrl::new("https://rescue.example.com/api/")?)
///     .build()?;
/// let client = Client::new(config);
///
/// let ctx = RequestContext::with_timeout(Duration::from_secs(10));
/// let adopters = client.adopters().list(&ctx).await?;
/// ```
#[derive(Clone, Debug)]
pub struct Client {
    config: ClientConfig,
}

// Verify Client is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Client>();
};

impl Client {
    /// Creates a client from a configuration.
    #[must_use]
    pub fn new(config: ClientConfig) -> Self {
        Self { config }
    }

    /// Creates a client with the default configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the default configuration fails validation.
    pub fn with_defaults() -> Result<Self, ConfigError> {
        Ok(Self::new(ClientConfig::builder().build()?))
    }

    /// Returns the client configuration.
    #[must_use]
    pub const fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Returns the base URL requests are resolved against.
    #[must_use]
    pub const fn base_url(&self) -> &BaseUrl {
        self.config.base_url()
    }

    /// Returns the configured user agent.
    #[must_use]
    pub const fn user_agent(&self) -> &UserAgent {
        self.config.user_agent()
    }

    /// Replaces the base URL.
    ///
    /// A base URL without a trailing slash is accepted here, but every
    /// request built afterwards fails with [`HttpError::Configuration`].
    pub fn set_base_url(&mut self, base_url: BaseUrl) {
        tracing::debug!(
            "Client base URL changed from {} to {}",
            redacted(self.base_url().as_url()),
            redacted(base_url.as_url())
        );
        self.config.set_base_url(base_url);
    }

    /// Returns the adopters facade.
    #[must_use]
    pub const fn adopters(&self) -> AdoptersService<'_> {
        AdoptersService::new(self)
    }

    /// Returns the adoptees facade.
    #[must_use]
    pub const fn adoptees(&self) -> AdopteesService<'_> {
        AdopteesService::new(self)
    }

    /// Returns the adoptions facade.
    #[must_use]
    pub const fn adoptions(&self) -> AdoptionsService<'_> {
        AdoptionsService::new(self)
    }

    /// Returns the pet preferences facade.
    #[must_use]
    pub const fn pet_preferences(&self) -> PetPreferencesService<'_> {
        PetPreferencesService::new(self)
    }

    /// Builds a request for `path`, relative to the base URL.
    ///
    /// Paths should be given without a leading slash; a leading slash
    /// resolves against the host root and drops the base URL's path.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if:
    /// - the base URL has no trailing slash (`Configuration`)
    /// - `path` is not a valid URL reference (`Parse`)
    /// - `body` cannot be encoded as JSON (`Encoding`)
    pub fn new_request<B>(
        &self,
        method: HttpMethod,
        path: &str,
        body: Option<&B>,
    ) -> Result<HttpRequest, HttpError>
    where
        B: Serialize + ?Sized,
    {
        let url = resolve_url(self.base_url(), path)?;
        let body = body.map(encode_body).transpose()?;
        let headers = standard_headers(self.user_agent(), body.is_some());

        Ok(HttpRequest {
            method,
            url,
            headers,
            body,
        })
    }

    /// Sends `request` and returns the response without decoding its body.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if:
    /// - `ctx` is `None` (`InvalidArgument`); nothing is sent
    /// - the context is cancelled or expires first (`Cancelled`)
    /// - the transport fails (`Transport`)
    /// - the status is outside 200..=299 (`Api`)
    pub async fn send(
        &self,
        ctx: Option<&RequestContext>,
        request: HttpRequest,
    ) -> Result<HttpResponse, HttpError> {
        let ctx = require_context(ctx)?;
        let method = request.method;
        let url = redacted(&request.url);

        let response = self.dispatch(ctx, request).await?;
        let status = response.status().as_u16();
        let headers = response.headers().clone();
        let body = read_body(ctx, response).await?;

        let response = HttpResponse {
            method,
            url,
            status,
            headers,
            body,
        };
        Ok(check_response(response)?)
    }

    /// Sends `request` and decodes a successful response body as JSON.
    ///
    /// An empty success body is not an error: the returned data is `None`.
    /// Non-2xx responses are never decoded into `T`.
    ///
    /// # Errors
    ///
    /// Everything [`Client::send`] returns, plus [`HttpError::Decode`] when a
    /// 2xx body is not valid JSON for `T`.
    pub async fn execute<T: DeserializeOwned>(
        &self,
        ctx: Option<&RequestContext>,
        request: HttpRequest,
    ) -> Result<ApiResponse<Option<T>>, HttpError> {
        let response = self.send(ctx, request).await?;
        let data = decode_json(&response.body)?;
        Ok(ApiResponse::new(data, response))
    }

    /// Sends `request` and copies a successful response body into `sink`
    /// verbatim, without decoding it.
    ///
    /// The returned response has an empty `body`. On a non-2xx status nothing
    /// is written to `sink`.
    ///
    /// # Errors
    ///
    /// Everything [`Client::send`] returns, plus [`HttpError::Sink`] when
    /// writing to `sink` fails.
    pub async fn execute_to_writer<W>(
        &self,
        ctx: Option<&RequestContext>,
        request: HttpRequest,
        sink: &mut W,
    ) -> Result<HttpResponse, HttpError>
    where
        W: AsyncWrite + Unpin + ?Sized,
    {
        let ctx = require_context(ctx)?;
        let method = request.method;
        let url = redacted(&request.url);

        let mut response = self.dispatch(ctx, request).await?;
        let status = response.status().as_u16();
        let headers = response.headers().clone();

        if !(200..=299).contains(&status) {
            let body = read_body(ctx, response).await?;
            return Err(ErrorResponse::from_response(HttpResponse {
                method,
                url,
                status,
                headers,
                body,
            })
            .into());
        }

        loop {
            let chunk = tokio::select! {
                biased;
                reason = ctx.done() => return Err(reason.into()),
                chunk = response.chunk() => chunk,
            };
            match chunk.map_err(|e| transport_error(ctx, e))? {
                Some(bytes) => sink.write_all(&bytes).await?,
                None => break,
            }
        }
        sink.flush().await?;

        Ok(HttpResponse {
            method,
            url,
            status,
            headers,
            body: Vec::new(),
        })
    }

    /// Sends `request` on the transport, racing it against `ctx`.
    async fn dispatch(
        &self,
        ctx: &RequestContext,
        request: HttpRequest,
    ) -> Result<reqwest::Response, HttpError> {
        if let Some(reason) = ctx.err() {
            tracing::debug!("Not sending {} {}: {}", request.method, redacted(&request.url), reason);
            return Err(reason.into());
        }

        tracing::debug!("Sending {} {}", request.method, redacted(&request.url));
        let method = request.method;
        let outcome = tokio::select! {
            biased;
            reason = ctx.done() => {
                tracing::warn!("{} request abandoned: {}", method, reason);
                return Err(reason.into());
            }
            outcome = self.config.http_client().execute(request.into_reqwest()) => outcome,
        };

        let response = outcome.map_err(|e| transport_error(ctx, e))?;
        tracing::debug!(
            "Received {} for {} {}",
            response.status(),
            method,
            redacted(response.url())
        );
        Ok(response)
    }
}

fn require_context(ctx: Option<&RequestContext>) -> Result<&RequestContext, HttpError> {
    ctx.ok_or(HttpError::InvalidArgument {
        reason: "a request context is required",
    })
}

/// Drains the response body under `ctx`. The response is consumed on every
/// path, which releases the connection.
async fn read_body(ctx: &RequestContext, response: reqwest::Response) -> Result<Vec<u8>, HttpError> {
    let body = tokio::select! {
        biased;
        reason = ctx.done() => return Err(reason.into()),
        body = response.bytes() => body,
    };
    body.map(|bytes| bytes.to_vec())
        .map_err(|e| transport_error(ctx, e))
}

/// Maps a transport failure. A context that is already done wins over the
/// transport error; otherwise the error's URL is redacted.
fn transport_error(ctx: &RequestContext, error: reqwest::Error) -> HttpError {
    if let Some(reason) = ctx.err() {
        return HttpError::Cancelled(reason);
    }
    let error = redact_error_url(error);
    tracing::warn!("Transport error: {}", error);
    HttpError::Transport(error)
}

fn redact_error_url(mut error: reqwest::Error) -> reqwest::Error {
    if let Some(url) = error.url_mut() {
        *url = redacted(url);
    }
    error
}

/// Decodes a success body. Empty and whitespace-only bodies decode to `None`.
fn decode_json<T: DeserializeOwned>(body: &[u8]) -> Result<Option<T>, HttpError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(None);
    }
    serde_json::from_slice(body).map(Some).map_err(HttpError::Decode)
}
