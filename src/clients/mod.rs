//! HTTP client types for Animal Rescue API communication.
//!
//! This module provides the generic request engine the resource facades are
//! built on. It resolves paths, encodes JSON bodies, executes requests under
//! a cancellable [`RequestContext`] and decodes structured API errors.
//!
//! # Overview
//!
//! The main types in this module are:
//!
//! - [`Client`]: The async client for API communication
//! - [`HttpRequest`]: A request ready to be sent
//! - [`HttpResponse`]: A completed response with its body
//! - [`ApiResponse`]: A decoded value paired with its [`HttpResponse`]
//! - [`HttpMethod`]: Supported HTTP methods (GET, POST, PATCH, DELETE)
//! - [`RequestContext`]: Cancellation and deadline for a call
//! - [`HttpError`]: Every failure a call can produce
//! - [`ErrorResponse`]: A non-2xx response with its decoded message and field errors
//!
//! # Example
//!
//! ```rust,ignore
//! use animal_rescue::clients::{Client, HttpMethod, RequestContext};
//! use animal_rescue::resources::Adoptee;
//!
//! let client = Client::with_defaults()?;
//! let ctx = RequestContext::background();
//!
//! let request = client.new_request(HttpMethod::Get, "adoptee/7", None::<&()>)?;
//! let response = client.execute::<Adoptee>(Some(&ctx), request).await?;
//! println!("{:?}", response.data);
//! ```
//!
//! # Error Handling
//!
//! Non-2xx responses are never retried. They surface as [`HttpError::Api`]
//! with the full response attached. Use [`parse_bool_response`] to treat a
//! 404 as a plain `false`.

mod context;
mod errors;
mod http_client;
mod http_request;
mod http_response;

pub use context::{ContextError, RequestContext};
pub use errors::{
    check_response, parse_bool_response, ErrorCode, ErrorResponse, FieldError, HttpError,
};
pub use http_client::Client;
pub use http_request::{resolve_url, HttpMethod, HttpRequest};
pub use http_response::{ApiResponse, HttpResponse};
