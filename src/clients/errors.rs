//! Error types for Animal Rescue API calls.
//!
//! - [`HttpError`]: every way a call can fail
//! - [`ErrorResponse`]: a non-2xx response, with its decoded error detail
//! - [`FieldError`] and [`ErrorCode`]: per-field validation detail
//!
//! [`check_response`] turns a response into an [`ErrorResponse`] when its
//! status is outside 200..=299, and [`parse_bool_response`] folds a 404 into
//! a plain `false`.
//!
//! # Example
//!
//! ```rust,ignore
//! use animal_rescue::{HttpError, RequestContext};
//!
//! match client.adopters().get(&ctx, 42).await {
//!     Ok(adopter) => println!("{:?}", adopter.first_name),
//!     Err(HttpError::Api(e)) if e.status() == 422 => {
//!         for field in &e.errors {
//!             println!("{} is {}", field.field, field.code);
//!         }
//!     }
//!     Err(HttpError::Cancelled(reason)) => println!("gave up: {reason}"),
//!     Err(e) => println!("request failed: {e}"),
//! }
//! ```

use std::fmt;

use serde::Deserialize;
use thiserror::Error;

use crate::clients::context::ContextError;
use crate::clients::http_request::redacted;
use crate::clients::http_response::HttpResponse;
use crate::error::ConfigError;

/// Validation error codes reported by the API.
///
/// Codes the client does not recognise are mapped to [`ErrorCode::Custom`].
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    /// The resource does not exist.
    Missing,
    /// A required field on the resource has not been set.
    MissingField,
    /// The formatting of a field is invalid.
    Invalid,
    /// Another resource has the same value as this field.
    AlreadyExists,
    /// Free-form error; see the message.
    #[default]
    Custom,
}

impl ErrorCode {
    /// Returns the code as it appears on the wire.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Missing => "missing",
            Self::MissingField => "missing_field",
            Self::Invalid => "invalid",
            Self::AlreadyExists => "already_exists",
            Self::Custom => "custom",
        }
    }

    fn from_wire(code: &str) -> Self {
        match code {
            "missing" => Self::Missing,
            "missing_field" => Self::MissingField,
            "invalid" => Self::Invalid,
            "already_exists" => Self::AlreadyExists,
            _ => Self::Custom,
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Detail about a single invalid field.
///
/// Entries arrive either as `{resource, field, code, message}` objects or as
/// bare strings. A bare string becomes a [`ErrorCode::Custom`] entry carrying
/// only a message.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(from = "RawFieldError")]
pub struct FieldError {
    /// The resource the error refers to.
    pub resource: String,
    /// The offending field.
    pub field: String,
    /// The validation code.
    pub code: ErrorCode,
    /// A human-readable message.
    pub message: String,
}

impl FieldError {
    /// Creates a message-only error.
    #[must_use]
    pub fn custom(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            ..Self::default()
        }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.code == ErrorCode::Custom && self.field.is_empty() {
            return f.write_str(&self.message);
        }
        write!(
            f,
            "{} error caused by {} field on {} resource",
            self.code, self.field, self.resource
        )
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawFieldError {
    Message(String),
    Structured {
        #[serde(default)]
        resource: String,
        #[serde(default)]
        field: String,
        #[serde(default)]
        code: String,
        #[serde(default)]
        message: String,
    },
}

impl From<RawFieldError> for FieldError {
    fn from(raw: RawFieldError) -> Self {
        match raw {
            RawFieldError::Message(message) => Self::custom(message),
            RawFieldError::Structured {
                resource,
                field,
                code,
                message,
            } => Self {
                resource,
                field,
                code: ErrorCode::from_wire(&code),
                message,
            },
        }
    }
}

#[derive(Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: String,
    #[serde(default)]
    errors: Vec<FieldError>,
}

/// A non-2xx response from the API.
///
/// The response is kept whole, body included, so callers can inspect it
/// after the error detail has been decoded from it. The rendered message
/// never contains a URL password.
#[derive(Debug, Error)]
#[error("{} {}{}", status_line(.response), .message, field_list(.errors))]
pub struct ErrorResponse {
    /// The response that carried the error.
    pub response: HttpResponse,
    /// The top-level error message.
    pub message: String,
    /// Per-field error detail.
    pub errors: Vec<FieldError>,
}

impl ErrorResponse {
    /// Returns the HTTP status code.
    #[must_use]
    pub const fn status(&self) -> u16 {
        self.response.status
    }

    /// Returns `true` if the status is 404.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        self.response.status == 404
    }

    /// Decodes the error detail carried by `response`.
    ///
    /// The body is decoded as `{message, errors}`. A body that is not in that
    /// shape becomes the message: a JSON string is unquoted, anything else is
    /// used as raw text.
    #[must_use]
    pub fn from_response(response: HttpResponse) -> Self {
        let (message, errors) = match serde_json::from_slice::<ErrorBody>(&response.body) {
            Ok(body) => (body.message, body.errors),
            Err(_) => {
                let message = serde_json::from_slice::<String>(&response.body)
                    .unwrap_or_else(|_| response.text().trim().to_string());
                (message, Vec::new())
            }
        };
        Self {
            response,
            message,
            errors,
        }
    }
}

/// Renders `METHOD url: status` for an error message.
fn status_line(response: &HttpResponse) -> String {
    format!(
        "{} {}: {}",
        response.method,
        redacted(&response.url),
        response.status
    )
}

/// Renders field errors as ` [first; second]`, or nothing when empty.
fn field_list(errors: &[FieldError]) -> String {
    if errors.is_empty() {
        return String::new();
    }
    let rendered: Vec<String> = errors.iter().map(ToString::to_string).collect();
    format!(" [{}]", rendered.join("; "))
}

/// Unified error type for API calls.
#[derive(Debug, Error)]
pub enum HttpError {
    /// The client configuration cannot produce a valid request.
    #[error(transparent)]
    Configuration(#[from] ConfigError),

    /// The relative resource path is not a valid URL reference.
    #[error("Invalid resource path '{path}': {reason}")]
    Parse {
        /// The path that failed to parse.
        path: String,
        /// Why parsing failed.
        reason: String,
    },

    /// The request body could not be encoded as JSON.
    #[error("Failed to encode request body: {0}")]
    Encoding(#[source] serde_json::Error),

    /// The call was made incorrectly.
    #[error("Invalid argument: {reason}")]
    InvalidArgument {
        /// What was wrong.
        reason: &'static str,
    },

    /// The request context was cancelled or its deadline passed.
    #[error(transparent)]
    Cancelled(#[from] ContextError),

    /// Network or connection error. Credentials in the URL are redacted.
    #[error("Network error: {0}")]
    Transport(#[source] reqwest::Error),

    /// The API answered with a non-2xx status.
    #[error(transparent)]
    Api(#[from] ErrorResponse),

    /// A 2xx response body did not match the expected shape.
    #[error("Failed to decode response body: {0}")]
    Decode(#[source] serde_json::Error),

    /// Writing the response body into the caller's sink failed.
    #[error("Failed to write response body: {0}")]
    Sink(#[from] std::io::Error),
}

impl HttpError {
    /// Returns the response status for [`HttpError::Api`] errors.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Api(e) => Some(e.status()),
            _ => None,
        }
    }
}

/// Classifies `response` by status code.
///
/// # Errors
///
/// Returns the decoded [`ErrorResponse`] for any status outside 200..=299.
/// The response, body included, is moved into the error.
pub fn check_response(response: HttpResponse) -> Result<HttpResponse, ErrorResponse> {
    if response.is_ok() {
        return Ok(response);
    }
    Err(ErrorResponse::from_response(response))
}

/// Interprets the outcome of a call whose answer is a yes/no.
///
/// Some endpoints signal "no" with a 404. This turns that one case into
/// `Ok(false)`; success becomes `Ok(true)` and every other error is
/// returned unchanged.
///
/// # Errors
///
/// Returns the original error unless it is an API error with status 404.
///
/// # Example
///
/// ```rust,ignore
/// let removed = parse_bool_response(client.adoptees().delete(&ctx, 7).await)?;
/// if !removed {
///     println!("adoptee 7 was already gone");
/// }
/// ```
pub fn parse_bool_response<T>(result: Result<T, HttpError>) -> Result<bool, HttpError> {
    match result {
        Ok(_) => Ok(true),
        Err(HttpError::Api(e)) if e.is_not_found() => Ok(false),
        Err(e) => Err(e),
    }
}
