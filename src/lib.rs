//! # Animal Rescue API Rust Client
//!
//! A typed async client for the Animal Rescue HTTP/JSON API, which manages
//! adopters, adoptees, adoptions and pet preferences.
//!
//! ## Overview
//!
//! This crate provides:
//! - Type-safe configuration via [`ClientConfig`] and [`ClientConfigBuilder`]
//! - Validated newtypes for the base URL and user agent
//! - A generic request engine ([`Client`]) that resolves paths, encodes JSON
//!   bodies and decodes structured API errors
//! - Per-call cancellation and deadlines via [`RequestContext`]
//! - Resource facades for every entity, in [`resources`]
//!
//! ## Quick Start
//!
//! ```rust
//! use animal_rescue::{BaseUrl, Client, ClientConfig};
//!
//! let config = ClientConfig::builder()
//!     .base_url(BaseUrl::new("https://rescue.example.com/api/").unwrap())
//!     .build()
//!     .unwrap();
//! let client = Client::new(config);
//!
//! assert_eq!(client.base_url().as_str(), "https://rescue.example.com/api/");
//! ```
//!
//! ## Making API Requests
//!
//! Every call takes a [`RequestContext`]. Cancelling the context, or letting
//! its deadline pass, aborts the call at whatever stage it has reached.
//!
//! ```rust,ignore
//! use animal_rescue::{Client, RequestContext};
//! use animal_rescue::resources::NewAdoptee;
//! use std::time::Duration;
//!
//! let client = Client::with_defaults()?;
//! let ctx = RequestContext::with_timeout(Duration::from_secs(5));
//!
//! let rex = client
//!     .adoptees()
//!     .create(&ctx, &NewAdoptee {
//!         name: Some("Rex".to_string()),
//!         breed: Some("Lab".to_string()),
//!         ..Default::default()
//!     })
//!     .await?;
//! println!("created adoptee {:?}", rex.id);
//! ```
//!
//! ## Errors
//!
//! Every call returns [`HttpError`]. Non-2xx responses become
//! [`HttpError::Api`], carrying the decoded message, the per-field errors and
//! the raw response. For delete-style calls, [`parse_bool_response`] turns a
//! 404 into `Ok(false)`:
//!
//! ```rust,ignore
//! use animal_rescue::parse_bool_response;
//!
//! let deleted = parse_bool_response(client.adopters().delete(&ctx, 42).await)?;
//! ```
//!
//! ## Design Principles
//!
//! - **No global state**: Configuration is instance-based and passed explicitly
//! - **Fail-fast validation**: All newtypes validate on construction
//! - **Thread-safe**: [`Client`] is `Send + Sync`
//! - **Async-first**: Designed for use with the Tokio async runtime
//! - **No retries**: A failed call is reported once, as it happened

pub mod clients;
pub mod config;
pub mod error;
pub mod resources;

// Re-export public types at crate root for convenience
pub use config::{BaseUrl, ClientConfig, ClientConfigBuilder, UserAgent, DEFAULT_BASE_URL, SDK_VERSION};
pub use error::ConfigError;

// Re-export client types
pub use clients::{
    check_response, parse_bool_response, ApiResponse, Client, ContextError, ErrorCode,
    ErrorResponse, FieldError, HttpError, HttpMethod, HttpRequest, HttpResponse, RequestContext,
};

// Re-export resource models
pub use resources::{
    Adoptee, Adopter, Adoption, NewAdoptee, NewAdopter, NewAdoption, NewPetPreference,
    PetPreference,
};
