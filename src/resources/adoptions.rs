//! Adoption resource.
//!
//! An adoption records that an adopter took an adoptee home. Adoptions can
//! be listed, fetched, created and deleted; the API has no edit endpoint for
//! them.

use chrono::{DateTime, Utc};
use std::fmt;

use serde::{Deserialize, Serialize};

use super::resource::{self, Resource};
use super::{Adoptee, Adopter};
use crate::clients::{ApiResponse, Client, HttpError, HttpResponse, RequestContext};

/// An adoption event linking an adopter and an adoptee.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Adoption {
    /// The unique identifier, assigned by the API.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,

    /// The adopter.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub adopter: Option<Adopter>,

    /// The adopted animal.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub adoptee: Option<Adoptee>,

    /// When the adoption was recorded, exactly as the API formats it.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

impl Resource for Adoption {
    const NAME: &'static str = "Adoption";
    const COLLECTION: &'static str = "adoptions";
    const ITEM: &'static str = "adoption";
}

impl fmt::Display for Adoption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        resource::display(self, f)
    }
}

/// An adoption to be created.
///
/// The adopter and adoptee are sent as nested records; set their `id` to
/// refer to existing entries.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct NewAdoption {
    /// The adopter. `None` is not sent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub adopter: Option<Adopter>,

    /// The adopted animal. `None` is not sent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub adoptee: Option<Adoptee>,

    /// When the adoption took place, sent as RFC 3339. `None` lets the API
    /// use the current time.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

/// Adoption operations, borrowed from a [`Client`] via [`Client::adoptions`].
#[derive(Clone, Copy, Debug)]
pub struct AdoptionsService<'a> {
    client: &'a Client,
}

impl<'a> AdoptionsService<'a> {
    pub(crate) const fn new(client: &'a Client) -> Self {
        Self { client }
    }

    /// Lists all adoptions.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails or the API rejects it.
    pub async fn list(&self, ctx: &RequestContext) -> Result<ApiResponse<Vec<Adoption>>, HttpError> {
        resource::list(self.client, ctx).await
    }

    /// Fetches an adoption by ID.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Api`] with status 404 if no such adoption exists.
    pub async fn get(&self, ctx: &RequestContext, id: i64) -> Result<ApiResponse<Adoption>, HttpError> {
        resource::get(self.client, ctx, id).await
    }

    /// Records an adoption.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Api`] carrying field errors if validation fails.
    pub async fn create(
        &self,
        ctx: &RequestContext,
        adoption: &NewAdoption,
    ) -> Result<ApiResponse<Adoption>, HttpError> {
        resource::create(self.client, ctx, adoption).await
    }

    /// Deletes an adoption by ID.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Api`] with status 404 if no such adoption exists.
    pub async fn delete(&self, ctx: &RequestContext, id: i64) -> Result<HttpResponse, HttpError> {
        resource::delete::<Adoption>(self.client, ctx, id).await
    }
}
