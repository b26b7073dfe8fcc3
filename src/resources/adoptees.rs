//! Adoptee resource.
//!
//! An adoptee is an animal in the rescue's care, waiting for a home.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::resource::{self, Resource};
use crate::clients::{ApiResponse, Client, HttpError, HttpResponse, RequestContext};

/// An animal available for adoption.
///
/// `None` fields were not provided by the API.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Adoptee {
    /// The unique identifier, assigned by the API.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,

    /// The animal's name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Breed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub breed: Option<String>,

    /// Gender.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,

    /// Age, as described by the rescue (e.g., "2 years", "senior").
    #[serde(skip_serializing_if = "Option::is_none")]
    pub age: Option<String>,
}

impl Resource for Adoptee {
    const NAME: &'static str = "Adoptee";
    const COLLECTION: &'static str = "adoptees";
    const ITEM: &'static str = "adoptee";
}

impl fmt::Display for Adoptee {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        resource::display(self, f)
    }
}

/// An adoptee to be created, or the changes to apply to one.
///
/// `None` fields are not sent: on edit they are left unmodified.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct NewAdoptee {
    /// Name. `None` leaves it unchanged.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Breed. `None` leaves it unchanged.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub breed: Option<String>,

    /// Gender. `None` leaves it unchanged.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,

    /// Age. `None` leaves it unchanged.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub age: Option<String>,
}

/// Adoptee operations, borrowed from a [`Client`] via [`Client::adoptees`].
#[derive(Clone, Copy, Debug)]
pub struct AdopteesService<'a> {
    client: &'a Client,
}

impl<'a> AdopteesService<'a> {
    pub(crate) const fn new(client: &'a Client) -> Self {
        Self { client }
    }

    /// Lists all adoptees.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails or the API rejects it.
    pub async fn list(&self, ctx: &RequestContext) -> Result<ApiResponse<Vec<Adoptee>>, HttpError> {
        resource::list(self.client, ctx).await
    }

    /// Fetches an adoptee by ID.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Api`] with status 404 if no such adoptee exists.
    pub async fn get(&self, ctx: &RequestContext, id: i64) -> Result<ApiResponse<Adoptee>, HttpError> {
        resource::get(self.client, ctx, id).await
    }

    /// Creates an adoptee.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Api`] carrying field errors if validation fails.
    pub async fn create(
        &self,
        ctx: &RequestContext,
        adoptee: &NewAdoptee,
    ) -> Result<ApiResponse<Adoptee>, HttpError> {
        resource::create(self.client, ctx, adoptee).await
    }

    /// Applies the `Some` fields of `adoptee` to the adoptee with the given ID.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Api`] if the adoptee does not exist or validation
    /// fails.
    pub async fn edit(
        &self,
        ctx: &RequestContext,
        id: i64,
        adoptee: &NewAdoptee,
    ) -> Result<ApiResponse<Adoptee>, HttpError> {
        resource::edit(self.client, ctx, id, adoptee).await
    }

    /// Deletes an adoptee by ID.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Api`] with status 404 if no such adoptee exists.
    pub async fn delete(&self, ctx: &RequestContext, id: i64) -> Result<HttpResponse, HttpError> {
        resource::delete::<Adoptee>(self.client, ctx, id).await
    }
}
