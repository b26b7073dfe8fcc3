//! Pet preference resource.
//!
//! A pet preference describes the kind of animal a prospective adopter is
//! looking for. Preferences are managed on their own and also appear nested
//! in [`Adopter`](super::Adopter) records.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::resource::{self, Resource};
use crate::clients::{ApiResponse, Client, HttpError, HttpResponse, RequestContext};

/// A preference for a kind of pet.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct PetPreference {
    /// The unique identifier, assigned by the API. Keep it set when nesting
    /// an existing preference inside an adopter payload.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,

    /// Preferred breed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub breed: Option<String>,

    /// Preferred age.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub age: Option<String>,

    /// Preferred gender.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,
}

impl Resource for PetPreference {
    const NAME: &'static str = "PetPreference";
    const COLLECTION: &'static str = "petprefs";
    const ITEM: &'static str = "petpref";
}

impl fmt::Display for PetPreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        resource::display(self, f)
    }
}

/// A pet preference to be created, or the changes to apply to one.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct NewPetPreference {
    /// Preferred breed. `None` leaves it unchanged.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub breed: Option<String>,

    /// Preferred age. `None` leaves it unchanged.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub age: Option<String>,

    /// Preferred gender. `None` leaves it unchanged.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,
}

/// Pet preference operations, borrowed from a [`Client`] via
/// [`Client::pet_preferences`].
#[derive(Clone, Copy, Debug)]
pub struct PetPreferencesService<'a> {
    client: &'a Client,
}

impl<'a> PetPreferencesService<'a> {
    pub(crate) const fn new(client: &'a Client) -> Self {
        Self { client }
    }

    /// Lists all pet preferences.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails or the API rejects it.
    pub async fn list(
        &self,
        ctx: &RequestContext,
    ) -> Result<ApiResponse<Vec<PetPreference>>, HttpError> {
        resource::list(self.client, ctx).await
    }

    /// Fetches a pet preference by ID.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Api`] with status 404 if no such preference exists.
    pub async fn get(
        &self,
        ctx: &RequestContext,
        id: i64,
    ) -> Result<ApiResponse<PetPreference>, HttpError> {
        resource::get(self.client, ctx, id).await
    }

    /// Creates a pet preference.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Api`] carrying field errors if validation fails.
    pub async fn create(
        &self,
        ctx: &RequestContext,
        preference: &NewPetPreference,
    ) -> Result<ApiResponse<PetPreference>, HttpError> {
        resource::create(self.client, ctx, preference).await
    }

    /// Applies the `Some` fields of `preference` to the preference with the
    /// given ID.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Api`] if the preference does not exist or
    /// validation fails.
    pub async fn edit(
        &self,
        ctx: &RequestContext,
        id: i64,
        preference: &NewPetPreference,
    ) -> Result<ApiResponse<PetPreference>, HttpError> {
        resource::edit(self.client, ctx, id, preference).await
    }

    /// Deletes a pet preference by ID.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Api`] with status 404 if no such preference exists.
    pub async fn delete(&self, ctx: &RequestContext, id: i64) -> Result<HttpResponse, HttpError> {
        resource::delete::<PetPreference>(self.client, ctx, id).await
    }
}
