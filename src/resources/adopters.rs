//! Adopter resource.
//!
//! An adopter is a person registered with the rescue, together with their
//! contact details and the kinds of pets they would like to adopt.
//!
//! # Example
//!
//! ```rust,ignore
//! use animal_rescue::resources::NewAdopter;
//!
//! let created = client
//!     .adopters()
//!     .create(&ctx, &NewAdopter {
//!         first_name: Some("Ada".to_string()),
//!         last_name: Some("Lovelace".to_string()),
//!         email: Some("ada@example.com".to_string()),
//!         ..Default::default()
//!     })
//!     .await?;
//!
//! // Only the phone number changes.
//! client
//!     .adopters()
//!     .edit(&ctx, created.id.unwrap_or_default(), &NewAdopter {
//!         phone: Some("555-0100".to_string()),
//!         ..Default::default()
//!     })
//!     .await?;
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

use super::resource::{self, Resource};
use super::PetPreference;
use crate::clients::{ApiResponse, Client, HttpError, HttpResponse, RequestContext};

/// A person registered to adopt.
///
/// Every field is optional: `None` means the API did not provide it. When an
/// `Adopter` is sent as part of another payload, `None` fields are omitted.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Adopter {
    /// The unique identifier, assigned by the API.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,

    /// Given name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,

    /// Family name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,

    /// Contact phone number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,

    /// Contact email address.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    /// Gender, as recorded by the rescue.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,

    /// Date of birth, as formatted by the API.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub birthdate: Option<String>,

    /// Street address.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,

    /// Country of residence.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,

    /// State or region.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,

    /// City.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,

    /// Postal code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zip_code: Option<String>,

    /// The kinds of pet this adopter is looking for.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pet_preferences: Option<Vec<PetPreference>>,
}

impl Resource for Adopter {
    const NAME: &'static str = "Adopter";
    const COLLECTION: &'static str = "adopters";
    const ITEM: &'static str = "adopter";
}

impl fmt::Display for Adopter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        resource::display(self, f)
    }
}

/// An adopter to be created, or the changes to apply to one.
///
/// On create, `None` fields are left for the API to default. On edit, `None`
/// means "do not modify": only `Some` fields are sent, so the request is a
/// partial update.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct NewAdopter {
    /// Given name. `None` leaves it unchanged.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,

    /// Family name. `None` leaves it unchanged.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,

    /// Contact phone number. `None` leaves it unchanged.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,

    /// Contact email address. `None` leaves it unchanged.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    /// Gender. `None` leaves it unchanged.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,

    /// Date of birth. `None` leaves it unchanged.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub birthdate: Option<String>,

    /// Street address. `None` leaves it unchanged.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,

    /// Country of residence. `None` leaves it unchanged.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,

    /// State or region. `None` leaves it unchanged.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,

    /// City. `None` leaves it unchanged.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,

    /// Postal code. `None` leaves it unchanged.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zip_code: Option<String>,

    /// Pet preferences. `None` leaves them unchanged; `Some(vec![])` clears
    /// them.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pet_preferences: Option<Vec<PetPreference>>,
}

/// Adopter operations, borrowed from a [`Client`] via [`Client::adopters`].
#[derive(Clone, Copy, Debug)]
pub struct AdoptersService<'a> {
    client: &'a Client,
}

impl<'a> AdoptersService<'a> {
    pub(crate) const fn new(client: &'a Client) -> Self {
        Self { client }
    }

    /// Lists all adopters.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails or the API rejects it.
    pub async fn list(&self, ctx: &RequestContext) -> Result<ApiResponse<Vec<Adopter>>, HttpError> {
        resource::list(self.client, ctx).await
    }

    /// Fetches an adopter by ID.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Api`] with status 404 if no such adopter exists.
    pub async fn get(&self, ctx: &RequestContext, id: i64) -> Result<ApiResponse<Adopter>, HttpError> {
        resource::get(self.client, ctx, id).await
    }

    /// Creates an adopter.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Api`] carrying field errors if validation fails.
    pub async fn create(
        &self,
        ctx: &RequestContext,
        adopter: &NewAdopter,
    ) -> Result<ApiResponse<Adopter>, HttpError> {
        resource::create(self.client, ctx, adopter).await
    }

    /// Applies the `Some` fields of `adopter` to the adopter with the given ID.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Api`] if the adopter does not exist or validation
    /// fails.
    pub async fn edit(
        &self,
        ctx: &RequestContext,
        id: i64,
        adopter: &NewAdopter,
    ) -> Result<ApiResponse<Adopter>, HttpError> {
        resource::edit(self.client, ctx, id, adopter).await
    }

    /// Deletes an adopter by ID.
    ///
    /// Wrap the result in [`parse_bool_response`](crate::parse_bool_response)
    /// to treat a missing adopter as `false` instead of an error.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Api`] with status 404 if no such adopter exists.
    pub async fn delete(&self, ctx: &RequestContext, id: i64) -> Result<HttpResponse, HttpError> {
        resource::delete::<Adopter>(self.client, ctx, id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_adopter_deserialization_with_pet_preferences() {
        let adopter: Adopter = serde_json::from_value(json!({
            "id": 3,
            "first_name": "Ada",
            "last_name": "Lovelace",
            "zip_code": "97201",
            "pet_preferences": [{"id": 1, "breed": "Beagle", "age": "puppy", "gender": "female"}]
        }))
        .unwrap();

        assert_eq!(adopter.id, Some(3));
        assert_eq!(adopter.zip_code.as_deref(), Some("97201"));
        let prefs = adopter.pet_preferences.unwrap();
        assert_eq!(prefs[0].breed.as_deref(), Some("Beagle"));
        assert!(adopter.email.is_none());
    }

    #[test]
    fn test_new_adopter_sends_only_set_fields() {
        let edit = NewAdopter {
            phone: Some("555-0100".to_string()),
            ..Default::default()
        };
        assert_eq!(serde_json::to_value(&edit).unwrap(), json!({"phone": "555-0100"}));
    }

    #[test]
    fn test_empty_pet_preferences_are_sent() {
        let edit = NewAdopter {
            pet_preferences: Some(Vec::new()),
            ..Default::default()
        };
        assert_eq!(serde_json::to_value(&edit).unwrap(), json!({"pet_preferences": []}));
    }

    #[test]
    fn test_adopter_paths() {
        assert_eq!(Adopter::COLLECTION, "adopters");
        assert_eq!(Adopter::item_path(42), "adopter/42");
    }

    #[test]
    fn test_adopter_display_includes_nested_preferences() {
        let adopter = Adopter {
            id: Some(3),
            first_name: Some("Ada".to_string()),
            pet_preferences: Some(vec![PetPreference {
                breed: Some("Beagle".to_string()),
                ..Default::default()
            }]),
            ..Default::default()
        };
        assert_eq!(
            adopter.to_string(),
            r#"Adopter{"id":3,"first_name":"Ada","pet_preferences":[{"breed":"Beagle"}]}"#
        );
    }
}
