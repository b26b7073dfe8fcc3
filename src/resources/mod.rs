//! Resource facades for the Animal Rescue API.
//!
//! Each entity has a model type, a payload type for create and edit, and a
//! service borrowed from the [`Client`](crate::Client):
//!
//! | Entity | Model | Payload | Service | Paths |
//! |--------|-------|---------|---------|-------|
//! | Adopter | [`Adopter`] | [`NewAdopter`] | [`AdoptersService`] | `adopters`, `adopter/{id}` |
//! | Adoptee | [`Adoptee`] | [`NewAdoptee`] | [`AdopteesService`] | `adoptees`, `adoptee/{id}` |
//! | Adoption | [`Adoption`] | [`NewAdoption`] | [`AdoptionsService`] | `adoptions`, `adoption/{id}` |
//! | Pet preference | [`PetPreference`] | [`NewPetPreference`] | [`PetPreferencesService`] | `petprefs`, `petpref/{id}` |
//!
//! Model fields are all `Option`s. A `None` on a fetched model means the API
//! did not return the field; a `None` on a payload means the field is not
//! sent, which on edit leaves it unmodified.
//!
//! # Example
//!
//! ```rust,ignore
//! use animal_rescue::{parse_bool_response, Client, RequestContext};
//! use animal_rescue::resources::NewAdoptee;
//!
//! let client = Client::with_defaults()?;
//! let ctx = RequestContext::background();
//!
//! let rex = client
//!     .adoptees()
//!     .create(&ctx, &NewAdoptee {
//!         name: Some("Rex".to_string()),
//!         breed: Some("Lab".to_string()),
//!         ..Default::default()
//!     })
//!     .await?;
//!
//! let deleted = parse_bool_response(client.adoptees().delete(&ctx, 7).await)?;
//! ```

mod adoptees;
mod adopters;
mod adoptions;
mod pet_preferences;
mod resource;

pub use adoptees::{Adoptee, AdopteesService, NewAdoptee};
pub use adopters::{Adopter, AdoptersService, NewAdopter};
pub use adoptions::{Adoption, AdoptionsService, NewAdoption};
pub use pet_preferences::{NewPetPreference, PetPreference, PetPreferencesService};
pub use resource::Resource;
