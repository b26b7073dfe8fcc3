//! Shared plumbing for the resource facades.
//!
//! Every entity of the Animal Rescue API exposes the same operations on the
//! same path layout: a plural collection path (`adopters`) for list and
//! create, and a singular item path with an ID (`adopter/42`) for get, edit
//! and delete. The [`Resource`] trait records those names once per entity and
//! the functions here turn them into calls on the [`Client`].
//!
//! All paths are relative to the client's base URL and never start with `/`,
//! so a base URL with a path prefix (`https://host/api/`) is always honoured.

use std::fmt;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::clients::{ApiResponse, Client, HttpError, HttpMethod, HttpResponse, RequestContext};

/// An entity type served by the Animal Rescue API.
///
/// # Example
///
/// ```rust,ignore
/// impl Resource for Adoptee {
///     const NAME: &'static str = "Adoptee";
///     const COLLECTION: &'static str = "adoptees";
///     const ITEM: &'static str = "adoptee";
/// }
///
/// assert_eq!(Adoptee::item_path(7), "adoptee/7");
/// ```
pub trait Resource: DeserializeOwned + Default + Send + Sync {
    /// The singular display name (e.g., "Adopter"), used when rendering
    /// the resource.
    const NAME: &'static str;

    /// The collection path used for list and create (e.g., "adopters").
    const COLLECTION: &'static str;

    /// The item path prefix used with an ID (e.g., "adopter").
    const ITEM: &'static str;

    /// Returns the path of the item with the given ID.
    #[must_use]
    fn item_path(id: i64) -> String {
        format!("{}/{id}", Self::ITEM)
    }
}

/// Renders `resource` as its name followed by the fields that are set,
/// e.g. `Adoptee{"id":7,"name":"Rex"}`.
pub(crate) fn display<R: Resource + Serialize>(
    resource: &R,
    f: &mut fmt::Formatter<'_>,
) -> fmt::Result {
    let fields = serde_json::to_string(resource).map_err(|_| fmt::Error)?;
    write!(f, "{}{fields}", R::NAME)
}

pub(crate) async fn list<R: Resource>(
    client: &Client,
    ctx: &RequestContext,
) -> Result<ApiResponse<Vec<R>>, HttpError> {
    call(client, ctx, HttpMethod::Get, R::COLLECTION, None::<&()>).await
}

pub(crate) async fn get<R: Resource>(
    client: &Client,
    ctx: &RequestContext,
    id: i64,
) -> Result<ApiResponse<R>, HttpError> {
    call(client, ctx, HttpMethod::Get, &R::item_path(id), None::<&()>).await
}

pub(crate) async fn create<R: Resource, B: Serialize + ?Sized>(
    client: &Client,
    ctx: &RequestContext,
    body: &B,
) -> Result<ApiResponse<R>, HttpError> {
    call(client, ctx, HttpMethod::Post, R::COLLECTION, Some(body)).await
}

pub(crate) async fn edit<R: Resource, B: Serialize + ?Sized>(
    client: &Client,
    ctx: &RequestContext,
    id: i64,
    body: &B,
) -> Result<ApiResponse<R>, HttpError> {
    call(client, ctx, HttpMethod::Patch, &R::item_path(id), Some(body)).await
}

pub(crate) async fn delete<R: Resource>(
    client: &Client,
    ctx: &RequestContext,
    id: i64,
) -> Result<HttpResponse, HttpError> {
    let request = client.new_request(HttpMethod::Delete, &R::item_path(id), None::<&()>)?;
    client.send(Some(ctx), request).await
}

/// Builds and executes a request, decoding the body into `T`. An empty
/// success body yields `T::default()`.
async fn call<T, B>(
    client: &Client,
    ctx: &RequestContext,
    method: HttpMethod,
    path: &str,
    body: Option<&B>,
) -> Result<ApiResponse<T>, HttpError>
where
    T: DeserializeOwned + Default,
    B: Serialize + ?Sized,
{
    let request = client.new_request(method, path, body)?;
    Ok(client.execute::<T>(Some(ctx), request).await?.or_default())
}
