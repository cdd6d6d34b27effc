//! Error type for Planet API operations.
//!
//! GraphQL-level errors (the `errors` array in a 2xx response) are not SDK
//! errors: they are logged and the call still returns whatever `data` was
//! present. A response without `data` is not an error either.

use thiserror::Error;

use crate::auth::SigningError;
use crate::clients::HttpError;

/// Error type for [`PlanetClient`](crate::clients::graphql::PlanetClient) operations.
///
/// # Example
///
/// ```rust
/// use shopify_planet_api::clients::graphql::PlanetError;
/// use shopify_planet_api::clients::{HttpError, HttpResponseError};
///
/// let http_error = HttpError::Response(HttpResponseError {
///     code: 401,
///     message: r#"{"error":"Unauthorized"}"#.to_string(),
///     error_reference: None,
/// });
/// let error: PlanetError = http_error.into();
/// assert!(error.to_string().contains("Unauthorized"));
/// ```
#[derive(Debug, Error)]
pub enum PlanetError {
    /// The request could not be signed; nothing was sent.
    #[error(transparent)]
    Signing(#[from] SigningError),

    /// The transport failed or the endpoint returned a non-2xx status.
    #[error(transparent)]
    Http(#[from] HttpError),

    /// The request payload could not be serialized.
    #[error("Failed to serialize GraphQL request: {0}")]
    Serialize(#[from] serde_json::Error),
}
