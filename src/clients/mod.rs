//! HTTP and GraphQL client types for the Shopify Planet API.
//!
//! # Overview
//!
//! - [`HttpClient`]: sends a signed JSON body to the endpoint
//! - [`HttpResponse`]: a parsed response
//! - [`HttpError`]: transport failures and non-2xx responses
//! - [`graphql::PlanetClient`]: the high-level client
//!
//! # Retry Behavior
//!
//! None. Every call makes exactly one request and transport errors are
//! returned unchanged.

mod errors;
pub mod graphql;
mod http_client;
mod http_response;

pub use errors::{HttpError, HttpResponseError};
pub use http_client::{HttpClient, CLIENT_ID_HEADER, HMAC_HEADER, SDK_VERSION};
pub use http_response::HttpResponse;

pub use graphql::{PlanetClient, PlanetError};
