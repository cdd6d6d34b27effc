//! GraphQL client for the Shopify Planet API.
//!
//! # Overview
//!
//! - [`PlanetClient`]: signs and sends GraphQL requests
//! - [`GraphqlRequest`]: the `{query, variables}` payload
//! - [`GraphqlResponse`]: the `{data, errors, extensions}` envelope
//! - [`PlanetError`]: error type for client operations
//! - [`ShopInfo`], [`ShopInfoVariables`]: the `GetShopInfo` operation
//!
//! # Adding Operations
//!
//! New typed operations follow the same shape as `GetShopInfo`: build a
//! [`GraphqlRequest`], pass it to [`PlanetClient::call`] with the expected
//! result type, and get `Option<T>` back.
//!
//! ```rust,ignore
//! use serde::Deserialize;
//! use shopify_planet_api::clients::graphql::{GraphqlRequest, PlanetClient};
//!
//! #[derive(Deserialize)]
//! struct ShopName { shop: Name }
//! #[derive(Deserialize)]
//! struct Name { name: String }
//!
//! let request = GraphqlRequest::new("query($d: String!) { shop(shopifyDomain: $d) { name } }")
//!     .variable("d", "my-store.myshopify.com");
//! let result: Option<ShopName> = client.call(&request).await?;
//! ```

mod client;
mod errors;
mod request;
mod shop;

pub use client::PlanetClient;
pub use errors::PlanetError;
pub use request::{GraphqlErrorEntry, GraphqlRequest, GraphqlResponse};
pub use shop::{Shop, ShopInfo, ShopInfoVariables, GET_SHOP_INFO_QUERY};
