//! # Shopify Planet API Rust Client
//!
//! A small client for the Shopify Planet GraphQL API. Requests are
//! authenticated with an HMAC-SHA256 signature of the request body, keyed by
//! the client token.
//!
//! ## Overview
//!
//! - Validated credentials via [`PlanetConfig`] and [`PlanetConfigBuilder`]
//! - Body signing via [`auth::hmac::sign`] and [`auth::Signer`]
//! - The `GetShopInfo` query via [`PlanetClient::get_shop_info`]
//! - Arbitrary GraphQL requests via [`PlanetClient::call`]
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use shopify_planet_api::{PlanetClient, ShopInfoVariables};
//!
//! let client = PlanetClient::from_credentials("client-id", "client-token")?;
//! let info = client
//!     .get_shop_info(&ShopInfoVariables::new("my-store.myshopify.com"))
//!     .await?;
//! ```
//!
//! ## Signing
//!
//! ```rust
//! use shopify_planet_api::auth::hmac::sign;
//!
//! let signature = sign("secret", r#"{"a":1}"#);
//! assert_eq!(signature, "qp4uNXX11wmLbKzNeQiIw21f22M0KnO62i1qUXR6hJQ=");
//! ```
//!
//! ## Design Principles
//!
//! - **No global state**: credentials live in an explicit [`PlanetConfig`]
//! - **Fail-fast validation**: empty credentials are rejected on construction
//! - **Fail closed**: a request that cannot be signed is never sent
//! - **No retries**: transport errors reach the caller unchanged
//! - **Thread-safe**: all public types are `Send + Sync`

pub mod auth;
pub mod clients;
pub mod config;
pub mod error;

pub use config::{
    ClientId, ClientToken, Endpoint, PlanetConfig, PlanetConfigBuilder, DEFAULT_ENDPOINT,
};
pub use error::ConfigError;

pub use auth::{Signer, SigningError};
pub use clients::graphql::{
    GraphqlRequest, GraphqlResponse, PlanetClient, PlanetError, Shop, ShopInfo,
    ShopInfoVariables,
};
pub use clients::{HttpClient, HttpError, HttpResponse, HttpResponseError};
