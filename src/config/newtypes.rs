//! Validated newtype wrappers for configuration values.
//!
//! Each wrapper checks its contents on construction, so a value that exists
//! is a value that can be sent.

use crate::error::ConfigError;
use std::fmt;

/// A validated Shopify Planet client ID.
///
/// Sent verbatim in the `X-Shopify-Planet-Client-ID` header.
///
/// # Example
///
/// ```rust
/// use shopify_planet_api::ClientId;
///
/// let id = ClientId::new("my-client-id").unwrap();
/// assert_eq!(id.as_ref(), "my-client-id");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientId(String);

impl ClientId {
    /// Creates a new validated client ID.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyClientId`] if the ID is empty.
    pub fn new(id: impl Into<String>) -> Result<Self, ConfigError> {
        let id = id.into();
        if id.is_empty() {
            return Err(ConfigError::EmptyClientId);
        }
        Ok(Self(id))
    }
}

impl AsRef<str> for ClientId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// A validated Shopify Planet client token.
///
/// The token is the shared secret that keys the request signature. It is
/// never sent over the wire and its `Debug` output is masked.
///
/// # Example
///
/// ```rust
/// use shopify_planet_api::ClientToken;
///
/// let token = ClientToken::new("my-secret").unwrap();
/// assert_eq!(format!("{:?}", token), "ClientToken(*****)");
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct ClientToken(String);

impl ClientToken {
    /// Creates a new validated client token.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyClientToken`] if the token is empty.
    pub fn new(token: impl Into<String>) -> Result<Self, ConfigError> {
        let token = token.into();
        if token.is_empty() {
            return Err(ConfigError::EmptyClientToken);
        }
        Ok(Self(token))
    }
}

impl AsRef<str> for ClientToken {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ClientToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ClientToken(*****)")
    }
}

/// A validated GraphQL endpoint URL.
///
/// # Example
///
/// ```rust
/// use shopify_planet_api::Endpoint;
///
/// let endpoint = Endpoint::new("https://shopify-planet.shopifyapps.com/api/graphql").unwrap();
/// assert_eq!(endpoint.as_ref(), "https://shopify-planet.shopifyapps.com/api/graphql");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Endpoint(String);

impl Endpoint {
    /// Creates a new validated endpoint.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidEndpoint`] if the URL has no scheme or
    /// no host.
    pub fn new(url: impl Into<String>) -> Result<Self, ConfigError> {
        let url: String = url.into();
        let url = url.trim().to_string();

        let Some(scheme_end) = url.find("://") else {
            return Err(ConfigError::InvalidEndpoint { url });
        };

        let scheme = &url[..scheme_end];
        if scheme.is_empty() || !scheme.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(ConfigError::InvalidEndpoint { url });
        }

        let host_start = scheme_end + 3;
        let host_end = url[host_start..]
            .find([':', '/', '?', '#'])
            .map_or(url.len(), |i| host_start + i);

        if host_start >= host_end {
            return Err(ConfigError::InvalidEndpoint { url });
        }

        Ok(Self(url))
    }
}

impl AsRef<str> for Endpoint {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
