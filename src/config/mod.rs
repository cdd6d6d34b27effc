//! Configuration types for the Shopify Planet client.
//!
//! # Overview
//!
//! - [`PlanetConfig`]: credentials plus transport settings for one client
//! - [`PlanetConfigBuilder`]: a builder for constructing [`PlanetConfig`] instances
//! - [`ClientId`]: a validated client ID newtype
//! - [`ClientToken`]: a validated client token newtype with masked debug output
//! - [`Endpoint`]: a validated GraphQL endpoint URL
//!
//! # Example
//!
//! ```rust
//! use shopify_planet_api::{PlanetConfig, ClientId, ClientToken};
//!
//! let config = PlanetConfig::builder()
//!     .client_id(ClientId::new("my-client-id").unwrap())
//!     .client_token(ClientToken::new("my-token").unwrap())
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.endpoint().as_ref(), shopify_planet_api::DEFAULT_ENDPOINT);
//! ```

mod newtypes;

pub use newtypes::{ClientId, ClientToken, Endpoint};

use crate::error::ConfigError;

/// The Shopify Planet GraphQL endpoint.
pub const DEFAULT_ENDPOINT: &str = "https://shopify-planet.shopifyapps.com/api/graphql";

/// Configuration for a Shopify Planet client.
///
/// Holds the credential pair and transport settings. The configuration is
/// immutable once built; create a new one to change credentials.
///
/// # Thread Safety
///
/// `PlanetConfig` is `Clone`, `Send`, and `Sync`.
#[derive(Clone, Debug)]
pub struct PlanetConfig {
    client_id: ClientId,
    client_token: ClientToken,
    endpoint: Endpoint,
    user_agent_prefix: Option<String>,
}

impl PlanetConfig {
    /// Creates a new builder for constructing a `PlanetConfig`.
    #[must_use]
    pub fn builder() -> PlanetConfigBuilder {
        PlanetConfigBuilder::new()
    }

    /// Builds a configuration from raw credential strings.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyClientId`] or [`ConfigError::EmptyClientToken`]
    /// if either value is empty.
    ///
    /// # Example
    ///
    /// ```rust
    /// use shopify_planet_api::{PlanetConfig, ConfigError};
    ///
    /// assert!(PlanetConfig::from_credentials("id", "token").is_ok());
    /// assert_eq!(
    ///     PlanetConfig::from_credentials("id", "").unwrap_err(),
    ///     ConfigError::EmptyClientToken
    /// );
    /// ```
    pub fn from_credentials(
        client_id: impl Into<String>,
        client_token: impl Into<String>,
    ) -> Result<Self, ConfigError> {
        Self::builder()
            .client_id(ClientId::new(client_id)?)
            .client_token(ClientToken::new(client_token)?)
            .build()
    }

    /// Returns the client ID.
    #[must_use]
    pub const fn client_id(&self) -> &ClientId {
        &self.client_id
    }

    /// Returns the client token.
    #[must_use]
    pub const fn client_token(&self) -> &ClientToken {
        &self.client_token
    }

    /// Returns the GraphQL endpoint.
    #[must_use]
    pub const fn endpoint(&self) -> &Endpoint {
        &self.endpoint
    }

    /// Returns the user agent prefix, if configured.
    #[must_use]
    pub fn user_agent_prefix(&self) -> Option<&str> {
        self.user_agent_prefix.as_deref()
    }
}

// Verify PlanetConfig is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<PlanetConfig>();
};

/// Builder for constructing [`PlanetConfig`] instances.
///
/// Required fields are `client_id` and `client_token`.
///
/// # Defaults
///
/// - `endpoint`: [`DEFAULT_ENDPOINT`]
/// - `user_agent_prefix`: `None`
///
/// # Example
///
/// ```rust
/// use shopify_planet_api::{PlanetConfig, ClientId, ClientToken, Endpoint};
///
/// let config = PlanetConfig::builder()
///     .client_id(ClientId::new("id").unwrap())
///     .client_token(ClientToken::new("token").unwrap())
///     .endpoint(Endpoint::new("http://localhost:4000/api/graphql").unwrap())
///     .user_agent_prefix("MyApp/1.0")
///     .build()
///     .unwrap();
///
/// assert_eq!(config.user_agent_prefix(), Some("MyApp/1.0"));
/// ```
#[derive(Debug, Default)]
pub struct PlanetConfigBuilder {
    client_id: Option<ClientId>,
    client_token: Option<ClientToken>,
    endpoint: Option<Endpoint>,
    user_agent_prefix: Option<String>,
}

impl PlanetConfigBuilder {
    /// Creates a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the client ID (required).
    #[must_use]
    pub fn client_id(mut self, id: ClientId) -> Self {
        self.client_id = Some(id);
        self
    }

    /// Sets the client token (required).
    #[must_use]
    pub fn client_token(mut self, token: ClientToken) -> Self {
        self.client_token = Some(token);
        self
    }

    /// Overrides the GraphQL endpoint.
    #[must_use]
    pub fn endpoint(mut self, endpoint: Endpoint) -> Self {
        self.endpoint = Some(endpoint);
        self
    }

    /// Sets the user agent prefix for HTTP requests.
    #[must_use]
    pub fn user_agent_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.user_agent_prefix = Some(prefix.into());
        self
    }

    /// Builds the [`PlanetConfig`], validating that required fields are set.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingRequiredField`] if `client_id` or
    /// `client_token` are not set.
    pub fn build(self) -> Result<PlanetConfig, ConfigError> {
        let client_id = self
            .client_id
            .ok_or(ConfigError::MissingRequiredField { field: "client_id" })?;
        let client_token = self
            .client_token
            .ok_or(ConfigError::MissingRequiredField {
                field: "client_token",
            })?;
        let endpoint = match self.endpoint {
            Some(endpoint) => endpoint,
            None => Endpoint::new(DEFAULT_ENDPOINT)?,
        };

        Ok(PlanetConfig {
            client_id,
            client_token,
            endpoint,
            user_agent_prefix: self.user_agent_prefix,
        })
    }
}
