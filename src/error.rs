//! Error types for client configuration.
//!
//! All configuration constructors return `Result<T, ConfigError>` so that a
//! client can never be built from empty credentials.
//!
//! # Example
//!
//! ```rust
//! use shopify_planet_api::{ClientId, ConfigError};
//!
//! let result = ClientId::new("");
//! assert!(matches!(result, Err(ConfigError::EmptyClientId)));
//! ```

use thiserror::Error;

/// Errors that can occur while configuring a Planet client.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Client ID cannot be empty.
    #[error("Client ID cannot be empty. Provide both a Shopify Planet client ID and token.")]
    EmptyClientId,

    /// Client token cannot be empty.
    #[error("Client token cannot be empty. Provide both a Shopify Planet client ID and token.")]
    EmptyClientToken,

    /// A required field is missing.
    #[error("Missing required field: '{field}'. This field must be set before building the configuration.")]
    MissingRequiredField {
        /// The name of the missing field.
        field: &'static str,
    },

    /// Endpoint URL is invalid.
    #[error("Invalid endpoint URL '{url}'. Please provide a valid URL with scheme (e.g., 'https://shopify-planet.shopifyapps.com/api/graphql').")]
    InvalidEndpoint {
        /// The invalid URL that was provided.
        url: String,
    },
}
