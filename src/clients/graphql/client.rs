//! Shopify Planet GraphQL client.
//!
//! This module provides the [`PlanetClient`] type, which signs and sends
//! GraphQL requests to the Planet endpoint.

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::auth::Signer;
use crate::clients::graphql::{GraphqlRequest, GraphqlResponse, PlanetError};
use crate::clients::graphql::{ShopInfo, ShopInfoVariables};
use crate::clients::HttpClient;
use crate::config::{ClientToken, PlanetConfig};
use crate::error::ConfigError;

/// GraphQL client for the Shopify Planet API.
///
/// Each call serializes the request once, signs that string, and sends the
/// same string as the body. The response's `data` field is returned; a
/// missing `data` field yields `None`.
///
/// # Thread Safety
///
/// `PlanetClient` is `Send + Sync`. It holds only immutable credentials, so a
/// single instance can serve concurrent calls.
///
/// # Example
///
/// ```rust,ignore
/// use shopify_planet_api::{PlanetClient, ShopInfoVariables};
///
/// let client = PlanetClient::from_credentials("client-id", "client-token")?;
///
/// let info = client
///     .get_shop_info(&ShopInfoVariables::new("my-store.myshopify.com"))
///     .await?;
///
/// if let Some(shop) = info.and_then(|info| info.shop) {
///     println!("Carbon neutral: {}", shop.all_shipments_carbon_neutral);
/// }
/// ```
#[derive(Debug)]
pub struct PlanetClient {
    /// The internal HTTP client for making requests.
    http_client: HttpClient,
    /// Signs request bodies.
    signer: Signer,
    /// Key for the body signature.
    client_token: ClientToken,
}

// Verify PlanetClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<PlanetClient>();
};

impl PlanetClient {
    /// Creates a client using the signer detected for this target.
    #[must_use]
    pub fn new(config: &PlanetConfig) -> Self {
        Self::with_signer(config, Signer::detect())
    }

    /// Creates a client with an explicit signer.
    #[must_use]
    pub fn with_signer(config: &PlanetConfig, signer: Signer) -> Self {
        Self {
            http_client: HttpClient::new(config),
            signer,
            client_token: config.client_token().clone(),
        }
    }

    /// Creates a client from raw credential strings.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyClientId`] or [`ConfigError::EmptyClientToken`]
    /// if either value is empty.
    pub fn from_credentials(
        client_id: impl Into<String>,
        client_token: impl Into<String>,
    ) -> Result<Self, ConfigError> {
        Ok(Self::new(&PlanetConfig::from_credentials(
            client_id,
            client_token,
        )?))
    }

    /// Returns the endpoint this client sends to.
    #[must_use]
    pub fn endpoint(&self) -> &str {
        self.http_client.endpoint()
    }

    /// Fetches the Planet attributes of a shop.
    ///
    /// # Errors
    ///
    /// See [`call`](Self::call).
    pub async fn get_shop_info(
        &self,
        variables: &ShopInfoVariables,
    ) -> Result<Option<ShopInfo>, PlanetError> {
        self.call(&variables.to_request()).await
    }

    /// Executes a GraphQL request and decodes its `data` as `T`.
    ///
    /// Returns `Ok(None)` if the response has no `data`, or if `data` does
    /// not decode as `T` (logged at `warn`).
    ///
    /// # Errors
    ///
    /// - [`PlanetError::Signing`] if the body cannot be signed; no request is sent
    /// - [`PlanetError::Http`] for network failures and non-2xx responses
    /// - [`PlanetError::Serialize`] if the request cannot be serialized
    pub async fn call<T: DeserializeOwned>(
        &self,
        request: &GraphqlRequest,
    ) -> Result<Option<T>, PlanetError> {
        let Some(data) = self.call_raw(request).await? else {
            return Ok(None);
        };

        match serde_json::from_value(data) {
            Ok(value) => Ok(Some(value)),
            Err(e) => {
                tracing::warn!("Unexpected Shopify Planet response shape: {e}");
                Ok(None)
            }
        }
    }

    /// Executes a GraphQL request and returns its `data` untyped.
    ///
    /// # Errors
    ///
    /// Same as [`call`](Self::call).
    pub async fn call_raw(&self, request: &GraphqlRequest) -> Result<Option<Value>, PlanetError> {
        let body = request.to_body()?;
        let signature = self.signer.sign(self.client_token.as_ref(), &body)?;
        let response = self.http_client.post_signed(body, &signature).await?;

        let envelope = GraphqlResponse::from_body(response.body);
        if let Some(errors) = envelope.errors.as_deref().filter(|e| !e.is_empty()) {
            tracing::warn!(
                count = errors.len(),
                "Shopify Planet returned GraphQL errors: {}",
                errors[0].message
            );
        }

        Ok(envelope.data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::UnsupportedHmac;
    use std::sync::Arc;

    #[test]
    fn test_from_credentials_validates_both_fields() {
        assert!(matches!(
            PlanetClient::from_credentials("", "token"),
            Err(ConfigError::EmptyClientId)
        ));
        assert!(matches!(
            PlanetClient::from_credentials("id", ""),
            Err(ConfigError::EmptyClientToken)
        ));
        assert!(PlanetClient::from_credentials("id", "token").is_ok());
    }

    #[test]
    fn test_client_uses_default_endpoint() {
        let client = PlanetClient::from_credentials("id", "token").unwrap();
        assert_eq!(
            client.endpoint(),
            "https://shopify-planet.shopifyapps.com/api/graphql"
        );
    }

    #[test]
    fn test_debug_output_masks_token() {
        let client = PlanetClient::from_credentials("id", "hidden-token").unwrap();
        assert!(!format!("{client:?}").contains("hidden-token"));
    }

    #[tokio::test]
    async fn test_unsupported_signer_fails_before_sending() {
        let config = PlanetConfig::from_credentials("id", "token").unwrap();
        let client = PlanetClient::with_signer(&config, Signer::new(Arc::new(UnsupportedHmac)));

        let result = client
            .get_shop_info(&ShopInfoVariables::new("example.myshopify.com"))
            .await;

        assert!(matches!(result, Err(PlanetError::Signing(_))));
    }
}
