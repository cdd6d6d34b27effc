//! HTTP client for the Shopify Planet endpoint.
//!
//! This module provides the [`HttpClient`] type, which sends pre-serialized,
//! pre-signed JSON bodies to the configured endpoint.

use std::collections::HashMap;

use crate::clients::errors::{HttpError, HttpResponseError};
use crate::clients::http_response::HttpResponse;
use crate::config::PlanetConfig;

/// Header carrying the client ID.
pub const CLIENT_ID_HEADER: &str = "X-Shopify-Planet-Client-ID";

/// Header carrying the base64 HMAC-SHA256 body signature.
pub const HMAC_HEADER: &str = "X-Shopify-Planet-Hmac-Sha256";

/// SDK version from Cargo.toml.
pub const SDK_VERSION: &str = env!("CARGO_PKG_VERSION");

/// HTTP client for the Shopify Planet GraphQL endpoint.
///
/// The client handles:
/// - Default headers (User-Agent, Accept, client ID)
/// - Sending the body bytes exactly as given
/// - Mapping non-2xx responses to [`HttpResponseError`]
///
/// It performs no retries and imposes no timeout.
///
/// # Thread Safety
///
/// `HttpClient` is `Send + Sync`, making it safe to share across async tasks.
#[derive(Debug)]
pub struct HttpClient {
    /// The internal reqwest HTTP client.
    client: reqwest::Client,
    /// Full endpoint URL.
    endpoint: String,
    /// Default headers to include in all requests.
    default_headers: HashMap<String, String>,
}

// Verify HttpClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<HttpClient>();
};

impl HttpClient {
    /// Creates a new HTTP client for the given configuration.
    ///
    /// # Panics
    ///
    /// Panics if the underlying reqwest client cannot be created. This should
    /// only happen in extremely unusual circumstances (e.g., TLS initialization failure).
    #[must_use]
    pub fn new(config: &PlanetConfig) -> Self {
        let user_agent_prefix = config
            .user_agent_prefix()
            .map_or(String::new(), |prefix| format!("{prefix} | "));
        let rust_version = env!("CARGO_PKG_RUST_VERSION");
        let user_agent = format!(
            "{user_agent_prefix}Shopify Planet API Library v{SDK_VERSION} | Rust {rust_version}"
        );

        let mut default_headers = HashMap::new();
        default_headers.insert("User-Agent".to_string(), user_agent);
        default_headers.insert("Accept".to_string(), "application/json".to_string());
        default_headers.insert(
            CLIENT_ID_HEADER.to_string(),
            config.client_id().as_ref().to_string(),
        );

        let client = reqwest::Client::builder()
            .use_rustls_tls()
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            endpoint: config.endpoint().as_ref().to_string(),
            default_headers,
        }
    }

    /// Returns the endpoint URL for this client.
    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Returns the default headers for this client.
    #[must_use]
    pub const fn default_headers(&self) -> &HashMap<String, String> {
        &self.default_headers
    }

    /// POSTs a JSON body with its signature.
    ///
    /// `body` is sent byte-for-byte; it must be the same string the
    /// signature was computed over.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Network`] if the request cannot be completed and
    /// [`HttpError::Response`] for non-2xx responses.
    pub async fn post_signed(
        &self,
        body: String,
        signature: &str,
    ) -> Result<HttpResponse, HttpError> {
        tracing::debug!(
            endpoint = %self.endpoint,
            body_len = body.len(),
            "Sending signed request to Shopify Planet"
        );

        let mut req_builder = self.client.post(&self.endpoint);
        for (key, value) in &self.default_headers {
            req_builder = req_builder.header(key, value);
        }
        req_builder = req_builder
            .header("Content-Type", "application/json")
            .header(HMAC_HEADER, signature)
            .body(body);

        let res = req_builder.send().await?;

        let code = res.status().as_u16();
        let res_headers = Self::parse_response_headers(res.headers());
        let body_text = res.text().await?;
        let body = Self::parse_body(code, &body_text);

        let response = HttpResponse::new(code, res_headers, body);
        if response.is_ok() {
            return Ok(response);
        }

        Err(HttpError::Response(HttpResponseError {
            code,
            message: Self::serialize_error(&response),
            error_reference: response.request_id().map(String::from),
        }))
    }

    /// Parses the body as JSON, keeping raw text for unparseable 5xx bodies.
    fn parse_body(code: u16, body_text: &str) -> serde_json::Value {
        if body_text.is_empty() {
            return serde_json::json!({});
        }
        serde_json::from_str(body_text).unwrap_or_else(|_| {
            if code >= 500 {
                serde_json::json!({ "raw_body": body_text })
            } else {
                serde_json::json!({})
            }
        })
    }

    /// Parses response headers into a `HashMap`.
    fn parse_response_headers(
        headers: &reqwest::header::HeaderMap,
    ) -> HashMap<String, Vec<String>> {
        let mut result: HashMap<String, Vec<String>> = HashMap::new();
        for (name, value) in headers {
            let key = name.as_str().to_lowercase();
            let value = value.to_str().unwrap_or_default().to_string();
            result.entry(key).or_default().push(value);
        }
        result
    }

    /// Serializes an error response to a JSON message.
    fn serialize_error(response: &HttpResponse) -> String {
        let mut error_body = serde_json::Map::new();

        for field in ["errors", "error", "error_description", "raw_body"] {
            if let Some(value) = response.body.get(field) {
                error_body.insert(field.to_string(), value.clone());
            }
        }

        if let Some(request_id) = response.request_id() {
            error_body.insert(
                "error_reference".to_string(),
                serde_json::json!(format!(
                    "If you report this error, please include this id: {request_id}."
                )),
            );
        }

        serde_json::to_string(&error_body).unwrap_or_else(|_| "{}".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn create_test_config() -> PlanetConfig {
        PlanetConfig::from_credentials("test-client", "test-token").unwrap()
    }

    #[test]
    fn test_client_uses_configured_endpoint() {
        let client = HttpClient::new(&create_test_config());
        assert_eq!(
            client.endpoint(),
            "https://shopify-planet.shopifyapps.com/api/graphql"
        );
    }

    #[test]
    fn test_default_headers_include_client_id_and_accept() {
        let client = HttpClient::new(&create_test_config());
        assert_eq!(
            client.default_headers().get(CLIENT_ID_HEADER),
            Some(&"test-client".to_string())
        );
        assert_eq!(
            client.default_headers().get("Accept"),
            Some(&"application/json".to_string())
        );
    }

    #[test]
    fn test_default_headers_never_contain_token_or_signature() {
        let client = HttpClient::new(&create_test_config());
        assert!(client.default_headers().get(HMAC_HEADER).is_none());
        assert!(client
            .default_headers()
            .values()
            .all(|value| !value.contains("test-token")));
    }

    #[test]
    fn test_user_agent_header_format() {
        let client = HttpClient::new(&create_test_config());
        let user_agent = client.default_headers().get("User-Agent").unwrap();
        assert!(user_agent.starts_with("Shopify Planet API Library v"));
        assert!(user_agent.contains("Rust"));
    }

    #[test]
    fn test_user_agent_with_prefix() {
        use crate::config::{ClientId, ClientToken};

        let config = PlanetConfig::builder()
            .client_id(ClientId::new("id").unwrap())
            .client_token(ClientToken::new("token").unwrap())
            .user_agent_prefix("MyApp/1.0")
            .build()
            .unwrap();
        let client = HttpClient::new(&config);

        let user_agent = client.default_headers().get("User-Agent").unwrap();
        assert!(user_agent.starts_with("MyApp/1.0 | "));
    }

    #[test]
    fn test_parse_body_handles_empty_and_invalid_json() {
        assert_eq!(HttpClient::parse_body(200, ""), json!({}));
        assert_eq!(HttpClient::parse_body(200, "not json"), json!({}));
        assert_eq!(
            HttpClient::parse_body(502, "Bad Gateway"),
            json!({"raw_body": "Bad Gateway"})
        );
        assert_eq!(
            HttpClient::parse_body(200, r#"{"data":{}}"#),
            json!({"data": {}})
        );
    }

    #[test]
    fn test_serialize_error_includes_request_id() {
        let mut headers = HashMap::new();
        headers.insert("x-request-id".to_string(), vec!["req-1".to_string()]);
        let response = HttpResponse::new(401, headers, json!({"error": "Invalid HMAC"}));

        let message = HttpClient::serialize_error(&response);
        let parsed: serde_json::Value = serde_json::from_str(&message).unwrap();
        assert_eq!(parsed["error"], "Invalid HMAC");
        assert!(parsed["error_reference"]
            .as_str()
            .unwrap()
            .contains("req-1"));
    }
}
