//! Transport error types.
//!
//! The client never retries or reinterprets transport failures; they are
//! returned to the caller as:
//!
//! - [`HttpError::Network`]: DNS, connection, TLS, or body read failures
//! - [`HttpError::Response`]: a response with a non-2xx status code
//!
//! # Example
//!
//! ```rust,ignore
//! use shopify_planet_api::clients::HttpError;
//!
//! match http_client.post_signed(body, &signature).await {
//!     Ok(response) => println!("Success: {}", response.body),
//!     Err(HttpError::Response(e)) => println!("API error {}: {}", e.code, e.message),
//!     Err(HttpError::Network(e)) => println!("Network error: {e}"),
//! }
//! ```

use thiserror::Error;

/// Error returned when the endpoint answers with a non-2xx status.
///
/// The message field contains JSON with any of these fields from the response:
/// - `errors`: GraphQL or API error list
/// - `error`: Single error message
/// - `error_description`: Description of the error
/// - `error_reference`: Debugging reference including X-Request-Id
///
/// # Example
///
/// ```rust
/// use shopify_planet_api::clients::HttpResponseError;
///
/// let error = HttpResponseError {
///     code: 401,
///     message: r#"{"error":"Invalid HMAC"}"#.to_string(),
///     error_reference: None,
/// };
///
/// assert_eq!(error.to_string(), r#"{"error":"Invalid HMAC"}"#);
/// ```
#[derive(Debug, Error)]
#[error("{message}")]
pub struct HttpResponseError {
    /// The HTTP status code of the response.
    pub code: u16,
    /// Serialized error message in JSON format.
    pub message: String,
    /// Reference ID for error reporting (from X-Request-Id header).
    pub error_reference: Option<String>,
}

/// Unified error type for transport failures.
#[derive(Debug, Error)]
pub enum HttpError {
    /// An HTTP response error (non-2xx status code).
    #[error(transparent)]
    Response(#[from] HttpResponseError),

    /// Network or connection error.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
}

impl HttpError {
    /// Returns the HTTP status code, if a response was received.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Response(e) => Some(e.code),
            Self::Network(_) => None,
        }
    }
}
