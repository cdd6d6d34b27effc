//! Keyed-hash providers and the request [`Signer`].
//!
//! Signing goes through a [`KeyedHashProvider`] so that targets without a
//! usable HMAC primitive fail with [`SigningError::UnsupportedEnvironment`]
//! instead of sending a request with a missing or bogus signature.
//!
//! [`detect_provider`] picks the provider for the current target:
//!
//! - `wasm32-unknown-unknown` (sandboxed browser): [`UnsupportedHmac`]
//! - everything else: [`NativeHmac`]

use std::fmt;
use std::sync::Arc;

use thiserror::Error;

use crate::auth::hmac::{compute_digest, encode_signature};

/// Errors produced while signing a request body.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SigningError {
    /// No keyed-hash primitive is available in this execution context.
    #[error("HMAC-SHA256 signing is not supported in this environment (provider: {provider}). Refusing to send an unsigned request.")]
    UnsupportedEnvironment {
        /// Name of the provider that rejected the operation.
        provider: &'static str,
    },
}

/// A source of HMAC-SHA256 digests.
///
/// Implementations must either return the exact digest or an error. Returning
/// an empty or partial digest is never acceptable.
pub trait KeyedHashProvider: fmt::Debug + Send + Sync {
    /// Short provider name used in logs and errors.
    fn name(&self) -> &'static str;

    /// Computes HMAC-SHA256 of `message` keyed by `key`.
    ///
    /// # Errors
    ///
    /// Returns [`SigningError::UnsupportedEnvironment`] if the provider
    /// cannot compute keyed hashes.
    fn hmac_sha256(&self, key: &[u8], message: &[u8]) -> Result<Vec<u8>, SigningError>;
}

/// Provider backed by the `hmac` and `sha2` crates.
#[derive(Clone, Copy, Debug, Default)]
pub struct NativeHmac;

impl KeyedHashProvider for NativeHmac {
    fn name(&self) -> &'static str {
        "native"
    }

    fn hmac_sha256(&self, key: &[u8], message: &[u8]) -> Result<Vec<u8>, SigningError> {
        Ok(compute_digest(key, message))
    }
}

/// Provider for contexts with no keyed-hash primitive. Always fails.
#[derive(Clone, Copy, Debug, Default)]
pub struct UnsupportedHmac;

impl KeyedHashProvider for UnsupportedHmac {
    fn name(&self) -> &'static str {
        "unsupported"
    }

    fn hmac_sha256(&self, _key: &[u8], _message: &[u8]) -> Result<Vec<u8>, SigningError> {
        tracing::error!("[shopify-planet-api] Crypto methods are not supported in this environment");
        Err(SigningError::UnsupportedEnvironment {
            provider: self.name(),
        })
    }
}

/// Returns the keyed-hash provider for the compilation target.
#[must_use]
pub fn detect_provider() -> Arc<dyn KeyedHashProvider> {
    #[cfg(all(target_arch = "wasm32", target_os = "unknown"))]
    {
        Arc::new(UnsupportedHmac)
    }
    #[cfg(not(all(target_arch = "wasm32", target_os = "unknown")))]
    {
        Arc::new(NativeHmac)
    }
}

/// Signs serialized request bodies through a [`KeyedHashProvider`].
///
/// # Example
///
/// ```rust
/// use std::sync::Arc;
/// use shopify_planet_api::auth::{Signer, UnsupportedHmac, SigningError};
///
/// let signer = Signer::detect();
/// assert_eq!(
///     signer.sign("secret", r#"{"a":1}"#).unwrap(),
///     "qp4uNXX11wmLbKzNeQiIw21f22M0KnO62i1qUXR6hJQ="
/// );
///
/// let signer = Signer::new(Arc::new(UnsupportedHmac));
/// assert!(matches!(
///     signer.sign("secret", r#"{"a":1}"#),
///     Err(SigningError::UnsupportedEnvironment { .. })
/// ));
/// ```
#[derive(Clone, Debug)]
pub struct Signer {
    provider: Arc<dyn KeyedHashProvider>,
}

impl Signer {
    /// Creates a signer using the given provider.
    #[must_use]
    pub fn new(provider: Arc<dyn KeyedHashProvider>) -> Self {
        Self { provider }
    }

    /// Creates a signer using [`detect_provider`].
    #[must_use]
    pub fn detect() -> Self {
        Self::new(detect_provider())
    }

    /// Returns the active provider.
    #[must_use]
    pub fn provider(&self) -> &dyn KeyedHashProvider {
        self.provider.as_ref()
    }

    /// Signs `body` with `secret_token`, returning the base64 signature.
    ///
    /// # Errors
    ///
    /// Returns [`SigningError::UnsupportedEnvironment`] if the provider
    /// cannot sign.
    pub fn sign(&self, secret_token: &str, body: &str) -> Result<String, SigningError> {
        let digest = self
            .provider
            .hmac_sha256(secret_token.as_bytes(), body.as_bytes())?;
        Ok(encode_signature(&digest))
    }
}

impl Default for Signer {
    fn default() -> Self {
        Self::detect()
    }
}

// Verify Signer is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Signer>();
};
