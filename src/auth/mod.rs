//! Request authentication for the Shopify Planet API.
//!
//! Every request carries two credentials headers:
//!
//! - `X-Shopify-Planet-Client-ID`: the client ID, sent as-is
//! - `X-Shopify-Planet-Hmac-Sha256`: base64 HMAC-SHA256 of the exact request
//!   body, keyed by the client token
//!
//! The [`hmac`] module holds the signature primitive; [`Signer`] wraps it in a
//! [`KeyedHashProvider`] chosen for the current execution context.

pub mod hmac;
mod signer;

pub use signer::{
    detect_provider, KeyedHashProvider, NativeHmac, Signer, SigningError, UnsupportedHmac,
};
