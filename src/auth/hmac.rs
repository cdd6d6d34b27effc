//! HMAC-SHA256 request signatures.
//!
//! Shopify Planet authenticates each request with the base64-encoded
//! HMAC-SHA256 of the raw request body, keyed by the client token. The
//! signature is sent in the `X-Shopify-Planet-Hmac-Sha256` header.
//!
//! There is no nonce or timestamp in the signed material: the same token and
//! body always produce the same signature.
//!
//! # Example
//!
//! ```rust
//! use shopify_planet_api::auth::hmac::{sign, verify};
//!
//! let body = r#"{"a":1}"#;
//! let signature = sign("secret", body);
//! assert_eq!(signature, "qp4uNXX11wmLbKzNeQiIw21f22M0KnO62i1qUXR6hJQ=");
//! assert!(verify("secret", body, &signature));
//! ```

use base64::prelude::*;
use hmac::{Hmac, Mac};
use sha2::Sha256;
use subtle::ConstantTimeEq;

type HmacSha256 = Hmac<Sha256>;

/// Computes the raw HMAC-SHA256 digest of `message` keyed by `key`.
///
/// # Panics
///
/// Never in practice: HMAC-SHA256 accepts keys of any length.
#[must_use]
pub fn compute_digest(key: &[u8], message: &[u8]) -> Vec<u8> {
    let mut mac = HmacSha256::new_from_slice(key).expect("HMAC can take key of any size");
    mac.update(message);
    mac.finalize().into_bytes().to_vec()
}

/// Encodes a digest as RFC 4648 standard base64 (padded, `+` and `/`).
#[must_use]
pub fn encode_signature(digest: &[u8]) -> String {
    BASE64_STANDARD.encode(digest)
}

/// Signs a serialized request body with the client token.
///
/// Both arguments are used as their UTF-8 bytes. The result is the
/// base64-encoded HMAC-SHA256 digest expected in the
/// `X-Shopify-Planet-Hmac-Sha256` header.
///
/// # Example
///
/// ```rust
/// use shopify_planet_api::auth::hmac::sign;
///
/// let sig = sign("secret-token", r#"{"query":"{ shop }","variables":{}}"#);
/// assert_eq!(sig.len(), 44); // SHA256 produces 32 bytes = 44 base64 chars
/// ```
#[must_use]
pub fn sign(secret_token: &str, body: &str) -> String {
    encode_signature(&compute_digest(secret_token.as_bytes(), body.as_bytes()))
}

/// Performs constant-time comparison of two strings.
#[must_use]
pub fn constant_time_compare(a: &str, b: &str) -> bool {
    a.as_bytes().ct_eq(b.as_bytes()).into()
}

/// Checks a received signature against the one computed for `body`.
///
/// This is the check the receiving side of the scheme performs over the raw
/// body it received. The comparison is constant-time.
#[must_use]
pub fn verify(secret_token: &str, body: &str, signature: &str) -> bool {
    constant_time_compare(&sign(secret_token, body), signature)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sign_matches_golden_value() {
        assert_eq!(
            sign("secret", r#"{"a":1}"#),
            "qp4uNXX11wmLbKzNeQiIw21f22M0KnO62i1qUXR6hJQ="
        );
    }

    #[test]
    fn test_compute_digest_matches_rfc_4231_case_2() {
        let digest = compute_digest(b"Jefe", b"what do ya want for nothing?");
        let expected: [u8; 32] = [
            0x5b, 0xdc, 0xc1, 0x46, 0xbf, 0x60, 0x75, 0x4e, 0x6a, 0x04, 0x24, 0x26, 0x08, 0x95,
            0x75, 0xc7, 0x5a, 0x00, 0x3f, 0x08, 0x9d, 0x27, 0x39, 0x83, 0x9d, 0xec, 0x58, 0xb9,
            0x64, 0xec, 0x38, 0x43,
        ];
        assert_eq!(digest, expected);
        assert_eq!(
            encode_signature(&digest),
            "W9zBRr9gdU5qBCQmCJV1x1oAPwidJzmDnexYuWTsOEM="
        );
    }

    #[test]
    fn test_sign_is_deterministic() {
        let body = r#"{"query":"query { shop { id } }","variables":{}}"#;
        let first = sign("token", body);
        for _ in 0..10 {
            assert_eq!(sign("token", body), first);
        }
    }

    #[test]
    fn test_sign_changes_with_body() {
        assert_eq!(
            sign("secret", r#"{"a":2}"#),
            "5PbWZu44dv7/T88u1IH01GJNXHtbGFf2l99Cc3N9G3k="
        );
        assert_ne!(sign("secret", r#"{"a":1}"#), sign("secret", r#"{"a":2}"#));
    }

    #[test]
    fn test_sign_changes_with_token() {
        assert_eq!(
            sign("secreT", r#"{"a":1}"#),
            "+VyYNEcbzLmzZjFYHVAUQIUEkVom8uFmifMPKBxUMEY="
        );
        assert_ne!(sign("secret", r#"{"a":1}"#), sign("secreT", r#"{"a":1}"#));
    }

    #[test]
    fn test_sign_uses_standard_base64_alphabet() {
        // This digest contains both '+' and '/', which base64url would replace.
        let sig = sign("secreT", r#"{"a":1}"#);
        assert!(sig.contains('+'));
        assert!(sig.ends_with('='));
        let sig = sign("secret", r#"{"a":2}"#);
        assert!(sig.contains('/'));
    }

    #[test]
    fn test_sign_whitespace_is_significant() {
        assert_ne!(sign("secret", r#"{"a":1}"#), sign("secret", r#"{"a": 1}"#));
    }

    #[test]
    fn test_verify_accepts_matching_signature() {
        let body = r#"{"a":1}"#;
        assert!(verify("secret", body, "qp4uNXX11wmLbKzNeQiIw21f22M0KnO62i1qUXR6hJQ="));
    }

    #[test]
    fn test_verify_rejects_tampered_body_or_signature() {
        let signature = sign("secret", r#"{"a":1}"#);
        assert!(!verify("secret", r#"{"a":2}"#, &signature));
        assert!(!verify("other", r#"{"a":1}"#, &signature));
        assert!(!verify("secret", r#"{"a":1}"#, ""));
        assert!(!verify("secret", r#"{"a":1}"#, &signature[..43]));
    }

    #[test]
    fn test_constant_time_compare() {
        assert!(constant_time_compare("abc", "abc"));
        assert!(!constant_time_compare("abc", "abd"));
        assert!(!constant_time_compare("abc", "abcd"));
        assert!(constant_time_compare("", ""));
    }
}
