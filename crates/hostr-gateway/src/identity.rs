//! Publisher identity decoding.
//!
//! The subdomain label names a publisher as an `npub1...` bech32 public key.
//! Decoding is deterministic; any malformed label (wrong length, bad
//! checksum, wrong prefix) is rejected distinctly so the caller can answer
//! 404 rather than 500.

use nostr::PublicKey;

use crate::error::GatewayError;

/// Decode a subdomain label into a publisher public key.
///
/// Accepts `npub1...` bech32 and 64-character hex, the two forms
/// `PublicKey::parse` understands.
pub fn decode(label: &str) -> Result<PublicKey, GatewayError> {
    PublicKey::parse(label).map_err(|err| GatewayError::InvalidIdentity(err.to_string()))
}
