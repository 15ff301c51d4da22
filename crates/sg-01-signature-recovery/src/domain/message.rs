//! # Canonical Transfer Message
//!
//! The byte sequence a wallet signs and the authorizer re-derives.
//!
//! Layout: `format_address(recipient) || decimal(amount)`, optionally
//! followed by `"#" || decimal(nonce)` when a sequence number is bound.
//! The address text is fixed width (`0x` + 40 hex digits), so no separator
//! is needed between recipient and amount.
//!
//! Changing this layout breaks every outstanding signature.

use super::hashing::keccak256;
use shared_types::{format_address, Address, Hash};
use std::fmt;

/// Separator between the amount and an optional sequence number.
const NONCE_SEPARATOR: char = '#';

/// Canonical message for a transfer of `amount` to `recipient`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CanonicalMessage(String);

impl CanonicalMessage {
    /// Message without a sequence number.
    pub fn new(recipient: &Address, amount: u64) -> Self {
        Self::with_nonce(recipient, amount, None)
    }

    /// Message with an optional sequence number bound in.
    pub fn with_nonce(recipient: &Address, amount: u64, nonce: Option<u64>) -> Self {
        Self::from_recipient_text(&format_address(recipient), amount, nonce)
    }

    /// Message over recipient text exactly as submitted.
    ///
    /// Only equal to the canonical form when `recipient` is already
    /// canonical key text. Used to recover the signer of a request whose
    /// recipient does not parse.
    pub fn from_recipient_text(recipient: &str, amount: u64, nonce: Option<u64>) -> Self {
        let mut text = recipient.to_string();
        text.push_str(&amount.to_string());
        if let Some(nonce) = nonce {
            text.push(NONCE_SEPARATOR);
            text.push_str(&nonce.to_string());
        }
        Self(text)
    }

    /// UTF-8 bytes that get hashed.
    pub fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Keccak-256 of the message bytes.
    pub fn digest(&self) -> Hash {
        keccak256(self.as_bytes())
    }
}

impl fmt::Display for CanonicalMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
