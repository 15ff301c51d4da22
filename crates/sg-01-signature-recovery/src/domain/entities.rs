//! # Domain Entities
//!
//! Core data structures for transfer signatures.

use super::errors::SignatureError;
use serde::{Deserialize, Serialize};
use serde_with::{serde_as, Bytes};

/// Length of a compact `r || s` signature.
pub const SIGNATURE_LEN: usize = 64;

// =============================================================================
// ECDSA Types (secp256k1)
// =============================================================================

/// Recoverable ECDSA signature on the secp256k1 curve.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EcdsaSignature {
    /// R component (32 bytes)
    pub r: [u8; 32],
    /// S component (32 bytes)
    pub s: [u8; 32],
    /// Recovery indicator (0 or 1)
    pub v: u8,
}

impl EcdsaSignature {
    /// Build a signature from compact `r || s` bytes and a recovery indicator.
    ///
    /// Only the length is checked here; scalar ranges and the recovery
    /// indicator are validated during recovery.
    pub fn from_compact(bytes: &[u8], v: u8) -> Result<Self, SignatureError> {
        if bytes.len() != SIGNATURE_LEN {
            return Err(SignatureError::InvalidFormat);
        }

        let mut r = [0u8; 32];
        let mut s = [0u8; 32];
        r.copy_from_slice(&bytes[..32]);
        s.copy_from_slice(&bytes[32..]);

        Ok(Self { r, s, v })
    }

    /// Compact `r || s` encoding (the recovery indicator travels separately).
    pub fn to_compact(&self) -> [u8; SIGNATURE_LEN] {
        let mut bytes = [0u8; SIGNATURE_LEN];
        bytes[..32].copy_from_slice(&self.r);
        bytes[32..].copy_from_slice(&self.s);
        bytes
    }
}

/// ECDSA public key (uncompressed format).
///
/// Format: 0x04 || x (32 bytes) || y (32 bytes) = 65 bytes total
#[serde_as]
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EcdsaPublicKey {
    /// Uncompressed public key bytes
    #[serde_as(as = "Bytes")]
    pub bytes: [u8; 65],
}
