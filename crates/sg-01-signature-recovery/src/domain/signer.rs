//! # Transfer Signer (wallet side)
//!
//! Produces recoverable secp256k1 signatures over message digests.
//!
//! ## Security Properties
//!
//! - RFC 6979 deterministic nonces (no RNG dependency for signing)
//! - Low-S normalization, with the recovery bit adjusted to match
//! - Secret bytes decoded from hex are zeroized after parsing
//!
//! The private key never leaves this type; only the signature and the
//! recovery bit are handed to the server.

use super::ecdsa::{address_from_pubkey, invert_s, is_low_s};
use super::entities::EcdsaSignature;
use super::errors::SignatureError;
use k256::ecdsa::SigningKey;
use shared_types::{Address, Hash};
use zeroize::Zeroizing;

const SECRET_KEY_LEN: usize = 32;

/// secp256k1 signing key held by a wallet.
#[derive(Clone)]
pub struct SigningKeyPair {
    signing_key: SigningKey,
}

impl SigningKeyPair {
    /// Generate random keypair.
    pub fn generate() -> Self {
        Self {
            signing_key: SigningKey::random(&mut rand::thread_rng()),
        }
    }

    /// Create from a 32-byte big-endian secret scalar.
    ///
    /// Fails with `InvalidKey` for wrong length, zero, or a scalar >= n.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, SignatureError> {
        // k256 left-pads short slices; secrets must be exactly 32 bytes here.
        if bytes.len() != SECRET_KEY_LEN {
            return Err(SignatureError::InvalidKey);
        }
        let signing_key = SigningKey::from_slice(bytes).map_err(|_| SignatureError::InvalidKey)?;
        Ok(Self { signing_key })
    }

    /// Create from hex text (optional `0x` prefix).
    pub fn from_hex(text: &str) -> Result<Self, SignatureError> {
        let trimmed = text.trim();
        let digits = trimmed.strip_prefix("0x").unwrap_or(trimmed);
        let bytes = Zeroizing::new(hex::decode(digits).map_err(|_| SignatureError::InvalidKey)?);
        Self::from_bytes(&bytes)
    }

    /// Account address controlled by this key.
    pub fn address(&self) -> Address {
        address_from_pubkey(self.signing_key.verifying_key())
    }

    /// Sign a 32-byte message digest.
    ///
    /// Returns the signature with its recovery bit in `v` (0 or 1).
    pub fn sign_digest(&self, digest: &Hash) -> Result<EcdsaSignature, SignatureError> {
        let (sig, recid) = self
            .signing_key
            .sign_prehash_recoverable(digest)
            .map_err(|_| SignatureError::InvalidKey)?;

        let sig_bytes = sig.to_bytes();
        let mut r = [0u8; 32];
        let mut s = [0u8; 32];
        r.copy_from_slice(&sig_bytes[..32]);
        s.copy_from_slice(&sig_bytes[32..]);

        let mut v = recid.to_byte() & 1;
        if !is_low_s(&s) {
            // Negating S mirrors R's y-parity, so the recovery bit flips too.
            s = invert_s(&s);
            v ^= 1;
        }

        Ok(EcdsaSignature { r, s, v })
    }
}

impl std::fmt::Debug for SigningKeyPair {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SigningKeyPair")
            .field("address", &shared_types::format_address(&self.address()))
            .finish_non_exhaustive()
    }
}
