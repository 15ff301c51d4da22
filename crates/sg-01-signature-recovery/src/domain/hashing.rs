//! # Keccak-256 Hashing
//!
//! The message hasher shared by signer and verifier.

use sha3::{Digest, Keccak256};
use shared_types::Hash;

/// Keccak-256 hash function.
pub fn keccak256(data: &[u8]) -> Hash {
    let mut hasher = Keccak256::new();
    hasher.update(data);
    hasher.finalize().into()
}
