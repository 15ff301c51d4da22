//! # Signature Errors
//!
//! Error types for hashing, signing and recovery operations.

use thiserror::Error;

/// Errors that can occur while signing or recovering a transfer signature.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SignatureError {
    /// The signature format is invalid (wrong length, scalar out of range)
    #[error("Invalid signature format")]
    InvalidFormat,

    /// Signature has high S value
    #[error("Malleable signature (high S value)")]
    MalleableSignature,

    /// Invalid recovery indicator (must be 0 or 1)
    #[error("Invalid recovery indicator: {0}")]
    InvalidRecoveryId(u8),

    /// No public key could be recovered from the signature
    #[error("Failed to recover public key")]
    RecoveryFailed,

    /// The private key is malformed (signer side only)
    #[error("Invalid private key")]
    InvalidKey,
}
