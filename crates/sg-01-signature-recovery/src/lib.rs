//! # Signature Recovery Subsystem (SG-01)
//!
//! Hashing, signing and public-key recovery for signed transfer messages.
//!
//! ## Architecture
//!
//! This subsystem follows hexagonal architecture:
//! - **Domain Layer** (`domain/`): Pure cryptographic logic, no I/O
//! - **Ports Layer** (`ports/`): Trait definitions for the inbound interface
//! - **Service Layer** (`service.rs`): Wires domain logic to ports
//!
//! ## Protocol Parameters
//!
//! - **Curve**: secp256k1, recoverable ECDSA, 64-byte `r || s` signatures
//! - **Recovery indicator**: a single bit (`0` or `1`)
//! - **Hash**: Keccak-256 over the UTF-8 canonical message
//! - **Account key**: last 20 bytes of `keccak256(uncompressed_pubkey[1..])`
//!
//! ## Security Notes
//!
//! - **Malleability Prevention**: Signatures with high S values are rejected
//! - **Trust Boundary**: The output of [`recover_address`] is the only
//!   source of sender identity; nothing in a request names the sender.

pub mod domain;
pub mod ports;
pub mod service;

// Re-export public API
pub use domain::ecdsa::{address_from_pubkey, recover_address, recover_public_key};
pub use domain::entities::{EcdsaPublicKey, EcdsaSignature};
pub use domain::errors::SignatureError;
pub use domain::hashing::keccak256;
pub use domain::message::CanonicalMessage;
pub use domain::signer::SigningKeyPair;
pub use ports::inbound::SignatureRecoveryApi;
pub use service::SignatureRecoveryService;
