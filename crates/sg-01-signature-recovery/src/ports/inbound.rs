//! # Inbound Ports (Driving Ports / API)
//!
//! Traits that define the public API of this subsystem.

use crate::domain::entities::{EcdsaPublicKey, EcdsaSignature};
use crate::domain::errors::SignatureError;
use crate::domain::message::CanonicalMessage;
use shared_types::Hash;

/// Primary Signature Recovery API.
///
/// This is the cryptographic half of transfer authorization: it turns a
/// canonical message and a signature into the identity of whoever signed it.
/// Implementations must be thread-safe (`Send + Sync`) and pure.
pub trait SignatureRecoveryApi: Send + Sync {
    /// Hash a canonical transfer message.
    fn hash_message(&self, message: &CanonicalMessage) -> Hash;

    /// Recover the uncompressed public key that produced the signature.
    ///
    /// The signer's account is [`EcdsaPublicKey::address`] of the result.
    ///
    /// # Security
    /// - Rejects high S values and recovery indicators other than 0 or 1
    fn recover_public_key(
        &self,
        message_hash: &Hash,
        signature: &EcdsaSignature,
    ) -> Result<EcdsaPublicKey, SignatureError>;
}
