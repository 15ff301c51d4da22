//! # Signature Recovery Service
//!
//! Application service layer that implements the `SignatureRecoveryApi` trait
//! by delegating to the domain layer.

use crate::domain::ecdsa;
use crate::domain::entities::{EcdsaPublicKey, EcdsaSignature};
use crate::domain::errors::SignatureError;
use crate::domain::message::CanonicalMessage;
use crate::ports::inbound::SignatureRecoveryApi;
use shared_types::Hash;

/// Signature Recovery Service.
#[derive(Debug, Clone, Copy, Default)]
pub struct SignatureRecoveryService;

impl SignatureRecoveryService {
    pub fn new() -> Self {
        Self
    }
}

impl SignatureRecoveryApi for SignatureRecoveryService {
    fn hash_message(&self, message: &CanonicalMessage) -> Hash {
        message.digest()
    }

    fn recover_public_key(
        &self,
        message_hash: &Hash,
        signature: &EcdsaSignature,
    ) -> Result<EcdsaPublicKey, SignatureError> {
        ecdsa::recover_public_key(message_hash, signature)
    }
}

// =============================================================================
// TESTS
// =============================================================================
