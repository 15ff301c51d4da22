//! # Wallet
//!
//! Client-side helper that holds a private key and produces signed
//! transfer requests. The key never leaves the wallet; only the signature
//! and recovery bit travel with the request.

use crate::domain::entities::TransferRequest;
use sg_01_signature_recovery::{CanonicalMessage, SignatureError, SigningKeyPair};
use shared_types::{format_address, Address};

#[derive(Clone, Debug)]
pub struct Wallet {
    key: SigningKeyPair,
}

impl Wallet {
    /// Load from a hex-encoded 32-byte secret (optional `0x` prefix).
    pub fn from_hex(secret: &str) -> Result<Self, SignatureError> {
        SigningKeyPair::from_hex(secret).map(Self::from_key)
    }

    pub fn from_key(key: SigningKeyPair) -> Self {
        Self { key }
    }

    /// Fresh random wallet.
    pub fn generate() -> Self {
        Self::from_key(SigningKeyPair::generate())
    }

    /// Account key controlled by this wallet.
    pub fn address(&self) -> Address {
        self.key.address()
    }

    /// Sign `recipient` and `amount` (and `nonce`, when given) into a
    /// ready-to-submit request.
    pub fn sign_transfer(
        &self,
        recipient: &Address,
        amount: u64,
        nonce: Option<u64>,
    ) -> Result<TransferRequest, SignatureError> {
        let message = CanonicalMessage::with_nonce(recipient, amount, nonce);
        let signature = self.key.sign_digest(&message.digest())?;

        Ok(TransferRequest {
            recipient: format_address(recipient),
            amount,
            nonce,
            signature: signature.to_compact().to_vec(),
            recovery_id: signature.v,
        })
    }
}
