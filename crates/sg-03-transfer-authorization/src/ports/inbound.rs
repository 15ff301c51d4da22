//! # Inbound Ports (Driving Ports / API)
//!
//! The boundary consumed by the transport layer.

use crate::domain::entities::{TransferReceipt, TransferRequest};
use crate::domain::errors::TransferError;
use sg_02_account_ledger::AccountSummary;

/// Transfer API.
///
/// Implementations must be thread-safe (`Send + Sync`); concurrent calls
/// are expected and settle atomically.
pub trait TransferApi: Send + Sync {
    /// Authorize and settle a signed transfer.
    ///
    /// `signature` is the compact 64-byte `r || s` form; `recovery_id` is
    /// the single recovery bit. `nonce` is only required when sequence
    /// number replay protection is enabled.
    fn submit_transfer(
        &self,
        recipient_key: &str,
        amount: u64,
        signature: &[u8],
        recovery_id: u8,
        nonce: Option<u64>,
    ) -> Result<TransferReceipt, TransferError> {
        self.submit(&TransferRequest {
            recipient: recipient_key.to_string(),
            amount,
            nonce,
            signature: signature.to_vec(),
            recovery_id,
        })
    }

    /// Authorize and settle an already assembled request.
    fn submit(&self, request: &TransferRequest) -> Result<TransferReceipt, TransferError>;

    /// Public key and balance of every account. No key material.
    fn list_accounts(&self) -> Vec<AccountSummary>;

    /// Balance of one account, `None` for malformed or unknown keys.
    fn balance_of(&self, public_key: &str) -> Option<u64>;
}
