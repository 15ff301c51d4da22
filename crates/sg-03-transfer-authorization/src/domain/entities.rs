//! # Domain Entities
//!
//! Transient request and receipt types for the transfer pipeline.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A signed transfer request as received from a client.
///
/// There is deliberately no sender field. The sender is recovered from
/// `signature` over the canonical message built from the other fields.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TransferRequest {
    /// Declared recipient key, in any accepted text form.
    pub recipient: String,
    pub amount: u64,
    /// Sender sequence number, bound into the signed message when present.
    pub nonce: Option<u64>,
    /// Compact `r || s` signature bytes.
    pub signature: Vec<u8>,
    /// Recovery indicator (0 or 1).
    pub recovery_id: u8,
}

/// Result of a settled transfer.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransferReceipt {
    pub new_sender_balance: u64,
    pub amount: u64,
}

/// Pipeline stages, in the only order they may run.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum TransferStage {
    Received,
    Hashed,
    Recovered,
    Resolved,
    Authorized,
    Settled,
}

impl fmt::Display for TransferStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Received => "received",
            Self::Hashed => "hashed",
            Self::Recovered => "recovered",
            Self::Resolved => "resolved",
            Self::Authorized => "authorized",
            Self::Settled => "settled",
        };
        f.write_str(name)
    }
}
