//! # Transfer Errors
//!
//! Every failure is terminal and leaves the ledger unchanged.

use sg_01_signature_recovery::SignatureError;
use sg_02_account_ledger::LedgerError;
use shared_types::{format_address, Address};
use thiserror::Error;

/// Errors returned by the transfer authorizer.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TransferError {
    /// Amount is zero or above the configured ceiling
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),

    /// Malformed signature or recovery indicator out of range
    #[error("Invalid signature: {0}")]
    InvalidSignature(#[from] SignatureError),

    /// Signature recovered to a key that owns no account
    #[error("Unknown sender: {}", format_address(.address))]
    UnknownSender { address: Address },

    /// Declared recipient is malformed or owns no account
    #[error("Unknown recipient: {recipient}")]
    UnknownRecipient { recipient: String },

    /// Recovered sender and declared recipient are the same account
    #[error("Sender and recipient are the same account")]
    SelfTransfer,

    /// Balance below the requested amount
    #[error("Insufficient funds: required {required}, available {available}")]
    InsufficientFunds { required: u64, available: u64 },

    /// Missing or stale sequence number
    #[error("Replay rejected: expected nonce {expected}, got {actual:?}")]
    Replay { expected: u64, actual: Option<u64> },

    /// Ledger invariant failure that no client input should reach
    #[error("Ledger error: {0}")]
    Ledger(LedgerError),
}

/// Flat error kind for transports to map onto their own status codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TransferErrorKind {
    InvalidAmount,
    InvalidSignature,
    UnknownSender,
    UnknownRecipient,
    SelfTransfer,
    InsufficientFunds,
    Replay,
    Internal,
}

impl TransferErrorKind {
    /// Stable snake_case code.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::InvalidAmount => "invalid_amount",
            Self::InvalidSignature => "invalid_signature",
            Self::UnknownSender => "unknown_sender",
            Self::UnknownRecipient => "unknown_recipient",
            Self::SelfTransfer => "self_transfer",
            Self::InsufficientFunds => "insufficient_funds",
            Self::Replay => "replay",
            Self::Internal => "internal",
        }
    }
}

impl TransferError {
    pub fn kind(&self) -> TransferErrorKind {
        match self {
            Self::InvalidAmount(_) => TransferErrorKind::InvalidAmount,
            Self::InvalidSignature(_) => TransferErrorKind::InvalidSignature,
            Self::UnknownSender { .. } => TransferErrorKind::UnknownSender,
            Self::UnknownRecipient { .. } => TransferErrorKind::UnknownRecipient,
            Self::SelfTransfer => TransferErrorKind::SelfTransfer,
            Self::InsufficientFunds { .. } => TransferErrorKind::InsufficientFunds,
            Self::Replay { .. } => TransferErrorKind::Replay,
            Self::Ledger(_) => TransferErrorKind::Internal,
        }
    }

    /// Map a settlement failure for the given sender back into the taxonomy.
    pub(crate) fn from_settlement(error: LedgerError, sender: &Address) -> Self {
        match error {
            LedgerError::InsufficientFunds {
                required,
                available,
            } => Self::InsufficientFunds {
                required,
                available,
            },
            LedgerError::InvalidNonce { expected, actual } => Self::Replay {
                expected,
                actual: Some(actual),
            },
            LedgerError::SelfTransfer => Self::SelfTransfer,
            LedgerError::AccountNotFound { address } if &address == sender => {
                Self::UnknownSender { address }
            }
            LedgerError::AccountNotFound { address } => Self::UnknownRecipient {
                recipient: format_address(&address),
            },
            other => Self::Ledger(other),
        }
    }
}
