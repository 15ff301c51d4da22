use shared_types::Address;
use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum LedgerError {
    #[error("Account not found: {address:?}")]
    AccountNotFound { address: Address },

    #[error("Insufficient funds: required {required}, available {available}")]
    InsufficientFunds { required: u64, available: u64 },

    #[error("Invalid nonce: expected {expected}, got {actual}")]
    InvalidNonce { expected: u64, actual: u64 },

    #[error("Sender and recipient are the same account")]
    SelfTransfer,

    #[error("Balance overflow on account {address:?}")]
    BalanceOverflow { address: Address },

    #[error("Duplicate genesis account: {address:?}")]
    DuplicateAccount { address: Address },

    #[error("Genesis total supply exceeds u64")]
    SupplyOverflow,
}
