//! Errors raised while decoding shared identifiers.

use thiserror::Error;

/// Failure to parse the text form of an account address.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AddressError {
    /// Input was not hex after stripping the optional `0x` prefix.
    #[error("address is not valid hex: {0}")]
    InvalidHex(String),

    /// Hex decoded to the wrong number of bytes.
    #[error("address must be {expected} bytes, got {actual}")]
    InvalidLength { expected: usize, actual: usize },
}
