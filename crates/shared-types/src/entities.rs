//! # Core Identifiers
//!
//! Hash and account-key primitives plus their canonical text codec.

use crate::errors::AddressError;

/// A 32-byte Keccak-256 digest.
pub type Hash = [u8; 32];

/// A 20-byte account key derived from a secp256k1 public key.
///
/// This is the `publicKey` of an account: last 20 bytes of
/// `keccak256(uncompressed_pubkey[1..])`.
pub type Address = [u8; 20];

/// Length of an [`Address`] in bytes.
pub const ADDRESS_LEN: usize = 20;

/// Render an address in its canonical text form: `0x` + 40 lowercase hex digits.
///
/// This string is what gets bound into signed transfer messages.
pub fn format_address(address: &Address) -> String {
    format!("0x{}", hex::encode(address))
}

/// Parse an address from text.
///
/// Accepts an optional `0x`/`0X` prefix and either hex case. The result
/// re-renders through [`format_address`] to the canonical form.
pub fn parse_address(text: &str) -> Result<Address, AddressError> {
    let trimmed = text.trim();
    let digits = trimmed
        .strip_prefix("0x")
        .or_else(|| trimmed.strip_prefix("0X"))
        .unwrap_or(trimmed);

    let bytes = hex::decode(digits).map_err(|_| AddressError::InvalidHex(text.to_string()))?;
    if bytes.len() != ADDRESS_LEN {
        return Err(AddressError::InvalidLength {
            expected: ADDRESS_LEN,
            actual: bytes.len(),
        });
    }

    let mut address = [0u8; ADDRESS_LEN];
    address.copy_from_slice(&bytes);
    Ok(address)
}

/// Serde adapter that reads and writes an [`Address`] as canonical text.
///
/// Use with `#[serde(with = "shared_types::serde_address")]`.
pub mod serde_address {
    use super::{format_address, parse_address, Address};
    use serde::{de::Error as _, Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(address: &Address, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&format_address(address))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Address, D::Error> {
        let text = String::deserialize(deserializer)?;
        parse_address(&text).map_err(D::Error::custom)
    }
}
